//! Core module containing the order model and the types around it

pub mod error;
pub mod events;
pub mod field;
pub mod options;
pub mod order;
pub mod validation;

pub use error::{
    ConfigError, DecodeError, EncodeError, LookupError, NetworkError, SubmissionError,
    ValidationError,
};
pub use events::{EventBus, EventEnvelope, FormEvent, SubmissionPhase};
pub use field::{FieldValue, OrderField};
pub use options::{CatalogOptions, OptionList};
pub use order::Order;
