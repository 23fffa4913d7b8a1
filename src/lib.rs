//! # Cat Corner
//!
//! The model behind a cat adoption order form: pick a breed, a colour, an
//! age and optional special requests, fill in an address, and submit. The
//! submitted order is echoed back by the endpoint and turned into a
//! confirmation sentence.
//!
//! ## Features
//!
//! - **Order model**: indices into fixed option lists plus address fields
//! - **Derived validity**: an order is valid once all four address fields are set
//! - **Flat JSON**: exactly nine wire keys, with typed decode errors
//! - **Form session**: presentation recomputed and an event published after every edit
//! - **Guarded submission**: one exchange per session, stale outcomes ignored
//! - **Echo service**: a local stand-in for the remote endpoint
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use cat_corner::prelude::*;
//!
//! let mut session = FormSession::new();
//! session.set(OrderField::Type, 2)?;
//! session.set(OrderField::Color, 1)?;
//! session.set(OrderField::Name, "Trang")?;
//! session.set(OrderField::StreetAddress, "1 Main St")?;
//! session.set(OrderField::City, "Toronto")?;
//! session.set(OrderField::PostalCode, "M5V")?;
//!
//! let transport = HttpTransport::new(&ClientConfig::default_config())?;
//! let message = session.submit(&transport).await?;
//! // "Your search for Siamese, White, Short hair cat is found."
//! ```

pub mod client;
pub mod config;
pub mod core;
pub mod server;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        error::{
            ConfigError, DecodeError, EncodeError, LookupError, NetworkError, SubmissionError,
            ValidationError,
        },
        events::{EventBus, EventEnvelope, FormEvent, SubmissionPhase},
        field::{FieldValue, OrderField},
        options::{COLOURS, CatalogOptions, HAIR_LENGTHS, OptionList, TYPES},
        order::Order,
        validation::AGE_RANGE,
    };

    // === Client ===
    pub use crate::client::{
        FormPresentation, FormSession, HttpTransport, OrderTransport, SubmissionState, confirm,
        place_order,
    };

    // === Config ===
    pub use crate::config::{ClientConfig, DEFAULT_ENDPOINT};

    // === Server ===
    pub use crate::server::{ECHO_PATH, EchoServer, RestExposure};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use serde::{Deserialize, Serialize};
    pub use uuid::Uuid;
}
