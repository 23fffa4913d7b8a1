//! Submission side of the form
//!
//! - [`FormSession`] owns the order being edited and its submission state
//! - [`place_order`] performs the single request/response exchange
//! - [`OrderTransport`] is the seam to the network, [`HttpTransport`] the
//!   reqwest implementation

pub mod session;
pub mod submission;
pub mod transport;

pub use session::{FormPresentation, FormSession, SubmissionState};
pub use submission::{confirm, place_order};
pub use transport::{HttpTransport, OrderTransport};
