//! Typed error handling for the order form and its submission flow
//!
//! Every failure the form can run into has its own error type so callers can
//! match on the exact cause instead of inspecting strings.
//!
//! # Error Categories
//!
//! - [`EncodeError`]: the order could not be serialized (blocks submission)
//! - [`NetworkError`]: the request could not be sent or its response read
//! - [`DecodeError`]: the response body is not an order-shaped JSON object
//! - [`LookupError`]: an echoed index falls outside its option list
//! - [`ValidationError`]: a field assignment was rejected
//! - [`ConfigError`]: client configuration could not be loaded
//! - [`SubmissionError`]: a submit attempt was refused or failed
//!
//! # Example
//!
//! ```rust,ignore
//! use cat_corner::prelude::*;
//!
//! match session.submit(&transport).await {
//!     Ok(message) => println!("{}", message),
//!     Err(SubmissionError::InvalidOrder) => println!("fill in the address first"),
//!     Err(e) => eprintln!("submission failed: {}", e),
//! }
//! ```

use std::fmt;

// =============================================================================
// Encode Errors
// =============================================================================

/// Serializing an order to JSON failed
#[derive(Debug)]
pub struct EncodeError {
    pub message: String,
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Failed to encode order: {}", self.message)
    }
}

impl std::error::Error for EncodeError {}

impl From<serde_json::Error> for EncodeError {
    fn from(err: serde_json::Error) -> Self {
        EncodeError {
            message: err.to_string(),
        }
    }
}

// =============================================================================
// Network Errors
// =============================================================================

/// The exchange with the endpoint did not complete
#[derive(Debug)]
pub enum NetworkError {
    /// The request could not be delivered or the response could not be read
    Transport { endpoint: String, message: String },
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkError::Transport { endpoint, message } => {
                write!(f, "No data in response from {}: {}", endpoint, message)
            }
        }
    }
}

impl std::error::Error for NetworkError {}

impl NetworkError {
    pub fn error_code(&self) -> &'static str {
        match self {
            NetworkError::Transport { .. } => "NETWORK_TRANSPORT",
        }
    }
}

// =============================================================================
// Decode Errors
// =============================================================================

/// A JSON payload could not be turned into an order
#[derive(Debug)]
pub enum DecodeError {
    /// The payload is not a JSON object at all
    Malformed { message: String, raw: String },

    /// A required key is absent
    MissingField { field: &'static str, raw: String },

    /// A key is present but holds the wrong JSON type
    WrongType {
        field: &'static str,
        expected: &'static str,
        raw: String,
    },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::Malformed { message, .. } => {
                write!(f, "Invalid response: {}", message)
            }
            DecodeError::MissingField { field, .. } => {
                write!(f, "Invalid response: missing field '{}'", field)
            }
            DecodeError::WrongType {
                field, expected, ..
            } => {
                write!(f, "Invalid response: field '{}' must be {}", field, expected)
            }
        }
    }
}

impl std::error::Error for DecodeError {}

impl DecodeError {
    /// The raw payload that failed to decode, for logging
    pub fn raw(&self) -> &str {
        match self {
            DecodeError::Malformed { raw, .. }
            | DecodeError::MissingField { raw, .. }
            | DecodeError::WrongType { raw, .. } => raw,
        }
    }
}

// =============================================================================
// Lookup Errors
// =============================================================================

/// An index does not address an entry of its option list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    IndexOutOfRange {
        list: &'static str,
        index: i64,
        len: usize,
    },
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupError::IndexOutOfRange { list, index, len } => {
                write!(
                    f,
                    "Index {} is out of range for {} ({} entries)",
                    index, list, len
                )
            }
        }
    }
}

impl std::error::Error for LookupError {}

// =============================================================================
// Validation Errors
// =============================================================================

/// A field assignment was rejected
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// The value kind does not match the field
    TypeMismatch {
        field: &'static str,
        expected: &'static str,
    },

    /// The value lies outside what the form allows for this field
    OutOfBounds { field: &'static str, message: String },

    /// A required field is empty
    Required { field: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::TypeMismatch { field, expected } => {
                write!(f, "Field '{}' expects {}", field, expected)
            }
            ValidationError::OutOfBounds { field, message } => {
                write!(f, "Field '{}': {}", field, message)
            }
            ValidationError::Required { field } => {
                write!(f, "Field '{}' is required", field)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to client configuration
#[derive(Debug)]
pub enum ConfigError {
    /// The configuration file could not be read
    Io { path: String, message: String },

    /// The YAML document could not be parsed
    Parse { message: String },

    /// The endpoint is not an http(s) URL
    InvalidEndpoint { endpoint: String },

    /// A zero timeout would fail every exchange immediately
    InvalidTimeout { timeout_secs: u64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, message } => {
                write!(f, "Failed to read config file '{}': {}", path, message)
            }
            ConfigError::Parse { message } => {
                write!(f, "Failed to parse configuration: {}", message)
            }
            ConfigError::InvalidEndpoint { endpoint } => {
                write!(f, "Endpoint '{}' must be an http or https URL", endpoint)
            }
            ConfigError::InvalidTimeout { timeout_secs } => {
                write!(f, "Timeout must be at least 1 second (got {})", timeout_secs)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// =============================================================================
// Submission Errors
// =============================================================================

/// Why a submit attempt did not produce a confirmation
#[derive(Debug)]
pub enum SubmissionError {
    /// The address fields are incomplete, nothing was sent
    InvalidOrder,

    /// This session already left the idle state
    AlreadySubmitted,

    /// The order could not be encoded, nothing was sent
    Encode(EncodeError),

    /// The exchange with the endpoint failed
    Network(NetworkError),

    /// The echoed body is not an order
    Decode(DecodeError),

    /// The echoed order references an unknown option
    Lookup(LookupError),
}

impl fmt::Display for SubmissionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionError::InvalidOrder => {
                write!(f, "Order is incomplete: name and address are required")
            }
            SubmissionError::AlreadySubmitted => {
                write!(f, "Order was already submitted in this session")
            }
            SubmissionError::Encode(e) => write!(f, "{}", e),
            SubmissionError::Network(e) => write!(f, "{}", e),
            SubmissionError::Decode(e) => write!(f, "{}", e),
            SubmissionError::Lookup(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for SubmissionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SubmissionError::Encode(e) => Some(e),
            SubmissionError::Network(e) => Some(e),
            SubmissionError::Decode(e) => Some(e),
            SubmissionError::Lookup(e) => Some(e),
            _ => None,
        }
    }
}

impl SubmissionError {
    pub fn error_code(&self) -> &'static str {
        match self {
            SubmissionError::InvalidOrder => "INVALID_ORDER",
            SubmissionError::AlreadySubmitted => "ALREADY_SUBMITTED",
            SubmissionError::Encode(_) => "ENCODE_ERROR",
            SubmissionError::Network(e) => e.error_code(),
            SubmissionError::Decode(_) => "DECODE_ERROR",
            SubmissionError::Lookup(_) => "INDEX_OUT_OF_RANGE",
        }
    }
}

impl From<EncodeError> for SubmissionError {
    fn from(err: EncodeError) -> Self {
        SubmissionError::Encode(err)
    }
}

impl From<NetworkError> for SubmissionError {
    fn from(err: NetworkError) -> Self {
        SubmissionError::Network(err)
    }
}

impl From<DecodeError> for SubmissionError {
    fn from(err: DecodeError) -> Self {
        SubmissionError::Decode(err)
    }
}

impl From<LookupError> for SubmissionError {
    fn from(err: LookupError) -> Self {
        SubmissionError::Lookup(err)
    }
}
