//! # Error Types
//!
//! Defines the error type for model construction and decoding. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Construction failures carry a message naming exactly the field (or list
//!   element) that violated its invariant.
//! - Decode failures wrap the underlying serde message so callers can surface
//!   a malformed server response verbatim.

use thiserror::Error;

/// Error type for the Vitals model crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// A validating constructor rejected its input. The message identifies
    /// the offending field, e.g. `id cannot be blank` or
    /// `messageList[2] is blank`.
    #[error("invalid entity: {0}")]
    InvalidEntity(String),

    /// A JSON response body could not be decoded into a model type.
    #[error("deserialization error: {0}")]
    Deserialization(String),
}

impl ModelError {
    /// The human-readable detail message, without the error-kind prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidEntity(msg) | Self::Deserialization(msg) => msg,
        }
    }
}
