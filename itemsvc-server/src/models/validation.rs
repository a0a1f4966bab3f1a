//! Validation error types

use std::fmt;

/// Request body rejected before any database work
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Request did not declare `Content-Type: application/json`
    ContentType,

    /// Body is not well-formed JSON
    Syntax { reason: String },

    /// JSON is well-formed but a field is missing or has the wrong type
    Schema { reason: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ContentType => write!(f, "expected request with `Content-Type: application/json`"),
            Self::Syntax { reason } => write!(f, "malformed JSON body: {}", reason),
            Self::Schema { reason } => write!(f, "invalid item: {}", reason),
        }
    }
}

impl std::error::Error for ValidationError {}
