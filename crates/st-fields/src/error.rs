//! Error types for security.txt field validation.

use thiserror::Error;

use crate::field::FieldName;

/// Result type for field mutations.
pub type Result<T> = std::result::Result<T, FieldError>;

/// Errors returned when a field value fails validation.
///
/// A failed set leaves the previous value of the field in place; the
/// error surfaces synchronously to the caller of the mutating method.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// A value is missing a required URI scheme prefix, or carries a
    /// forbidden one.
    #[error("invalid scheme for {field}: {uri:?} (expected {expected})")]
    InvalidScheme {
        field: FieldName,
        uri: String,
        expected: &'static str,
    },

    /// The Expires value could not be parsed as an RFC 3339 timestamp.
    #[error("invalid timestamp for Expires: {0:?}")]
    InvalidTimestamp(String),
}

impl FieldError {
    /// Stable error code for structured error reporting.
    pub fn code(&self) -> u32 {
        match self {
            FieldError::InvalidScheme { .. } => 10,
            FieldError::InvalidTimestamp(_) => 11,
        }
    }

    /// The field the rejected value was destined for.
    pub fn field(&self) -> FieldName {
        match self {
            FieldError::InvalidScheme { field, .. } => *field,
            FieldError::InvalidTimestamp(_) => FieldName::Expires,
        }
    }
}
