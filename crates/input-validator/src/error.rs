//! Validation Error Types

use thiserror::Error;

/// Errors during input validation
#[derive(Debug, Clone, Error)]
pub enum ValidationError {
    /// Value out of allowed range
    #[error("{field} value {value} is out of range [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Text that does not parse as a finite number
    #[error("{field} value {text:?} is not a valid number")]
    InvalidNumber { field: &'static str, text: String },

    /// Missing required field
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

impl ValidationError {
    /// Name of the field the error refers to
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::OutOfRange { field, .. } => field,
            ValidationError::InvalidNumber { field, .. } => field,
            ValidationError::MissingField(field) => field,
        }
    }
}
