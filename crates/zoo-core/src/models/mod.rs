//! Domain models for the zoo.

mod animal;
mod health;

pub use animal::*;
pub use health::*;

use thiserror::Error;

/// Validation errors raised by constructors and actions.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{field} cannot be empty")]
    EmptyField { field: &'static str },

    #[error("severity must be between {min} and {max}, got {value}")]
    SeverityOutOfRange { value: u8, min: u8, max: u8 },

    #[error("size_sqm must be a positive number, got {0}")]
    InvalidSize(f64),

    #[error("capacity must be a positive integer")]
    ZeroCapacity,

    #[error("hours of sleep must be positive")]
    NonPositiveHours,

    #[error("unknown {kind}: '{value}'")]
    UnknownVariant { kind: &'static str, value: String },
}

pub type ValidationResult<T> = Result<T, ValidationError>;

/// Reject blank strings, returning the trimmed value.
pub(crate) fn require_text(value: String, field: &'static str) -> ValidationResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyField { field });
    }
    if trimmed.len() == value.len() {
        Ok(value)
    } else {
        Ok(trimmed.to_string())
    }
}
