//! Validation error types

use std::fmt;

/// Validation error for submitted recipe data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is empty when it shouldn't be
    Empty { field: &'static str },

    /// Field exceeds maximum length
    TooLong { field: &'static str, max: usize },

    /// String doesn't match required format
    InvalidFormat { field: &'static str, reason: &'static str },

    /// Invalid enum variant
    InvalidVariant { field: &'static str, value: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::TooLong { field, max } => {
                write!(f, "{} exceeds maximum length of {} characters", field, max)
            }
            Self::InvalidFormat { field, reason } => {
                write!(f, "{}: {}", field, reason)
            }
            Self::InvalidVariant { field, value } => {
                write!(f, "invalid {} value: '{}'", field, value)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Trim `s` and enforce the non-empty and length rules shared by required fields.
pub(crate) fn required(
    s: &str,
    field: &'static str,
    max: usize,
) -> Result<String, ValidationError> {
    let trimmed = s.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }

    if trimmed.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }

    Ok(trimmed.to_owned())
}

/// Trim an optional field; blank input becomes `None`.
pub(crate) fn optional(
    s: Option<&str>,
    field: &'static str,
    max: usize,
) -> Result<Option<String>, ValidationError> {
    match s.map(str::trim).filter(|t| !t.is_empty()) {
        None => Ok(None),
        Some(t) if t.chars().count() > max => Err(ValidationError::TooLong { field, max }),
        Some(t) => Ok(Some(t.to_owned())),
    }
}
