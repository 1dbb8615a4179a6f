//! Validation error types

use std::fmt;

/// Validation error for request payloads
#[derive(Debug, Clone)]
pub enum ValidationError {
    /// Required field is absent
    Missing { field: &'static str },

    /// Field is empty when it shouldn't be
    Empty { field: &'static str },

    /// Numeric field is zero when it must not be
    Zero { field: &'static str },

    /// Request body could not be read as the expected shape
    InvalidBody { reason: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { field } => write!(f, "missing required field '{}'", field),
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::Zero { field } => write!(f, "{} must be non-zero", field),
            Self::InvalidBody { reason } => write!(f, "{}", reason),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::Missing { field: "titre" };
        assert_eq!(err.to_string(), "missing required field 'titre'");

        let err = ValidationError::Zero {
            field: "temps_de_preparation",
        };
        assert_eq!(err.to_string(), "temps_de_preparation must be non-zero");
    }
}
