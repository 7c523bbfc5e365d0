use thiserror::Error;

/// Errors that can occur during document construction or calculation.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BijakError {
    /// One or more validation rules failed.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Builder encountered invalid or missing configuration.
    #[error("builder error: {0}")]
    Builder(String),

    /// A monetary calculation left the representable `Decimal` range.
    #[error("arithmetic error: {0}")]
    Arithmetic(String),
}

/// A single validation error with field path and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dot-separated path to the invalid field (e.g. "items[2].quantity").
    pub field: String,
    /// Human-readable error description.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl ValidationError {
    /// Create a validation error for the given field.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}
