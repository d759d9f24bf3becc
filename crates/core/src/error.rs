//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is a recoverable result: callers branch on it, nothing in the
/// domain layer panics on bad input. Storage failures belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The referenced product id is not present in the store.
    #[error("product with id={0} not found")]
    NotFound(String),

    /// A required field was missing or empty.
    #[error("validation failed: {0}")]
    Validation(String),

    /// A rating outside the accepted `1..=5` range.
    #[error("rating {0} is out of range (expected 1..=5)")]
    RatingOutOfRange(i64),
}

impl DomainError {
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound(id.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn rating_out_of_range(rating: i64) -> Self {
        Self::RatingOutOfRange(rating)
    }

    /// Convenience for the common "field must not be empty" validation failure.
    pub fn empty_field(field: &str) -> Self {
        Self::Validation(format!("{field} must not be empty"))
    }
}
