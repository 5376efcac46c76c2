/// Structured error types for the data store gateway.
///
/// Every gateway implementation reports failures through `StoreError` so the
/// HTTP layer can map them without knowing which backend produced them.
use thiserror::Error;

use crate::model::{CategoryId, QuestionId, ValidationError};

/// Boxed backend failure (driver, connection, SQL)
pub type BackendError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Error, Debug)]
pub enum StoreError {
    /// No question with this id exists
    #[error("question {id} not found")]
    NotFound { id: QuestionId },

    /// Insert referenced a category that does not exist
    #[error("category {id} does not exist")]
    UnknownCategory { id: CategoryId },

    /// Question fields failed validation
    #[error("invalid question: {0}")]
    Invalid(#[from] ValidationError),

    /// The underlying store failed
    #[error("store backend error: {0}")]
    Backend(#[source] BackendError),
}

/// Result type alias for gateway operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;

impl StoreError {
    /// Wrap any backend error
    pub fn backend(err: impl Into<BackendError>) -> Self {
        Self::Backend(err.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert_eq!(StoreError::NotFound { id: 1000 }.to_string(), "question 1000 not found");
        assert_eq!(
            StoreError::UnknownCategory { id: 9 }.to_string(),
            "category 9 does not exist"
        );
    }

    #[test]
    fn backend_wraps_strings() {
        let err = StoreError::backend("connection reset");
        assert!(!err.is_not_found());
        assert_eq!(err.to_string(), "store backend error: connection reset");
    }
}
