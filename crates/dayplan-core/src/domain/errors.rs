//! Domain error types

use thiserror::Error;

/// Errors that can occur in domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A date string does not match the fixed `"yyyy-MM-dd HH:mm"` format
    #[error("Invalid date `{0}`, expected format yyyy-MM-dd HH:mm")]
    InvalidDate(String),

    /// Generic validation failure
    #[error("Validation failed: {0}")]
    ValidationFailed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DomainError::InvalidDate("tomorrow".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid date `tomorrow`, expected format yyyy-MM-dd HH:mm"
        );

        let err = DomainError::ValidationFailed("empty title".to_string());
        assert_eq!(err.to_string(), "Validation failed: empty title");
    }
}
