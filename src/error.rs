//! Error types for PhoneDB.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors returned by PhoneDB engine operations.
#[derive(Error, Debug)]
pub enum PhoneDbError {
    /// A phone number failed validation on a strict path (`register`).
    #[error("Invalid phone number: {0}")]
    InvalidNumber(String),

    /// A required user identifier is empty or absent.
    #[error("A userId is required")]
    MissingUserId,

    /// The underlying set store failed. Propagated unchanged, never retried.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl From<ValidationError> for PhoneDbError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::MissingUserId => Self::MissingUserId,
            ValidationError::InvalidPhone(phone) => Self::InvalidNumber(phone),
        }
    }
}

/// Errors surfaced by a set store backend.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Could not reach the store or the connection dropped
    #[error("Connection error: {0}")]
    Connection(String),

    /// The store did not answer within the configured timeout
    #[error("Request timeout")]
    Timeout,

    /// The store answered with something unexpected
    #[error("Protocol error: {0}")]
    Protocol(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Generic configuration error
    #[error("Configuration error: {0}")]
    Other(String),
}

/// Convenience type alias for Results with PhoneDbError
pub type PhoneDbResult<T> = Result<T, PhoneDbError>;

/// Convenience type alias for Results with StoreError
pub type StoreResult<T> = Result<T, StoreError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PhoneDbError::InvalidNumber("+1847555777".to_string());
        assert_eq!(err.to_string(), "Invalid phone number: +1847555777");

        let err = PhoneDbError::MissingUserId;
        assert_eq!(err.to_string(), "A userId is required");

        let err = StoreError::Timeout;
        assert_eq!(err.to_string(), "Request timeout");

        let err = ConfigError::InvalidValue {
            var: "REDIS_URL".to_string(),
            reason: "Must start with redis://".to_string(),
        };
        assert!(err.to_string().contains("REDIS_URL"));
    }

    #[test]
    fn test_validation_error_conversion() {
        let err: PhoneDbError = ValidationError::MissingUserId.into();
        assert!(matches!(err, PhoneDbError::MissingUserId));

        let err: PhoneDbError = ValidationError::InvalidPhone("FAKE".to_string()).into();
        match err {
            PhoneDbError::InvalidNumber(phone) => assert_eq!(phone, "FAKE"),
            other => panic!("Expected InvalidNumber, got: {:?}", other),
        }
    }

    #[test]
    fn test_store_error_conversion() {
        let err: PhoneDbError = StoreError::Connection("refused".to_string()).into();
        assert!(matches!(err, PhoneDbError::Store(StoreError::Connection(_))));
    }
}
