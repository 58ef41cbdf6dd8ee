//! # Application Errors
//!
//! Error types for the application layer.
//!
//! These errors represent the caller-visible failure taxonomy of the
//! aggregation service:
//!
//! ```text
//! ApplicationError
//! ├── Validation(DomainError)      - malformed or missing fields, 400
//! ├── NotFound                     - referenced id does not exist, 404
//! ├── Repository(RepositoryError)  - authoritative store failure, 500
//! └── Internal(String)             - unexpected orchestration failure, 500
//! ```
//!
//! Enrichment failures are deliberately absent: they are swallowed into
//! sentinel/absent values inside the enrichment step and never become an
//! operation failure.
//!
//! # Examples
//!
//! ```
//! use vehicles::application::error::ApplicationError;
//!
//! let err = ApplicationError::not_found("Car", "17");
//! assert!(err.is_not_found());
//! ```

use crate::domain::errors::DomainError;
use crate::infrastructure::persistence::RepositoryError;
use thiserror::Error;

/// Application layer error.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Request validation failed.
    #[error("validation error: {0}")]
    Validation(#[from] DomainError),

    /// Resource not found.
    #[error("not found: {resource_type} with id {id}")]
    NotFound {
        /// Type of resource.
        resource_type: &'static str,
        /// Resource identifier.
        id: String,
    },

    /// Authoritative store failure; fatal to the current operation.
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),

    /// Internal error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Creates a not found error.
    #[must_use]
    pub fn not_found(resource_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource_type,
            id: id.into(),
        }
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Returns true if this is a not found error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns true if this is a validation error.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Result type for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found() {
        let err = ApplicationError::not_found("Car", "17");
        assert!(err.is_not_found());
        assert!(!err.is_validation());
        assert!(err.to_string().contains("Car"));
        assert!(err.to_string().contains("17"));
    }

    #[test]
    fn validation_from_domain_error() {
        let err: ApplicationError = DomainError::empty_field("details.model").into();
        assert!(err.is_validation());
        assert!(err.to_string().contains("details.model"));
    }

    #[test]
    fn repository_from_repository_error() {
        let err: ApplicationError = RepositoryError::connection("refused").into();
        assert!(!err.is_not_found());
        assert!(err.to_string().contains("repository"));
    }

    #[test]
    fn internal_display() {
        let err = ApplicationError::internal("task join failed");
        assert!(err.to_string().contains("task join failed"));
    }
}
