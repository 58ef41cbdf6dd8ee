//! # Lookup Client Errors
//!
//! Error types for the enrichment lookup collaborators.
//!
//! These errors are internal to the enrichment step: the aggregation
//! service converts every one of them into a sentinel or absent value, so
//! they never surface as an operation failure.
//!
//! # Examples
//!
//! ```
//! use vehicles::infrastructure::clients::error::LookupError;
//!
//! let error = LookupError::timeout("request timed out after 2000ms");
//! assert!(error.is_retryable());
//!
//! let error = LookupError::not_found("no price for vehicle 2");
//! assert!(error.is_not_found());
//! ```

use thiserror::Error;

/// Error type for lookup client operations.
///
/// Represents transport-level failures when calling the pricing or maps
/// service. Legitimate absence (a car with no listed price) is NOT an
/// error; the ports express it as `Ok(None)`.
#[derive(Debug, Clone, Error)]
pub enum LookupError {
    /// Request timed out.
    #[error("lookup timeout: {message}")]
    Timeout {
        /// Error message.
        message: String,
    },

    /// Network or connection error.
    #[error("lookup connection error: {message}")]
    Connection {
        /// Error message.
        message: String,
    },

    /// The requested resource does not exist.
    ///
    /// Adapters translate this into `Ok(None)` at the port boundary.
    #[error("lookup resource not found: {message}")]
    NotFound {
        /// Error message.
        message: String,
    },

    /// The request was rejected as malformed.
    #[error("lookup invalid request: {message}")]
    InvalidRequest {
        /// Error message.
        message: String,
    },

    /// The collaborator is unavailable or overloaded.
    #[error("lookup service unavailable: {message}")]
    ServiceUnavailable {
        /// Error message.
        message: String,
    },

    /// Response could not be parsed.
    #[error("lookup protocol error: {message}")]
    Protocol {
        /// Error message.
        message: String,
    },

    /// Internal client error.
    #[error("lookup internal error: {message}")]
    Internal {
        /// Error message.
        message: String,
    },
}

impl LookupError {
    /// Creates a timeout error.
    #[must_use]
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout {
            message: message.into(),
        }
    }

    /// Creates a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Creates a not found error.
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Creates an invalid request error.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }

    /// Creates a service unavailable error.
    #[must_use]
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable {
            message: message.into(),
        }
    }

    /// Creates a protocol error.
    #[must_use]
    pub fn protocol(message: impl Into<String>) -> Self {
        Self::Protocol {
            message: message.into(),
        }
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Returns true if this error is transient and may succeed on retry.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Timeout { .. } | Self::Connection { .. } | Self::ServiceUnavailable { .. }
        )
    }

    /// Returns true if this error represents a missing resource.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Result type for lookup operations.
pub type LookupResult<T> = Result<T, LookupError>;
