//! # Domain Errors
//!
//! Validation error types for the vehicle domain.
//!
//! These errors represent violations of the invariants in the data model:
//! required fields that are blank, negative numeric fields, implausible
//! calendar years, and out-of-range coordinates. They are deterministic,
//! computed before any collaborator is called, and reported to the caller
//! unchanged.
//!
//! # Examples
//!
//! ```
//! use vehicles::domain::errors::DomainError;
//!
//! let err = DomainError::empty_field("details.model");
//! assert!(err.to_string().contains("details.model"));
//! ```

use thiserror::Error;

/// Error type for domain validation failures.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// A required text field is empty or blank.
    #[error("field {field} must not be blank")]
    EmptyField {
        /// Field path, e.g. `details.model`.
        field: &'static str,
    },

    /// A numeric field is negative.
    #[error("field {field} must not be negative, got {value}")]
    NegativeValue {
        /// Field path.
        field: &'static str,
        /// The offending value.
        value: i64,
    },

    /// A numeric field is below its minimum.
    #[error("field {field} must be at least {min}, got {value}")]
    BelowMinimum {
        /// Field path.
        field: &'static str,
        /// Minimum allowed value.
        min: i64,
        /// The offending value.
        value: i64,
    },

    /// A year field is outside the plausible calendar range.
    #[error("field {field} must be a plausible calendar year, got {value}")]
    ImplausibleYear {
        /// Field path.
        field: &'static str,
        /// The offending year.
        value: i32,
    },

    /// Latitude outside [-90, 90].
    #[error("latitude out of range: {0}")]
    LatitudeOutOfRange(f64),

    /// Longitude outside [-180, 180].
    #[error("longitude out of range: {0}")]
    LongitudeOutOfRange(f64),
}

impl DomainError {
    /// Creates an empty field error.
    #[must_use]
    pub fn empty_field(field: &'static str) -> Self {
        Self::EmptyField { field }
    }

    /// Creates a negative value error.
    #[must_use]
    pub fn negative_value(field: &'static str, value: i64) -> Self {
        Self::NegativeValue { field, value }
    }

    /// Creates a below-minimum error.
    #[must_use]
    pub fn below_minimum(field: &'static str, min: i64, value: i64) -> Self {
        Self::BelowMinimum { field, min, value }
    }

    /// Creates an implausible year error.
    #[must_use]
    pub fn implausible_year(field: &'static str, value: i32) -> Self {
        Self::ImplausibleYear { field, value }
    }
}

/// Result type for domain validation.
pub type DomainResult<T> = Result<T, DomainError>;
