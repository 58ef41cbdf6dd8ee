//! # Identity Types
//!
//! Typed identifiers for domain entities.
//!
//! Identifiers are repository-assigned: a car has no id before creation and
//! the assigned id is immutable afterwards. Ids are never reused after
//! deletion within the lifetime of a store.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier for a [`Car`](crate::domain::entities::Car).
///
/// Wraps the `i64` primary key assigned by the repository on creation.
///
/// # Examples
///
/// ```
/// use vehicles::domain::value_objects::CarId;
///
/// let id = CarId::new(1);
/// assert_eq!(id.get(), 1);
/// assert_eq!(id.to_string(), "1");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct CarId(i64);

impl CarId {
    /// Creates a car id from its raw value.
    #[inline]
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw id value.
    #[inline]
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for CarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for CarId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}
