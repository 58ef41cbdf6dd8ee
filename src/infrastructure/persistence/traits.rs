//! # Repository Traits
//!
//! Port definition for car persistence.
//!
//! This module defines the [`CarRepository`] trait (port) that abstracts
//! persistence of the authoritative car fields. Implementations can use
//! different backends like PostgreSQL or in-memory storage.
//!
//! The repository stores only authoritative fields (`condition`, `details`,
//! `location` coordinates, the assigned `id`, and timestamps). Derived
//! enrichment (`price`, address) is stripped before a record reaches the
//! repository and is never returned by it.
//!
//! # Examples
//!
//! ```ignore
//! use vehicles::infrastructure::persistence::traits::CarRepository;
//!
//! async fn count_listings(repo: &impl CarRepository) {
//!     let total = repo.count().await.unwrap();
//!     println!("{total} cars listed");
//! }
//! ```

use crate::domain::entities::Car;
use crate::domain::value_objects::CarId;
use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

/// Error type for repository operations.
///
/// Repository failures are fatal to the current operation and surface to
/// the caller as server-side failures; they are never degraded into
/// sentinel values.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Connection error.
    #[error("connection error: {0}")]
    Connection(String),

    /// Query error.
    #[error("query error: {0}")]
    Query(String),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Internal error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl RepositoryError {
    /// Creates a connection error.
    #[must_use]
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::Connection(msg.into())
    }

    /// Creates a query error.
    #[must_use]
    pub fn query(msg: impl Into<String>) -> Self {
        Self::Query(msg.into())
    }

    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Repository for [`Car`] entities.
///
/// The single source of truth for authoritative car fields. Implementations
/// must serialize concurrent writes to the same id (last writer wins at the
/// granularity of a full replace) and must never reuse an id after deletion
/// within the lifetime of the store.
#[async_trait]
pub trait CarRepository: Send + Sync + fmt::Debug {
    /// Persists a new car, assigning its id and creation timestamp.
    ///
    /// The input's `id` is ignored; the returned record carries the
    /// assigned id.
    ///
    /// # Errors
    ///
    /// Returns a [`RepositoryError`] if the store is unreachable or the
    /// write fails.
    async fn create(&self, car: Car) -> RepositoryResult<Car>;

    /// Gets a car by id.
    ///
    /// Returns `None` if the car does not exist.
    ///
    /// # Errors
    ///
    /// Returns a [`RepositoryError`] if the store is unreachable.
    async fn get(&self, id: CarId) -> RepositoryResult<Option<Car>>;

    /// Replaces the mutable fields of an existing car.
    ///
    /// Full replace semantics: `condition`, `details`, and the `location`
    /// coordinates are overwritten; `id` and `created_at` are preserved and
    /// `modified_at` is refreshed. Returns `None` if the id does not exist.
    ///
    /// # Errors
    ///
    /// Returns a [`RepositoryError`] if the store is unreachable or the
    /// write fails.
    async fn update(&self, id: CarId, car: Car) -> RepositoryResult<Option<Car>>;

    /// Lists every stored car in stored (id) order.
    ///
    /// # Errors
    ///
    /// Returns a [`RepositoryError`] if the store is unreachable.
    async fn list(&self) -> RepositoryResult<Vec<Car>>;

    /// Deletes a car by id.
    ///
    /// Returns `Ok(true)` if the car was deleted, `Ok(false)` if it didn't
    /// exist.
    ///
    /// # Errors
    ///
    /// Returns a [`RepositoryError`] if the store is unreachable or the
    /// write fails.
    async fn delete(&self, id: CarId) -> RepositoryResult<bool>;

    /// Counts all stored cars.
    ///
    /// # Errors
    ///
    /// Returns a [`RepositoryError`] if the store is unreachable.
    async fn count(&self) -> RepositoryResult<u64>;
}
