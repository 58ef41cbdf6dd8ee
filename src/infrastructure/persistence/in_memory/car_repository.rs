//! # In-Memory Car Repository
//!
//! In-memory implementation of [`CarRepository`].
//!
//! Uses a thread-safe `BTreeMap` keyed by id, so `list()` returns records
//! in id order, which is the stored (insertion) order because ids are
//! assigned monotonically. Ids are never reused after deletion.

use crate::domain::entities::Car;
use crate::domain::value_objects::CarId;
use crate::infrastructure::persistence::traits::{CarRepository, RepositoryResult};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory implementation of [`CarRepository`].
///
/// Suitable for unit tests and for running the platform without a database.
#[derive(Debug, Clone)]
pub struct InMemoryCarRepository {
    storage: Arc<RwLock<BTreeMap<CarId, Car>>>,
    next_id: Arc<AtomicI64>,
}

impl InMemoryCarRepository {
    /// Creates a new empty in-memory car repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            storage: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }

    /// Returns the number of cars in the repository.
    #[must_use]
    pub fn len(&self) -> usize {
        self.storage
            .try_read()
            .map(|guard| guard.len())
            .unwrap_or(0)
    }

    /// Returns true if the repository is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears all cars from the repository.
    ///
    /// The id sequence is not reset, so ids are not reused.
    pub async fn clear(&self) {
        let mut storage = self.storage.write().await;
        storage.clear();
    }
}

impl Default for InMemoryCarRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CarRepository for InMemoryCarRepository {
    async fn create(&self, mut car: Car) -> RepositoryResult<Car> {
        let id = CarId::new(self.next_id.fetch_add(1, Ordering::SeqCst));
        let now = Utc::now();
        car.id = Some(id);
        car.created_at = Some(now);
        car.modified_at = Some(now);

        let mut storage = self.storage.write().await;
        storage.insert(id, car.clone());
        Ok(car)
    }

    async fn get(&self, id: CarId) -> RepositoryResult<Option<Car>> {
        let storage = self.storage.read().await;
        Ok(storage.get(&id).cloned())
    }

    async fn update(&self, id: CarId, mut car: Car) -> RepositoryResult<Option<Car>> {
        let mut storage = self.storage.write().await;
        let created_at = match storage.get(&id) {
            Some(existing) => existing.created_at,
            None => return Ok(None),
        };
        car.id = Some(id);
        car.created_at = created_at;
        car.modified_at = Some(Utc::now());
        storage.insert(id, car.clone());
        Ok(Some(car))
    }

    async fn list(&self) -> RepositoryResult<Vec<Car>> {
        let storage = self.storage.read().await;
        Ok(storage.values().cloned().collect())
    }

    async fn delete(&self, id: CarId) -> RepositoryResult<bool> {
        let mut storage = self.storage.write().await;
        Ok(storage.remove(&id).is_some())
    }

    async fn count(&self) -> RepositoryResult<u64> {
        let storage = self.storage.read().await;
        Ok(storage.len() as u64)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{Condition, Details, Location, Manufacturer};

    fn test_car(model: &str) -> Car {
        let details = Details {
            manufacturer: Manufacturer::new(101, "Chevrolet"),
            model: model.to_string(),
            body: "sedan".to_string(),
            mileage: 32280,
            external_color: "white".to_string(),
            engine: "3.6L V6".to_string(),
            fuel_type: "Gasoline".to_string(),
            model_year: 2018,
            production_year: 2018,
            number_of_doors: 4,
        };
        Car::new(
            Condition::Used,
            details,
            Location::new(40.730610, -73.935242).unwrap(),
        )
    }

    #[tokio::test]
    async fn new_repository_is_empty() {
        let repo = InMemoryCarRepository::new();
        assert!(repo.is_empty());
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn create_assigns_id_and_timestamps() {
        let repo = InMemoryCarRepository::new();
        let created = repo.create(test_car("Impala")).await.unwrap();

        assert_eq!(created.id, Some(CarId::new(1)));
        assert!(created.created_at.is_some());
        assert_eq!(created.created_at, created.modified_at);
    }

    #[tokio::test]
    async fn create_assigns_distinct_ids() {
        let repo = InMemoryCarRepository::new();
        let first = repo.create(test_car("Impala")).await.unwrap();
        let second = repo.create(test_car("Malibu")).await.unwrap();
        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn get_returns_stored_record() {
        let repo = InMemoryCarRepository::new();
        let created = repo.create(test_car("Impala")).await.unwrap();
        let id = created.id.unwrap();

        let fetched = repo.get(id).await.unwrap().unwrap();
        assert_eq!(fetched.details.model, "Impala");
        assert_eq!(fetched.id, Some(id));
    }

    #[tokio::test]
    async fn get_nonexistent_returns_none() {
        let repo = InMemoryCarRepository::new();
        assert!(repo.get(CarId::new(99)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_replaces_fields_and_preserves_identity() {
        let repo = InMemoryCarRepository::new();
        let created = repo.create(test_car("Impala")).await.unwrap();
        let id = created.id.unwrap();

        let mut replacement = test_car("Malibu");
        replacement.condition = Condition::New;
        let updated = repo.update(id, replacement).await.unwrap().unwrap();

        assert_eq!(updated.id, Some(id));
        assert_eq!(updated.details.model, "Malibu");
        assert_eq!(updated.condition, Condition::New);
        assert_eq!(updated.created_at, created.created_at);
    }

    #[tokio::test]
    async fn update_nonexistent_returns_none() {
        let repo = InMemoryCarRepository::new();
        let result = repo.update(CarId::new(5), test_car("Impala")).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn list_preserves_stored_order() {
        let repo = InMemoryCarRepository::new();
        repo.create(test_car("Impala")).await.unwrap();
        repo.create(test_car("Malibu")).await.unwrap();
        repo.create(test_car("Camaro")).await.unwrap();

        let all = repo.list().await.unwrap();
        let models: Vec<&str> = all.iter().map(|c| c.details.model.as_str()).collect();
        assert_eq!(models, vec!["Impala", "Malibu", "Camaro"]);
    }

    #[tokio::test]
    async fn delete_removes_record() {
        let repo = InMemoryCarRepository::new();
        let created = repo.create(test_car("Impala")).await.unwrap();
        let id = created.id.unwrap();

        assert!(repo.delete(id).await.unwrap());
        assert!(repo.get(id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn second_delete_reports_missing() {
        let repo = InMemoryCarRepository::new();
        let created = repo.create(test_car("Impala")).await.unwrap();
        let id = created.id.unwrap();

        assert!(repo.delete(id).await.unwrap());
        assert!(!repo.delete(id).await.unwrap());
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_deletion() {
        let repo = InMemoryCarRepository::new();
        let first = repo.create(test_car("Impala")).await.unwrap();
        let first_id = first.id.unwrap();
        repo.delete(first_id).await.unwrap();

        let second = repo.create(test_car("Malibu")).await.unwrap();
        assert_ne!(second.id, Some(first_id));
    }
}
