//! # Car Aggregation Service
//!
//! Orchestrates car persistence and enrichment.
//!
//! This module provides the [`CarAggregationService`], the sole
//! reader/writer boundary between the [`CarRepository`] and the two lookup
//! collaborators. Every car returned to a caller carries best-effort
//! enrichment: a formatted price (or the [`PRICE_UNAVAILABLE`] sentinel)
//! and, when resolvable, a descriptive address.
//!
//! Enrichment never fails the parent operation. Validation and missing-id
//! conditions are deterministic rejections computed before any lookup is
//! attempted; repository failures abort the operation.

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::entities::Car;
use crate::domain::value_objects::CarId;
use crate::infrastructure::clients::traits::{LocationLookup, PriceLookup};
use crate::infrastructure::persistence::traits::CarRepository;
use futures::stream::{self, StreamExt};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;

/// Sentinel substituted for the price when enrichment cannot complete, so
/// the response shape never depends on backend health.
pub const PRICE_UNAVAILABLE: &str = "Price unavailable";

/// Configuration for car enrichment.
#[derive(Debug, Clone)]
pub struct EnrichmentConfig {
    /// Per-lookup timeout in milliseconds.
    pub lookup_timeout_ms: u64,
    /// Maximum number of cars enriched concurrently by `list()`.
    pub list_concurrency: usize,
}

impl Default for EnrichmentConfig {
    fn default() -> Self {
        Self {
            lookup_timeout_ms: 2000,
            list_concurrency: 8,
        }
    }
}

impl EnrichmentConfig {
    /// Creates a configuration with the specified per-lookup timeout.
    #[must_use]
    pub fn with_timeout(lookup_timeout_ms: u64) -> Self {
        Self {
            lookup_timeout_ms,
            ..Default::default()
        }
    }

    /// Sets the list enrichment concurrency limit.
    #[must_use]
    pub fn with_list_concurrency(mut self, concurrency: usize) -> Self {
        self.list_concurrency = concurrency;
        self
    }
}

/// Service orchestrating car CRUD and enrichment.
///
/// Holds its three collaborators behind ports, taken at construction; it is
/// stateless between calls. Any transport satisfying the port contracts is
/// substitutable, so tests inject in-process fakes.
#[derive(Debug, Clone)]
pub struct CarAggregationService {
    repository: Arc<dyn CarRepository>,
    prices: Arc<dyn PriceLookup>,
    maps: Arc<dyn LocationLookup>,
    config: EnrichmentConfig,
}

impl CarAggregationService {
    /// Creates a new aggregation service.
    #[must_use]
    pub fn new(
        repository: Arc<dyn CarRepository>,
        prices: Arc<dyn PriceLookup>,
        maps: Arc<dyn LocationLookup>,
        config: EnrichmentConfig,
    ) -> Self {
        Self {
            repository,
            prices,
            maps,
            config,
        }
    }

    /// Creates a new service with default configuration.
    #[must_use]
    pub fn with_defaults(
        repository: Arc<dyn CarRepository>,
        prices: Arc<dyn PriceLookup>,
        maps: Arc<dyn LocationLookup>,
    ) -> Self {
        Self::new(repository, prices, maps, EnrichmentConfig::default())
    }

    /// Returns the current configuration.
    #[must_use]
    pub fn config(&self) -> &EnrichmentConfig {
        &self.config
    }

    /// Validates and persists a new car, returning the enriched view.
    ///
    /// The repository assigns the id; any id or derived fields on the input
    /// are discarded.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::Validation`] for malformed input and
    /// [`ApplicationError::Repository`] if the store fails.
    pub async fn create(&self, mut car: Car) -> ApplicationResult<Car> {
        car.validate()?;
        car.strip_derived();
        car.id = None;

        let repository = Arc::clone(&self.repository);
        let stored = Self::run_write(async move { repository.create(car).await }).await?;
        Ok(self.enrich(stored).await)
    }

    /// Replaces the mutable fields of an existing car, returning the
    /// enriched view.
    ///
    /// Full replace semantics: the supplied `details`, `condition`, and
    /// `location` coordinates overwrite the stored record; nothing is
    /// carried over.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::Validation`] for malformed input,
    /// [`ApplicationError::NotFound`] if the id does not exist, and
    /// [`ApplicationError::Repository`] if the store fails.
    pub async fn update(&self, id: CarId, mut car: Car) -> ApplicationResult<Car> {
        car.validate()?;
        car.strip_derived();

        let repository = Arc::clone(&self.repository);
        let stored = Self::run_write(async move { repository.update(id, car).await })
            .await?
            .ok_or_else(|| ApplicationError::not_found("Car", id.to_string()))?;
        Ok(self.enrich(stored).await)
    }

    /// Loads a car by id and attaches enrichment.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::NotFound`] if the id does not exist and
    /// [`ApplicationError::Repository`] if the store fails.
    pub async fn find_by_id(&self, id: CarId) -> ApplicationResult<Car> {
        let stored = self
            .repository
            .get(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Car", id.to_string()))?;
        Ok(self.enrich(stored).await)
    }

    /// Returns every stored car, each independently enriched.
    ///
    /// Enrichment fans out with bounded concurrency and the returned
    /// collection preserves the stored order. A failure enriching one car
    /// cannot block or corrupt another.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::Repository`] if the store fails.
    pub async fn list(&self) -> ApplicationResult<Vec<Car>> {
        let cars = self.repository.list().await?;
        let enriched = stream::iter(cars)
            .map(|car| self.enrich(car))
            .buffered(self.config.list_concurrency.max(1))
            .collect::<Vec<_>>()
            .await;
        Ok(enriched)
    }

    /// Deletes a car by id.
    ///
    /// Deleting an id that does not exist (including an id already
    /// deleted) fails with `NotFound`; the contract distinguishes "was
    /// removed" from "never existed".
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::NotFound`] if the id does not exist and
    /// [`ApplicationError::Repository`] if the store fails.
    pub async fn delete(&self, id: CarId) -> ApplicationResult<()> {
        let repository = Arc::clone(&self.repository);
        let deleted = Self::run_write(async move { repository.delete(id).await }).await?;
        if deleted {
            Ok(())
        } else {
            Err(ApplicationError::not_found("Car", id.to_string()))
        }
    }

    /// Runs a persistence write on its own task.
    ///
    /// A dropped request cancels in-flight enrichment futures, but an
    /// issued write must complete or fail atomically; spawning detaches it
    /// from the caller's lifetime.
    async fn run_write<T, F>(write: F) -> ApplicationResult<T>
    where
        T: Send + 'static,
        F: std::future::Future<Output = crate::infrastructure::persistence::RepositoryResult<T>>
            + Send
            + 'static,
    {
        match tokio::spawn(write).await {
            Ok(result) => Ok(result?),
            Err(e) => Err(ApplicationError::internal(format!(
                "persistence task failed: {}",
                e
            ))),
        }
    }

    /// Attaches price and address enrichment to an authoritative record.
    ///
    /// Both lookups run concurrently, each under the configured timeout,
    /// and both results are merged before the view is returned; callers
    /// never observe a partially-enriched car.
    async fn enrich(&self, mut car: Car) -> Car {
        let (price, address) = tokio::join!(
            self.fetch_price(car.id),
            self.fetch_address(car.location.lat, car.location.lon)
        );

        car.price = Some(price.unwrap_or_else(|| PRICE_UNAVAILABLE.to_string()));
        if let Some(resolved) = address {
            car.location.address = Some(resolved.address);
            car.location.city = Some(resolved.city);
            car.location.state = Some(resolved.state);
            car.location.zip = Some(resolved.zip);
        }
        car
    }

    /// Fetches and formats the price for a car, degrading every failure
    /// mode (absence, transport error, timeout) to `None`.
    async fn fetch_price(&self, id: Option<CarId>) -> Option<String> {
        let id = id?;
        let per_lookup = Duration::from_millis(self.config.lookup_timeout_ms);
        match timeout(per_lookup, self.prices.price_for(id)).await {
            Ok(Ok(Some(quote))) => Some(quote.display_string()),
            Ok(Ok(None)) => {
                tracing::debug!(car_id = %id, "no price listed");
                None
            }
            Ok(Err(e)) => {
                tracing::debug!(car_id = %id, error = %e, "price lookup failed");
                None
            }
            Err(_) => {
                tracing::debug!(car_id = %id, "price lookup timed out");
                None
            }
        }
    }

    /// Resolves the address for a coordinate pair, degrading every failure
    /// mode to `None`.
    async fn fetch_address(
        &self,
        lat: f64,
        lon: f64,
    ) -> Option<crate::infrastructure::clients::traits::ResolvedAddress> {
        let per_lookup = Duration::from_millis(self.config.lookup_timeout_ms);
        match timeout(per_lookup, self.maps.resolve(lat, lon)).await {
            Ok(Ok(resolved)) => resolved,
            Ok(Err(e)) => {
                tracing::debug!(lat, lon, error = %e, "location lookup failed");
                None
            }
            Err(_) => {
                tracing::debug!(lat, lon, "location lookup timed out");
                None
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{Condition, Details, Location, Manufacturer};
    use crate::infrastructure::clients::error::{LookupError, LookupResult};
    use crate::infrastructure::clients::traits::{PriceQuote, ResolvedAddress};
    use crate::infrastructure::persistence::in_memory::InMemoryCarRepository;
    use async_trait::async_trait;
    use rust_decimal::Decimal;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Price lookup fake with per-vehicle behavior.
    #[derive(Debug, Default)]
    struct MockPriceLookup {
        prices: HashMap<i64, PriceQuote>,
        fail: bool,
        delay_ms: u64,
        calls: AtomicUsize,
    }

    impl MockPriceLookup {
        fn with_price(id: i64, amount: i64) -> Self {
            let mut prices = HashMap::new();
            prices.insert(id, PriceQuote::new("USD", Decimal::from(amount), id));
            Self {
                prices,
                ..Default::default()
            }
        }

        fn failing() -> Self {
            Self {
                fail: true,
                ..Default::default()
            }
        }

        fn slow(delay_ms: u64) -> Self {
            Self {
                delay_ms,
                ..Default::default()
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl PriceLookup for MockPriceLookup {
        async fn price_for(&self, id: CarId) -> LookupResult<Option<PriceQuote>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.delay_ms > 0 {
                tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
            }
            if self.fail {
                return Err(LookupError::connection("pricing service down"));
            }
            Ok(self.prices.get(&id.get()).cloned())
        }
    }

    /// Location lookup fake.
    #[derive(Debug, Default)]
    struct MockLocationLookup {
        address: Option<ResolvedAddress>,
        fail: bool,
        delay_ms: u64,
    }

    impl MockLocationLookup {
        fn with_address() -> Self {
            Self {
                address: Some(ResolvedAddress::new(
                    "777 Brockton Avenue",
                    "Abington",
                    "MA",
                    "2351",
                )),
                ..Default::default()
            }
        }

        fn failing() -> Self {
            Self {
                fail: true,
                ..Default::default()
            }
        }

        fn slow(delay_ms: u64) -> Self {
            Self {
                delay_ms,
                ..Default::default()
            }
        }
    }

    #[async_trait]
    impl LocationLookup for MockLocationLookup {
        async fn resolve(&self, _lat: f64, _lon: f64) -> LookupResult<Option<ResolvedAddress>> {
            if self.delay_ms > 0 {
                tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
            }
            if self.fail {
                return Err(LookupError::connection("maps service down"));
            }
            Ok(self.address.clone())
        }
    }

    fn impala() -> Car {
        let details = Details {
            manufacturer: Manufacturer::new(101, "Chevrolet"),
            model: "Impala".to_string(),
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

    fn service(
        repo: Arc<InMemoryCarRepository>,
        prices: Arc<MockPriceLookup>,
        maps: Arc<MockLocationLookup>,
    ) -> CarAggregationService {
        CarAggregationService::with_defaults(repo, prices, maps)
    }

    #[tokio::test]
    async fn create_returns_enriched_car_with_assigned_id() {
        let repo = Arc::new(InMemoryCarRepository::new());
        let prices = Arc::new(MockPriceLookup::with_price(1, 12_000));
        let maps = Arc::new(MockLocationLookup::with_address());
        let svc = service(repo, prices, maps);

        let created = svc.create(impala()).await.unwrap();

        assert!(created.id.is_some());
        assert_eq!(created.price.as_deref(), Some("USD 12000.00"));
        assert_eq!(created.location.address.as_deref(), Some("777 Brockton Avenue"));
        assert_eq!(created.location.city.as_deref(), Some("Abington"));
    }

    #[tokio::test]
    async fn create_assigns_distinct_ids() {
        let repo = Arc::new(InMemoryCarRepository::new());
        let svc = service(
            Arc::clone(&repo),
            Arc::new(MockPriceLookup::default()),
            Arc::new(MockLocationLookup::default()),
        );

        let first = svc.create(impala()).await.unwrap();
        let second = svc.create(impala()).await.unwrap();

        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn create_rejects_invalid_car_before_any_lookup() {
        let repo = Arc::new(InMemoryCarRepository::new());
        let prices = Arc::new(MockPriceLookup::with_price(1, 12_000));
        let svc = service(
            Arc::clone(&repo),
            Arc::clone(&prices),
            Arc::new(MockLocationLookup::with_address()),
        );

        let mut invalid = impala();
        invalid.details.mileage = -1;
        let err = svc.create(invalid).await.unwrap_err();

        assert!(err.is_validation());
        assert_eq!(repo.count().await.unwrap(), 0);
        assert_eq!(prices.calls(), 0);
    }

    #[tokio::test]
    async fn create_strips_client_supplied_derived_fields() {
        let repo = Arc::new(InMemoryCarRepository::new());
        let svc = service(
            Arc::clone(&repo),
            Arc::new(MockPriceLookup::default()),
            Arc::new(MockLocationLookup::default()),
        );

        let mut car = impala();
        car.price = Some("USD 1.00".to_string());
        car.location.address = Some("forged".to_string());
        let created = svc.create(car).await.unwrap();

        // The stored record never saw the forged values.
        let stored = repo.get(created.id.unwrap()).await.unwrap().unwrap();
        assert!(stored.price.is_none());
        assert!(!stored.location.has_address());
        // The response price is the sentinel, not the forged value.
        assert_eq!(created.price.as_deref(), Some(PRICE_UNAVAILABLE));
    }

    #[tokio::test]
    async fn find_by_id_returns_authoritative_fields_with_enrichment() {
        let repo = Arc::new(InMemoryCarRepository::new());
        let svc = service(
            Arc::clone(&repo),
            Arc::new(MockPriceLookup::with_price(1, 12_000)),
            Arc::new(MockLocationLookup::with_address()),
        );

        let created = svc.create(impala()).await.unwrap();
        let found = svc.find_by_id(created.id.unwrap()).await.unwrap();

        assert_eq!(found.details, impala().details);
        assert_eq!(found.condition, Condition::Used);
        assert_eq!(found.location.lat, 40.730610);
        assert_eq!(found.price.as_deref(), Some("USD 12000.00"));
    }

    #[tokio::test]
    async fn find_by_id_unknown_is_not_found() {
        let svc = service(
            Arc::new(InMemoryCarRepository::new()),
            Arc::new(MockPriceLookup::default()),
            Arc::new(MockLocationLookup::default()),
        );

        let err = svc.find_by_id(CarId::new(99)).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn enrichment_failure_never_fails_the_operation() {
        let repo = Arc::new(InMemoryCarRepository::new());
        let svc = service(
            Arc::clone(&repo),
            Arc::new(MockPriceLookup::failing()),
            Arc::new(MockLocationLookup::failing()),
        );

        let created = svc.create(impala()).await.unwrap();
        let found = svc.find_by_id(created.id.unwrap()).await.unwrap();

        assert_eq!(found.price.as_deref(), Some(PRICE_UNAVAILABLE));
        assert!(found.location.address.is_none());
        assert_eq!(found.details.model, "Impala");
    }

    #[tokio::test]
    async fn enrichment_timeout_degrades_to_sentinel() {
        let repo = Arc::new(InMemoryCarRepository::new());
        let svc = CarAggregationService::new(
            Arc::clone(&repo) as Arc<dyn CarRepository>,
            Arc::new(MockPriceLookup::slow(500)),
            Arc::new(MockLocationLookup::slow(500)),
            EnrichmentConfig::with_timeout(50),
        );

        let created = svc.create(impala()).await.unwrap();

        assert_eq!(created.price.as_deref(), Some(PRICE_UNAVAILABLE));
        assert!(created.location.address.is_none());
    }

    #[tokio::test]
    async fn absent_price_yields_sentinel_not_error() {
        // Price listed for car 1 only; car 2 legitimately has none.
        let repo = Arc::new(InMemoryCarRepository::new());
        let svc = service(
            Arc::clone(&repo),
            Arc::new(MockPriceLookup::with_price(1, 12_000)),
            Arc::new(MockLocationLookup::default()),
        );

        let first = svc.create(impala()).await.unwrap();
        let second = svc.create(impala()).await.unwrap();

        assert_eq!(first.price.as_deref(), Some("USD 12000.00"));
        assert_eq!(second.price.as_deref(), Some(PRICE_UNAVAILABLE));
    }

    #[tokio::test]
    async fn update_replaces_fields_fully() {
        let repo = Arc::new(InMemoryCarRepository::new());
        let svc = service(
            Arc::clone(&repo),
            Arc::new(MockPriceLookup::default()),
            Arc::new(MockLocationLookup::default()),
        );

        let created = svc.create(impala()).await.unwrap();
        let id = created.id.unwrap();

        let mut replacement = impala();
        replacement.condition = Condition::New;
        let updated = svc.update(id, replacement).await.unwrap();

        assert_eq!(updated.condition, Condition::New);
        assert_eq!(updated.id, Some(id));
        // The full details record was persisted, not just the changed field.
        let stored = repo.get(id).await.unwrap().unwrap();
        assert_eq!(stored.details, impala().details);
        assert_eq!(stored.condition, Condition::New);
    }

    #[tokio::test]
    async fn update_unknown_is_not_found() {
        let svc = service(
            Arc::new(InMemoryCarRepository::new()),
            Arc::new(MockPriceLookup::default()),
            Arc::new(MockLocationLookup::default()),
        );

        let err = svc.update(CarId::new(42), impala()).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn second_delete_is_not_found() {
        let svc = service(
            Arc::new(InMemoryCarRepository::new()),
            Arc::new(MockPriceLookup::default()),
            Arc::new(MockLocationLookup::default()),
        );

        let created = svc.create(impala()).await.unwrap();
        let id = created.id.unwrap();

        svc.delete(id).await.unwrap();
        let err = svc.delete(id).await.unwrap_err();
        assert!(err.is_not_found());

        let err = svc.find_by_id(id).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn list_preserves_order_and_isolates_enrichment() {
        // Only car 2 has a price; the others degrade to the sentinel
        // without affecting their neighbors.
        let repo = Arc::new(InMemoryCarRepository::new());
        let svc = service(
            Arc::clone(&repo),
            Arc::new(MockPriceLookup::with_price(2, 8_500)),
            Arc::new(MockLocationLookup::failing()),
        );

        let mut malibu = impala();
        malibu.details.model = "Malibu".to_string();
        let mut camaro = impala();
        camaro.details.model = "Camaro".to_string();

        svc.create(impala()).await.unwrap();
        svc.create(malibu).await.unwrap();
        svc.create(camaro).await.unwrap();

        let all = svc.list().await.unwrap();
        let models: Vec<&str> = all.iter().map(|c| c.details.model.as_str()).collect();
        assert_eq!(models, vec!["Impala", "Malibu", "Camaro"]);

        assert_eq!(all[0].price.as_deref(), Some(PRICE_UNAVAILABLE));
        assert_eq!(all[1].price.as_deref(), Some("USD 8500.00"));
        assert_eq!(all[2].price.as_deref(), Some(PRICE_UNAVAILABLE));
        assert!(all.iter().all(|c| c.location.address.is_none()));
    }

    #[tokio::test]
    async fn price_is_recomputed_on_every_read() {
        let repo = Arc::new(InMemoryCarRepository::new());
        let prices = Arc::new(MockPriceLookup::with_price(1, 12_000));
        let svc = service(
            Arc::clone(&repo),
            Arc::clone(&prices),
            Arc::new(MockLocationLookup::default()),
        );

        let created = svc.create(impala()).await.unwrap();
        let id = created.id.unwrap();
        svc.find_by_id(id).await.unwrap();
        svc.find_by_id(id).await.unwrap();

        // One lookup per enriched view: create + two reads.
        assert_eq!(prices.calls(), 3);
    }

    #[test]
    fn enrichment_config_default() {
        let config = EnrichmentConfig::default();
        assert_eq!(config.lookup_timeout_ms, 2000);
        assert_eq!(config.list_concurrency, 8);
    }

    #[test]
    fn enrichment_config_builder() {
        let config = EnrichmentConfig::with_timeout(500).with_list_concurrency(2);
        assert_eq!(config.lookup_timeout_ms, 500);
        assert_eq!(config.list_concurrency, 2);
    }
}
