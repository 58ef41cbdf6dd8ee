//! # Application Services
//!
//! Services that orchestrate domain logic and infrastructure.
//!
//! - [`CarAggregationService`]: car CRUD with concurrent price/location
//!   enrichment and graceful degradation

pub mod car_aggregation;

pub use car_aggregation::{CarAggregationService, EnrichmentConfig, PRICE_UNAVAILABLE};
