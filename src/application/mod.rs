//! # Application Layer
//!
//! Use-case orchestration between the domain and infrastructure layers.

pub mod error;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};
pub use services::{CarAggregationService, EnrichmentConfig, PRICE_UNAVAILABLE};
