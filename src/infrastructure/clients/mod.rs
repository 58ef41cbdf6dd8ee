//! # Lookup Clients
//!
//! Ports and HTTP adapters for the enrichment collaborators.
//!
//! ## Ports
//!
//! - [`PriceLookup`]: current price for a car
//! - [`LocationLookup`]: descriptive address for a coordinate pair
//!
//! ## Adapters
//!
//! - [`PriceServiceClient`]: HTTP client for the pricing service
//! - [`MapsServiceClient`]: HTTP client for the maps service

pub mod error;
pub mod http;
pub mod maps;
pub mod pricing;
pub mod traits;

pub use error::{LookupError, LookupResult};
pub use http::HttpClient;
pub use maps::MapsServiceClient;
pub use pricing::PriceServiceClient;
pub use traits::{LocationLookup, PriceLookup, PriceQuote, ResolvedAddress};
