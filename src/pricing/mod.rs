//! # Pricing Service
//!
//! A trivial read-only price lookup service.
//!
//! The catalog is an explicit keyed store handed to the router at
//! construction, not ambient state. At startup the catalog is seeded with
//! randomized USD prices for a fixed range of vehicle ids; tests inject
//! fixed prices instead.
//!
//! # Endpoints
//!
//! - `GET /prices` - list every catalog entry
//! - `GET /prices/{vehicleId}` - price for one vehicle, 404 when unlisted

use crate::infrastructure::clients::traits::PriceQuote;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use rand::Rng;
use rust_decimal::Decimal;
use serde_json::json;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Default number of vehicles the catalog is seeded with.
pub const DEFAULT_CATALOG_SIZE: i64 = 20;

/// Read-only price catalog keyed by vehicle id.
#[derive(Debug, Clone, Default)]
pub struct PriceCatalog {
    prices: BTreeMap<i64, PriceQuote>,
}

impl PriceCatalog {
    /// Creates a catalog from fixed price quotes.
    #[must_use]
    pub fn with_prices(prices: impl IntoIterator<Item = PriceQuote>) -> Self {
        Self {
            prices: prices.into_iter().map(|q| (q.vehicle_id, q)).collect(),
        }
    }

    /// Creates a catalog seeded with randomized USD prices for vehicle ids
    /// `1..=size`.
    #[must_use]
    pub fn seeded(size: i64) -> Self {
        let mut rng = rand::rng();
        let prices = (1..=size.max(0)).map(|id| {
            let dollars: i64 = rng.random_range(5_000..=100_000);
            PriceQuote::new("USD", Decimal::from(dollars), id)
        });
        Self::with_prices(prices)
    }

    /// Returns the price for a vehicle, if listed.
    #[must_use]
    pub fn get(&self, vehicle_id: i64) -> Option<&PriceQuote> {
        self.prices.get(&vehicle_id)
    }

    /// Returns every catalog entry in vehicle-id order.
    #[must_use]
    pub fn all(&self) -> Vec<PriceQuote> {
        self.prices.values().cloned().collect()
    }

    /// Returns the number of listed vehicles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    /// Returns true if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

/// Builds the pricing service router over the given catalog.
#[must_use]
pub fn create_router(catalog: Arc<PriceCatalog>) -> Router {
    Router::new()
        .route("/prices", get(list_prices))
        .route("/prices/{vehicle_id}", get(get_price))
        .with_state(catalog)
}

/// `GET /prices` - lists every catalog entry.
async fn list_prices(State(catalog): State<Arc<PriceCatalog>>) -> Json<Vec<PriceQuote>> {
    Json(catalog.all())
}

/// `GET /prices/{vehicleId}` - returns the price for one vehicle.
async fn get_price(
    State(catalog): State<Arc<PriceCatalog>>,
    Path(vehicle_id): Path<i64>,
) -> Response {
    match catalog.get(vehicle_id) {
        Some(quote) => Json(quote.clone()).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": format!("no price listed for vehicle {vehicle_id}") })),
        )
            .into_response(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    fn fixed_catalog() -> Arc<PriceCatalog> {
        Arc::new(PriceCatalog::with_prices([
            PriceQuote::new("USD", Decimal::from(12_000), 1),
            PriceQuote::new("USD", Decimal::from(23_500), 2),
        ]))
    }

    #[test]
    fn seeded_catalog_covers_requested_range() {
        let catalog = PriceCatalog::seeded(DEFAULT_CATALOG_SIZE);
        assert_eq!(catalog.len(), 20);
        for id in 1..=20 {
            let quote = catalog.get(id).unwrap();
            assert_eq!(quote.vehicle_id, id);
            assert_eq!(quote.currency, "USD");
            assert!(quote.price > Decimal::ZERO);
        }
        assert!(catalog.get(21).is_none());
    }

    #[test]
    fn with_prices_keys_by_vehicle_id() {
        let catalog = fixed_catalog();
        assert_eq!(catalog.get(1).unwrap().price, Decimal::from(12_000));
        assert!(catalog.get(3).is_none());
    }

    #[tokio::test]
    async fn get_price_returns_listed_quote() {
        let app = create_router(fixed_catalog());
        let response = app
            .oneshot(Request::builder().uri("/prices/1").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let quote: PriceQuote = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(quote.vehicle_id, 1);
        assert_eq!(quote.price, Decimal::from(12_000));
    }

    #[tokio::test]
    async fn get_price_unlisted_is_404() {
        let app = create_router(fixed_catalog());
        let response = app
            .oneshot(Request::builder().uri("/prices/9").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn list_prices_returns_all_entries() {
        let app = create_router(fixed_catalog());
        let response = app
            .oneshot(Request::builder().uri("/prices").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let quotes: Vec<PriceQuote> = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(quotes.len(), 2);
    }
}
