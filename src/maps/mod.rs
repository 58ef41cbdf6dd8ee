//! # Maps Service
//!
//! A read-only lookup returning a descriptive address for an approximate
//! coordinate pair.
//!
//! The address book is a fixed dataset; a coordinate pair is validated and
//! then mapped deterministically to one entry, so repeated lookups for the
//! same car agree.
//!
//! # Endpoints
//!
//! - `GET /maps?lat=..&lon=..` - address for the coordinates, 400 when a
//!   coordinate is out of range

use crate::infrastructure::clients::traits::ResolvedAddress;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

/// The fixed address dataset: (street, city, state, zip).
const ADDRESSES: &[(&str, &str, &str, &str)] = &[
    ("777 Brockton Avenue", "Abington", "MA", "2351"),
    ("30 Memorial Drive", "Avon", "MA", "2322"),
    ("250 Hartford Avenue", "Bellingham", "MA", "2019"),
    ("700 Oak Street", "Brockton", "MA", "2301"),
    ("66-4 Parkhurst Rd", "Chelmsford", "MA", "1824"),
    ("591 Memorial Dr", "Chicopee", "MA", "1020"),
    ("55 Brooksby Village Way", "Danvers", "MA", "1923"),
    ("137 Teaticket Hwy", "East Falmouth", "MA", "2536"),
    ("42 Fairhaven Commons Way", "Fairhaven", "MA", "2719"),
    ("374 William S Canning Blvd", "Fall River", "MA", "2721"),
];

/// Read-only address dataset with deterministic coordinate mapping.
#[derive(Debug, Clone, Default)]
pub struct AddressBook;

impl AddressBook {
    /// Creates the address book.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Returns the address entry for a coordinate pair.
    ///
    /// The pair is reduced to an index into the fixed dataset; nearby
    /// coordinates may share an entry, which is fine for an approximate
    /// descriptive address.
    #[must_use]
    pub fn lookup(&self, lat: f64, lon: f64) -> ResolvedAddress {
        let index = ((lat.abs() * 10.0) as usize + (lon.abs() * 10.0) as usize) % ADDRESSES.len();
        let (address, city, state, zip) = ADDRESSES
            .get(index)
            .copied()
            .unwrap_or(("777 Brockton Avenue", "Abington", "MA", "2351"));
        ResolvedAddress::new(address, city, state, zip)
    }

    /// Returns the number of entries in the dataset.
    #[must_use]
    pub fn len(&self) -> usize {
        ADDRESSES.len()
    }

    /// Returns true if the dataset is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        ADDRESSES.is_empty()
    }
}

/// Query parameters for an address lookup.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct MapsQuery {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
}

/// Builds the maps service router over the given address book.
#[must_use]
pub fn create_router(book: Arc<AddressBook>) -> Router {
    Router::new()
        .route("/maps", get(get_address))
        .with_state(book)
}

/// `GET /maps?lat=..&lon=..` - returns an address for the coordinates.
async fn get_address(State(book): State<Arc<AddressBook>>, Query(query): Query<MapsQuery>) -> Response {
    if !query.lat.is_finite() || !(-90.0..=90.0).contains(&query.lat) {
        return bad_request(format!("latitude out of range: {}", query.lat));
    }
    if !query.lon.is_finite() || !(-180.0..=180.0).contains(&query.lon) {
        return bad_request(format!("longitude out of range: {}", query.lon));
    }
    Json(book.lookup(query.lat, query.lon)).into_response()
}

fn bad_request(message: String) -> Response {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
}
