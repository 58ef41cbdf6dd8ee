//! # REST Routes
//!
//! Router assembly for the vehicles API.

use crate::api::rest::handlers::{
    create_car, delete_car, get_car, health, list_cars, update_car, AppState,
};
use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Builds the vehicles API router.
#[must_use]
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/cars", get(list_cars).post(create_car))
        .route("/cars/{id}", get(get_car).put(update_car).delete(delete_car))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
