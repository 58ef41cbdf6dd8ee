//! # REST API
//!
//! REST endpoints using axum for the vehicles API.
//!
//! # Endpoints
//!
//! - `POST /cars` - create a car, returns the enriched view (201)
//! - `GET /cars` - list all cars, each independently enriched
//! - `GET /cars/{id}` - get one enriched car
//! - `PUT /cars/{id}` - replace a car's mutable fields
//! - `DELETE /cars/{id}` - remove a car (204)
//! - `GET /health` - health check
//!
//! Responses are plain enriched car values; any link/envelope wrapping is a
//! concern of callers, not this boundary.
//!
//! # Usage
//!
//! ```ignore
//! use vehicles::api::rest::{create_router, AppState};
//!
//! let router = create_router(AppState::new(service));
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
//! axum::serve(listener, router).await?;
//! ```

pub mod handlers;
pub mod routes;

pub use handlers::{
    AppState, CarRequest, CoordinatesRequest, ErrorResponse, HealthResponse,
};
pub use routes::create_router;
