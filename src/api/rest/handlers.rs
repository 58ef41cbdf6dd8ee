//! # REST Handlers
//!
//! Request handlers and DTOs for the vehicles API.
//!
//! The request DTO admits only the authoritative fields (`condition`,
//! `details`, `location` coordinates); derived fields have no place to
//! arrive, so inbound writes are stripped by construction. Responses are
//! the plain enriched [`Car`] values from the aggregation service, with no
//! envelope wrapping.

use crate::application::error::ApplicationError;
use crate::application::services::CarAggregationService;
use crate::domain::entities::Car;
use crate::domain::value_objects::{CarId, Condition, Details, Location};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

/// Shared state for the vehicles API.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The aggregation service behind every endpoint.
    pub cars: CarAggregationService,
}

impl AppState {
    /// Creates the API state.
    #[must_use]
    pub fn new(cars: CarAggregationService) -> Self {
        Self { cars }
    }
}

/// Coordinate pair accepted on writes.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CoordinatesRequest {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
}

/// Request body for creating or replacing a car.
#[derive(Debug, Clone, Deserialize)]
pub struct CarRequest {
    /// Vehicle condition.
    pub condition: Condition,
    /// Descriptive vehicle record.
    pub details: Details,
    /// Geographic position.
    pub location: CoordinatesRequest,
}

impl CarRequest {
    /// Converts the request into a not-yet-persisted domain car.
    #[must_use]
    pub fn into_car(self) -> Car {
        let location = Location {
            lat: self.location.lat,
            lon: self.location.lon,
            address: None,
            city: None,
            state: None,
            zip: None,
        };
        Car::new(self.condition, self.details, location)
    }
}

/// Error body returned by every failing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}

/// Health check body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status, always `UP` when the handler is reachable.
    pub status: String,
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let status = if self.is_validation() {
            tracing::warn!(error = %self, "request validation failed");
            StatusCode::BAD_REQUEST
        } else if self.is_not_found() {
            tracing::warn!(error = %self, "resource not found");
            StatusCode::NOT_FOUND
        } else {
            tracing::error!(error = %self, "operation failed");
            StatusCode::INTERNAL_SERVER_ERROR
        };

        let body = Json(ErrorResponse {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}

/// `POST /cars` - creates a car and returns the enriched view.
pub async fn create_car(
    State(state): State<AppState>,
    Json(request): Json<CarRequest>,
) -> Result<(StatusCode, Json<Car>), ApplicationError> {
    let created = state.cars.create(request.into_car()).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `GET /cars` - lists every car, each independently enriched.
pub async fn list_cars(State(state): State<AppState>) -> Result<Json<Vec<Car>>, ApplicationError> {
    Ok(Json(state.cars.list().await?))
}

/// `GET /cars/{id}` - returns one enriched car.
pub async fn get_car(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Car>, ApplicationError> {
    Ok(Json(state.cars.find_by_id(CarId::new(id)).await?))
}

/// `PUT /cars/{id}` - replaces a car's mutable fields.
pub async fn update_car(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<CarRequest>,
) -> Result<Json<Car>, ApplicationError> {
    Ok(Json(state.cars.update(CarId::new(id), request.into_car()).await?))
}

/// `DELETE /cars/{id}` - removes a car.
pub async fn delete_car(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApplicationError> {
    state.cars.delete(CarId::new(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /health` - liveness probe.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "UP".to_string(),
    })
}
