//! # HTTP Client Utilities
//!
//! Shared HTTP client wrapper for the lookup adapters.
//!
//! Provides:
//! - Configurable timeouts
//! - JSON deserialization
//! - Status-code to error mapping
//!
//! # Examples
//!
//! ```ignore
//! use vehicles::infrastructure::clients::http::HttpClient;
//!
//! let client = HttpClient::new(2000)?;
//! let quote: PriceQuote = client.get("http://localhost:8082/prices/1").await?;
//! ```

use crate::infrastructure::clients::error::{LookupError, LookupResult};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// HTTP client wrapper for lookup adapters.
///
/// Thin convenience layer over `reqwest` with per-client timeout and a
/// uniform mapping from transport failures and status codes to
/// [`LookupError`].
#[derive(Debug, Clone)]
pub struct HttpClient {
    /// Inner reqwest client.
    client: Client,
    /// Request timeout in milliseconds.
    timeout_ms: u64,
}

impl HttpClient {
    /// Creates a new HTTP client with the specified timeout.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::Internal`] if the client cannot be created.
    pub fn new(timeout_ms: u64) -> LookupResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .map_err(|e| LookupError::internal(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self { client, timeout_ms })
    }

    /// Returns the configured timeout in milliseconds.
    #[inline]
    #[must_use]
    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    /// Makes a GET request and deserializes the JSON response.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::Connection`] or [`LookupError::Timeout`] if
    /// the request fails, [`LookupError::NotFound`] on a 404 response, and
    /// [`LookupError::Protocol`] if the response cannot be parsed.
    pub async fn get<T: DeserializeOwned>(&self, url: &str) -> LookupResult<T> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        handle_response(response).await
    }

    /// Makes a GET request with query parameters and deserializes the JSON
    /// response.
    ///
    /// # Errors
    ///
    /// Same as [`HttpClient::get`].
    pub async fn get_with_params<T: DeserializeOwned, P: serde::Serialize + ?Sized>(
        &self,
        url: &str,
        params: &P,
    ) -> LookupResult<T> {
        let response = self
            .client
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        handle_response(response).await
    }

    /// Makes a simple health check GET request.
    ///
    /// Returns `true` if the request succeeds with a 2xx status code.
    pub async fn health_check(&self, url: &str) -> bool {
        match self.client.get(url).send().await {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }
}

/// Handles the HTTP response, checking status and deserializing JSON.
async fn handle_response<T: DeserializeOwned>(response: Response) -> LookupResult<T> {
    let status = response.status();

    if status.is_success() {
        response
            .json::<T>()
            .await
            .map_err(|e| LookupError::protocol(format!("failed to parse response: {}", e)))
    } else {
        let error_body = response.text().await.unwrap_or_default();
        Err(map_status_error(status, &error_body))
    }
}

/// Maps a reqwest error to a [`LookupError`].
fn map_reqwest_error(error: reqwest::Error) -> LookupError {
    if error.is_timeout() {
        LookupError::timeout("request timed out")
    } else if error.is_connect() {
        LookupError::connection(format!("connection failed: {}", error))
    } else {
        LookupError::connection(format!("HTTP request failed: {}", error))
    }
}

/// Maps an HTTP status code to a [`LookupError`].
fn map_status_error(status: StatusCode, body: &str) -> LookupError {
    match status {
        StatusCode::NOT_FOUND => LookupError::not_found(format!("resource not found: {}", body)),
        StatusCode::BAD_REQUEST => LookupError::invalid_request(format!("bad request: {}", body)),
        StatusCode::TOO_MANY_REQUESTS
        | StatusCode::INTERNAL_SERVER_ERROR
        | StatusCode::BAD_GATEWAY
        | StatusCode::SERVICE_UNAVAILABLE
        | StatusCode::GATEWAY_TIMEOUT => {
            LookupError::service_unavailable(format!("server error ({}): {}", status, body))
        }
        _ => LookupError::protocol(format!("HTTP error ({}): {}", status, body)),
    }
}
