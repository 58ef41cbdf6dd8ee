//! # Maps Service Client
//!
//! HTTP adapter for the [`LocationLookup`] port.
//!
//! Calls the maps service's `GET /maps?lat=..&lon=..` endpoint. A 404
//! response means the service cannot describe the coordinates and maps to
//! `Ok(None)`.

use crate::infrastructure::clients::error::LookupResult;
use crate::infrastructure::clients::http::HttpClient;
use crate::infrastructure::clients::traits::{LocationLookup, ResolvedAddress};
use async_trait::async_trait;

/// HTTP implementation of [`LocationLookup`] backed by the maps service.
#[derive(Debug, Clone)]
pub struct MapsServiceClient {
    http: HttpClient,
    base_url: String,
}

impl MapsServiceClient {
    /// Creates a client for the maps service at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns a [`LookupError`](crate::infrastructure::clients::error::LookupError)
    /// if the underlying HTTP client cannot be created.
    pub fn new(base_url: impl Into<String>, timeout_ms: u64) -> LookupResult<Self> {
        let base_url: String = base_url.into();
        Ok(Self {
            http: HttpClient::new(timeout_ms)?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Returns the configured base URL.
    #[inline]
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl LocationLookup for MapsServiceClient {
    async fn resolve(&self, lat: f64, lon: f64) -> LookupResult<Option<ResolvedAddress>> {
        let url = format!("{}/maps", self.base_url);
        let params = [("lat", lat.to_string()), ("lon", lon.to_string())];
        match self
            .http
            .get_with_params::<ResolvedAddress, _>(&url, &params)
            .await
        {
            Ok(address) => Ok(Some(address)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }
}
