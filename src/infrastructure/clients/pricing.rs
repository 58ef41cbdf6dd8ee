//! # Pricing Service Client
//!
//! HTTP adapter for the [`PriceLookup`] port.
//!
//! Calls the pricing service's `GET /prices/{vehicleId}` endpoint. A 404
//! response is a legitimate "no price listed" answer and maps to
//! `Ok(None)`; every other failure is a transport error for the caller to
//! degrade.

use crate::domain::value_objects::CarId;
use crate::infrastructure::clients::error::LookupResult;
use crate::infrastructure::clients::http::HttpClient;
use crate::infrastructure::clients::traits::{PriceLookup, PriceQuote};
use async_trait::async_trait;

/// HTTP implementation of [`PriceLookup`] backed by the pricing service.
#[derive(Debug, Clone)]
pub struct PriceServiceClient {
    http: HttpClient,
    base_url: String,
}

impl PriceServiceClient {
    /// Creates a client for the pricing service at `base_url`.
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
impl PriceLookup for PriceServiceClient {
    async fn price_for(&self, id: CarId) -> LookupResult<Option<PriceQuote>> {
        let url = format!("{}/prices/{}", self.base_url, id);
        match self.http.get::<PriceQuote>(&url).await {
            Ok(quote) => Ok(Some(quote)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }
}
