//! # Lookup Ports
//!
//! Port definitions for the enrichment collaborators.
//!
//! This module defines the [`PriceLookup`] and [`LocationLookup`] traits
//! that the aggregation service depends on. Any transport (HTTP, RPC,
//! in-process stub) satisfying these contracts is substitutable, which is
//! what makes the enrichment logic deterministic to test.
//!
//! Both ports distinguish absence from failure: `Ok(None)` means the
//! collaborator answered and has no data for the key; `Err` means the call
//! itself failed.

use crate::domain::value_objects::CarId;
use crate::infrastructure::clients::error::LookupResult;
use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A price for a vehicle, as returned by the pricing service.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use vehicles::infrastructure::clients::traits::PriceQuote;
///
/// let quote = PriceQuote::new("USD", Decimal::from(12_000), 1);
/// assert_eq!(quote.display_string(), "USD 12000.00");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuote {
    /// ISO currency code, e.g. `USD`.
    pub currency: String,
    /// The monetary amount.
    pub price: Decimal,
    /// The vehicle this price belongs to.
    pub vehicle_id: i64,
}

impl PriceQuote {
    /// Creates a new price quote.
    #[must_use]
    pub fn new(currency: impl Into<String>, price: Decimal, vehicle_id: i64) -> Self {
        Self {
            currency: currency.into(),
            price,
            vehicle_id,
        }
    }

    /// Formats the quote as the localized currency string attached to
    /// enriched cars, e.g. `USD 12000.00`.
    ///
    /// The amount is rendered with exactly two decimal places.
    #[must_use]
    pub fn display_string(&self) -> String {
        let mut amount = self.price;
        amount.rescale(2);
        format!("{} {}", self.currency, amount)
    }
}

impl fmt::Display for PriceQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_string())
    }
}

/// A descriptive address resolved from a coordinate pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedAddress {
    /// Street address.
    pub address: String,
    /// City.
    pub city: String,
    /// State.
    pub state: String,
    /// Postal code.
    pub zip: String,
}

impl ResolvedAddress {
    /// Creates a new resolved address.
    #[must_use]
    pub fn new(
        address: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        zip: impl Into<String>,
    ) -> Self {
        Self {
            address: address.into(),
            city: city.into(),
            state: state.into(),
            zip: zip.into(),
        }
    }
}

impl fmt::Display for ResolvedAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {} {}",
            self.address, self.city, self.state, self.zip
        )
    }
}

/// Port for the pricing collaborator.
///
/// # Errors
///
/// Implementations return `Err` only for transport-level failures; a car
/// with no listed price is `Ok(None)`.
#[async_trait]
pub trait PriceLookup: Send + Sync + fmt::Debug {
    /// Returns the current price for the given car, or `None` if the
    /// pricing service has no price listed for it.
    async fn price_for(&self, id: CarId) -> LookupResult<Option<PriceQuote>>;
}

/// Port for the maps collaborator.
///
/// # Errors
///
/// Implementations return `Err` only for transport-level failures; an
/// unresolvable coordinate pair is `Ok(None)`.
#[async_trait]
pub trait LocationLookup: Send + Sync + fmt::Debug {
    /// Returns a descriptive address for the given coordinate pair, or
    /// `None` if the maps service cannot describe it.
    async fn resolve(&self, lat: f64, lon: f64) -> LookupResult<Option<ResolvedAddress>>;
}
