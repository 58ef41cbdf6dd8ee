//! # Location
//!
//! Geographic position of a listed vehicle.
//!
//! Only the coordinate pair is authoritative. The descriptive address
//! fields are enrichment output from the maps service: they are filled in
//! on outbound responses and stripped on inbound writes, never persisted.

use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Geographic position with optional derived address fields.
///
/// # Examples
///
/// ```
/// use vehicles::domain::value_objects::Location;
///
/// let location = Location::new(40.730610, -73.935242).unwrap();
/// assert!(location.address.is_none());
///
/// assert!(Location::new(91.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Latitude in degrees, range [-90, 90].
    pub lat: f64,
    /// Longitude in degrees, range [-180, 180].
    pub lon: f64,
    /// Street address. Derived, never persisted.
    #[serde(default)]
    pub address: Option<String>,
    /// City. Derived, never persisted.
    #[serde(default)]
    pub city: Option<String>,
    /// State. Derived, never persisted.
    #[serde(default)]
    pub state: Option<String>,
    /// Postal code. Derived, never persisted.
    #[serde(default)]
    pub zip: Option<String>,
}

impl Location {
    /// Creates a location from a validated coordinate pair.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] if either coordinate is out of range.
    pub fn new(lat: f64, lon: f64) -> DomainResult<Self> {
        let location = Self {
            lat,
            lon,
            address: None,
            city: None,
            state: None,
            zip: None,
        };
        location.validate()?;
        Ok(location)
    }

    /// Validates the coordinate pair.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::LatitudeOutOfRange`] or
    /// [`DomainError::LongitudeOutOfRange`].
    pub fn validate(&self) -> DomainResult<()> {
        if !self.lat.is_finite() || !(-90.0..=90.0).contains(&self.lat) {
            return Err(DomainError::LatitudeOutOfRange(self.lat));
        }
        if !self.lon.is_finite() || !(-180.0..=180.0).contains(&self.lon) {
            return Err(DomainError::LongitudeOutOfRange(self.lon));
        }
        Ok(())
    }

    /// Clears the derived address fields.
    pub fn clear_address(&mut self) {
        self.address = None;
        self.city = None;
        self.state = None;
        self.zip = None;
    }

    /// Returns true if any derived address field is set.
    #[must_use]
    pub fn has_address(&self) -> bool {
        self.address.is_some() || self.city.is_some() || self.state.is_some() || self.zip.is_some()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lat, self.lon)
    }
}
