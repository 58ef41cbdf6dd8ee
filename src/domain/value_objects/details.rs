//! # Vehicle Details
//!
//! The descriptive record of a listed vehicle.
//!
//! [`Details`] carries the authoritative descriptive fields of a car:
//! manufacturer, model, body style, mileage, color, engine, fuel type,
//! model/production year, and door count. All fields are required for a
//! valid car; [`Details::validate`] enforces the data-model invariants.

use crate::domain::errors::{DomainError, DomainResult};
use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The first plausible model year (the Benz Patent-Motorwagen).
pub const EARLIEST_MODEL_YEAR: i32 = 1886;

/// Vehicle manufacturer.
///
/// # Examples
///
/// ```
/// use vehicles::domain::value_objects::Manufacturer;
///
/// let m = Manufacturer::new(101, "Chevrolet");
/// assert_eq!(m.code, 101);
/// assert_eq!(m.name, "Chevrolet");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manufacturer {
    /// Numeric manufacturer code.
    pub code: i32,
    /// Manufacturer display name.
    pub name: String,
}

impl Manufacturer {
    /// Creates a new manufacturer.
    #[must_use]
    pub fn new(code: i32, name: impl Into<String>) -> Self {
        Self {
            code,
            name: name.into(),
        }
    }
}

impl fmt::Display for Manufacturer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.code)
    }
}

/// Descriptive record of a vehicle.
///
/// Serialized with the platform's camelCase wire names
/// (`externalColor`, `fuelType`, `modelYear`, `productionYear`,
/// `numberOfDoors`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Details {
    /// Vehicle manufacturer.
    pub manufacturer: Manufacturer,
    /// Model name, e.g. `Impala`.
    pub model: String,
    /// Body style, e.g. `sedan`.
    pub body: String,
    /// Odometer reading in miles.
    pub mileage: i32,
    /// Exterior color.
    pub external_color: String,
    /// Engine description, e.g. `3.6L V6`.
    pub engine: String,
    /// Fuel type, e.g. `Gasoline`.
    pub fuel_type: String,
    /// Marketing model year.
    pub model_year: i32,
    /// Year the vehicle was produced.
    pub production_year: i32,
    /// Number of doors.
    pub number_of_doors: i32,
}

impl Details {
    /// Validates the record against the data-model invariants.
    ///
    /// Text fields must be non-blank, numeric fields non-negative, the door
    /// count at least one, and both years plausible calendar years.
    ///
    /// # Errors
    ///
    /// Returns the first [`DomainError`] encountered.
    pub fn validate(&self) -> DomainResult<()> {
        if self.manufacturer.name.trim().is_empty() {
            return Err(DomainError::empty_field("details.manufacturer.name"));
        }
        if self.manufacturer.code < 0 {
            return Err(DomainError::negative_value(
                "details.manufacturer.code",
                i64::from(self.manufacturer.code),
            ));
        }
        if self.model.trim().is_empty() {
            return Err(DomainError::empty_field("details.model"));
        }
        if self.body.trim().is_empty() {
            return Err(DomainError::empty_field("details.body"));
        }
        if self.external_color.trim().is_empty() {
            return Err(DomainError::empty_field("details.externalColor"));
        }
        if self.engine.trim().is_empty() {
            return Err(DomainError::empty_field("details.engine"));
        }
        if self.fuel_type.trim().is_empty() {
            return Err(DomainError::empty_field("details.fuelType"));
        }
        if self.mileage < 0 {
            return Err(DomainError::negative_value(
                "details.mileage",
                i64::from(self.mileage),
            ));
        }
        if self.number_of_doors < 1 {
            return Err(DomainError::below_minimum(
                "details.numberOfDoors",
                1,
                i64::from(self.number_of_doors),
            ));
        }
        validate_year("details.modelYear", self.model_year)?;
        validate_year("details.productionYear", self.production_year)?;
        Ok(())
    }
}

/// Checks that a year is within the plausible calendar range.
///
/// The upper bound is next calendar year, since manufacturers list upcoming
/// model years ahead of time.
fn validate_year(field: &'static str, year: i32) -> DomainResult<()> {
    let upper = Utc::now().year() + 1;
    if year < EARLIEST_MODEL_YEAR || year > upper {
        return Err(DomainError::implausible_year(field, year));
    }
    Ok(())
}
