//! # Car Entity
//!
//! The central resource of the listing platform.
//!
//! A [`Car`] combines the authoritative stored fields (`condition`,
//! `details`, `location` coordinates) with transient derived enrichment
//! (`price`, the address fields of `location`). The derived fields are
//! recomputed on every read and stripped on every write; the repository
//! never sees or returns them.
//!
//! # Examples
//!
//! ```
//! use vehicles::domain::entities::Car;
//! use vehicles::domain::value_objects::{Condition, Details, Location, Manufacturer};
//!
//! let details = Details {
//!     manufacturer: Manufacturer::new(101, "Chevrolet"),
//!     model: "Impala".to_string(),
//!     body: "sedan".to_string(),
//!     mileage: 32280,
//!     external_color: "white".to_string(),
//!     engine: "3.6L V6".to_string(),
//!     fuel_type: "Gasoline".to_string(),
//!     model_year: 2018,
//!     production_year: 2018,
//!     number_of_doors: 4,
//! };
//! let car = Car::new(Condition::Used, details, Location::new(40.730610, -73.935242).unwrap());
//!
//! assert!(car.id.is_none());
//! assert!(car.validate().is_ok());
//! ```

use crate::domain::errors::DomainResult;
use crate::domain::value_objects::{CarId, Condition, Details, Location};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A vehicle listing.
///
/// `id`, `created_at` and `modified_at` are repository-managed; `price` and
/// the address fields of `location` are enrichment output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    /// Repository-assigned identifier. `None` before creation.
    #[serde(default)]
    pub id: Option<CarId>,
    /// Vehicle condition.
    pub condition: Condition,
    /// Descriptive vehicle record.
    pub details: Details,
    /// Geographic position, plus derived address fields.
    pub location: Location,
    /// Current price as a formatted currency string. Derived, never
    /// persisted; always present on outbound responses (a sentinel is
    /// substituted when the price cannot be fetched).
    #[serde(default)]
    pub price: Option<String>,
    /// When the record was created. Repository-managed.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// When the record was last replaced. Repository-managed.
    #[serde(default)]
    pub modified_at: Option<DateTime<Utc>>,
}

impl Car {
    /// Creates a new, not-yet-persisted car from its authoritative fields.
    #[must_use]
    pub fn new(condition: Condition, details: Details, location: Location) -> Self {
        Self {
            id: None,
            condition,
            details,
            location,
            price: None,
            created_at: None,
            modified_at: None,
        }
    }

    /// Returns the assigned id, if the car has been persisted.
    #[inline]
    #[must_use]
    pub fn id(&self) -> Option<CarId> {
        self.id
    }

    /// Validates the authoritative fields against the data-model invariants.
    ///
    /// # Errors
    ///
    /// Returns the first [`DomainError`](crate::domain::errors::DomainError)
    /// found in `details` or `location`.
    pub fn validate(&self) -> DomainResult<()> {
        self.details.validate()?;
        self.location.validate()?;
        Ok(())
    }

    /// Strips the derived fields (`price`, address) from the record.
    ///
    /// Applied to every inbound write so clients cannot smuggle derived
    /// values into the authoritative store.
    pub fn strip_derived(&mut self) {
        self.price = None;
        self.location.clear_address();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::value_objects::Manufacturer;

    fn impala() -> Car {
        let details = Details {
            manufacturer: Manufacturer::new(101, "Chevrolet"),
            model: "Impala".to_string(),
            body: "sedan".to_string(),
            mileage: 32280,
            external_color: "white".to_string(),
            engine: "3.6L V6".to_string(),
            fuel_type: "Gasoline".to_string(),
            model_year: 2018,
            production_year: 2018,
            number_of_doors: 4,
        };
        Car::new(
            Condition::Used,
            details,
            Location::new(40.730610, -73.935242).unwrap(),
        )
    }

    #[test]
    fn new_car_has_no_identity_or_derived_state() {
        let car = impala();
        assert!(car.id.is_none());
        assert!(car.price.is_none());
        assert!(car.created_at.is_none());
        assert!(!car.location.has_address());
    }

    #[test]
    fn valid_car_passes_validation() {
        assert!(impala().validate().is_ok());
    }

    #[test]
    fn invalid_details_fail_validation() {
        let mut car = impala();
        car.details.mileage = -10;
        assert!(car.validate().is_err());
    }

    #[test]
    fn invalid_location_fails_validation() {
        let mut car = impala();
        car.location.lat = 123.0;
        assert!(car.validate().is_err());
    }

    #[test]
    fn strip_derived_clears_price_and_address() {
        let mut car = impala();
        car.price = Some("USD 12000.00".to_string());
        car.location.address = Some("123 Main St".to_string());
        car.location.zip = Some("11101".to_string());

        car.strip_derived();

        assert!(car.price.is_none());
        assert!(!car.location.has_address());
        assert_eq!(car.details.model, "Impala");
    }

    #[test]
    fn serde_wire_shape() {
        let mut car = impala();
        car.id = Some(crate::domain::value_objects::CarId::new(1));
        car.price = Some("USD 12000.00".to_string());

        let json = serde_json::to_value(&car).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["condition"], "USED");
        assert_eq!(json["details"]["model"], "Impala");
        assert_eq!(json["location"]["lat"], 40.730610);
        assert_eq!(json["price"], "USD 12000.00");
        // Derived address fields are present (null) so the shape is stable.
        assert!(json["location"].get("address").is_some());
    }

    #[test]
    fn deserializes_client_payload_without_derived_fields() {
        let payload = r#"{
            "condition": "USED",
            "details": {
                "manufacturer": {"code": 101, "name": "Chevrolet"},
                "model": "Impala",
                "body": "sedan",
                "mileage": 32280,
                "externalColor": "white",
                "engine": "3.6L V6",
                "fuelType": "Gasoline",
                "modelYear": 2018,
                "productionYear": 2018,
                "numberOfDoors": 4
            },
            "location": {"lat": 40.730610, "lon": -73.935242}
        }"#;
        let car: Car = serde_json::from_str(payload).unwrap();
        assert!(car.id.is_none());
        assert!(car.price.is_none());
        assert!(car.validate().is_ok());
    }
}
