//! # Vehicle Condition
//!
//! Enumeration of vehicle conditions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Condition of a listed vehicle.
///
/// # Examples
///
/// ```
/// use vehicles::domain::value_objects::Condition;
///
/// assert_eq!(Condition::Used.to_string(), "USED");
/// assert_eq!("NEW".parse::<Condition>(), Ok(Condition::New));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[repr(u8)]
pub enum Condition {
    /// Factory-new vehicle.
    New = 0,
    /// Previously owned vehicle.
    Used = 1,
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::New => "NEW",
            Self::Used => "USED",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Condition {
    type Err = ParseConditionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NEW" => Ok(Self::New),
            "USED" => Ok(Self::Used),
            other => Err(ParseConditionError(other.to_string())),
        }
    }
}

/// Error returned when parsing an invalid condition string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseConditionError(pub String);

impl fmt::Display for ParseConditionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid vehicle condition: {}", self.0)
    }
}

impl std::error::Error for ParseConditionError {}
