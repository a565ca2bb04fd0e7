//! Destination and rate-table models.
//!
//! This module defines the reference data a trip's allowance is computed
//! from: the daily rate table and the country/city destination it is
//! attached to.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The daily rate table for one jurisdiction.
///
/// Carries the statutory 24-hour and 8-hour daily rates plus the meal
/// percentages used for deductions. Percentages are expressed as integer
/// percent values (0–100) of the 24-hour rate.
///
/// A default rate table is all-zero: destinations without configured rates
/// yield a zero allowance rather than an error.
///
/// # Example
///
/// ```
/// use perdiem_engine::models::RateTable;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let rates = RateTable {
///     daily_rate_24h: Decimal::from_str("28").unwrap(),
///     daily_rate_8h: Decimal::from_str("14").unwrap(),
///     pct_breakfast: 20,
///     pct_lunch: 40,
///     pct_dinner: 40,
/// };
/// assert_eq!(rates.pct_breakfast + rates.pct_lunch + rates.pct_dinner, 100);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateTable {
    /// The daily rate for a full (24-hour) day.
    #[serde(default)]
    pub daily_rate_24h: Decimal,
    /// The reduced daily rate for arrival/departure and long single days.
    #[serde(default)]
    pub daily_rate_8h: Decimal,
    /// Breakfast deduction as a percentage of the 24-hour rate.
    #[serde(default)]
    pub pct_breakfast: u32,
    /// Lunch deduction as a percentage of the 24-hour rate.
    #[serde(default)]
    pub pct_lunch: u32,
    /// Dinner deduction as a percentage of the 24-hour rate.
    #[serde(default)]
    pub pct_dinner: u32,
}

/// A country with its own rate table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    /// ISO-style country code (e.g., "DE").
    pub code: String,
    /// The human-readable country name.
    pub name: String,
    /// The country-level rate table.
    #[serde(default)]
    pub rates: RateTable,
}

/// A city with its own rate table, overriding its country's rates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    /// The city name.
    pub name: String,
    /// The city-level rate table.
    #[serde(default)]
    pub rates: RateTable,
}

/// A trip destination: a country, optionally narrowed to a city.
///
/// A city always belongs to exactly one country; when present, its rate
/// table takes precedence over the country's as a whole (no per-field
/// mixing).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
    /// The destination country.
    pub country: Country,
    /// The destination city, if one with its own rates applies.
    #[serde(default)]
    pub city: Option<City>,
}

impl Destination {
    /// Returns a human-readable destination label, e.g. "Paris, France".
    pub fn label(&self) -> String {
        match &self.city {
            Some(city) => format!("{}, {}", city.name, self.country.name),
            None => self.country.name.clone(),
        }
    }
}
