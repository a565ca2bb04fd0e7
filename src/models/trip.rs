//! Trip model and currency formatting.
//!
//! This module defines the Trip struct describing one business trip and the
//! minimal currency representation used to render amounts.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Destination;

/// The billing currency of a trip.
///
/// Amounts are rendered with two decimal places followed by the currency
/// symbol, matching the display precision the allowance is rounded to.
///
/// # Example
///
/// ```
/// use perdiem_engine::models::Currency;
/// use rust_decimal::Decimal;
///
/// let eur = Currency::default();
/// assert_eq!(eur.format(Decimal::new(112, 1)), "11.20 €");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    /// ISO currency code (e.g., "EUR").
    pub code: String,
    /// The display symbol (e.g., "€").
    pub symbol: String,
}

impl Default for Currency {
    fn default() -> Self {
        Self {
            code: "EUR".to_string(),
            symbol: "€".to_string(),
        }
    }
}

impl Currency {
    /// Formats an amount with two decimal places and the currency symbol.
    pub fn format(&self, amount: Decimal) -> String {
        format!("{:.2} {}", amount.round_dp(2), self.symbol)
    }
}

/// A business trip: begin/end timestamps (stored in UTC), destination, and
/// billing currency.
///
/// The trip owns its meal-day set: whenever `travel_begin` or `travel_end`
/// changes, the host regenerates the whole set via the aggregator rather
/// than patching individual days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trip {
    /// The travel begin timestamp, in UTC.
    pub travel_begin: DateTime<Utc>,
    /// The travel end timestamp, in UTC.
    pub travel_end: DateTime<Utc>,
    /// The trip destination (country, optionally a city).
    pub destination: Destination,
    /// The billing currency.
    #[serde(default)]
    pub currency: Currency,
}
