//! Destination rate resolution.
//!
//! Resolves the daily rate table for a trip destination. A city's own rate
//! table takes precedence over its country's as a whole; there is no
//! per-field fallback, so a city with zero rates yields zero allowances even
//! when its country has rates configured.

use crate::models::{Destination, RateTable};

/// Resolves the rate table for a destination.
///
/// Returns the city's table when the destination specifies a city, the
/// country's table otherwise. Destinations without configured rate data
/// resolve to an all-zero table rather than an error.
///
/// # Example
///
/// ```
/// use perdiem_engine::calculation::resolve_rate_table;
/// use perdiem_engine::models::{City, Country, Destination, RateTable};
/// use rust_decimal::Decimal;
///
/// let destination = Destination {
///     country: Country {
///         code: "DE".to_string(),
///         name: "Germany".to_string(),
///         rates: RateTable {
///             daily_rate_24h: Decimal::from(28),
///             daily_rate_8h: Decimal::from(14),
///             pct_breakfast: 20,
///             pct_lunch: 40,
///             pct_dinner: 40,
///         },
///     },
///     city: None,
/// };
///
/// let rates = resolve_rate_table(&destination);
/// assert_eq!(rates.daily_rate_24h, Decimal::from(28));
/// ```
pub fn resolve_rate_table(destination: &Destination) -> RateTable {
    match &destination.city {
        Some(city) => city.rates.clone(),
        None => destination.country.rates.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{City, Country};
    use rust_decimal::Decimal;

    fn country_rates() -> RateTable {
        RateTable {
            daily_rate_24h: Decimal::from(28),
            daily_rate_8h: Decimal::from(14),
            pct_breakfast: 20,
            pct_lunch: 40,
            pct_dinner: 40,
        }
    }

    fn city_rates() -> RateTable {
        RateTable {
            daily_rate_24h: Decimal::from(58),
            daily_rate_8h: Decimal::from(39),
            pct_breakfast: 20,
            pct_lunch: 40,
            pct_dinner: 40,
        }
    }

    fn make_destination(city: Option<City>) -> Destination {
        Destination {
            country: Country {
                code: "FR".to_string(),
                name: "France".to_string(),
                rates: country_rates(),
            },
            city,
        }
    }

    // ==========================================================================
    // RR-001: country rates apply when no city is set
    // ==========================================================================
    #[test]
    fn test_rr_001_country_rates_without_city() {
        let destination = make_destination(None);
        assert_eq!(resolve_rate_table(&destination), country_rates());
    }

    // ==========================================================================
    // RR-002: city rates take precedence over country rates
    // ==========================================================================
    #[test]
    fn test_rr_002_city_rates_override_country() {
        let destination = make_destination(Some(City {
            name: "Paris".to_string(),
            rates: city_rates(),
        }));
        assert_eq!(resolve_rate_table(&destination), city_rates());
    }

    // ==========================================================================
    // RR-003: a zero-rated city is not backfilled from the country
    // ==========================================================================
    #[test]
    fn test_rr_003_zero_rated_city_is_not_mixed_with_country() {
        let destination = make_destination(Some(City {
            name: "Nowhere".to_string(),
            rates: RateTable::default(),
        }));

        let rates = resolve_rate_table(&destination);
        assert_eq!(rates, RateTable::default());
        assert_eq!(rates.daily_rate_24h, Decimal::ZERO);
    }

    // ==========================================================================
    // RR-004: a country without rate data resolves to zero fields
    // ==========================================================================
    #[test]
    fn test_rr_004_absent_country_rates_are_zero() {
        let destination = Destination {
            country: Country {
                code: "XX".to_string(),
                name: "Unrated".to_string(),
                rates: RateTable::default(),
            },
            city: None,
        };

        assert_eq!(resolve_rate_table(&destination), RateTable::default());
    }
}
