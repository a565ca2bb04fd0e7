//! Trip allowance aggregation.
//!
//! Drives the full pipeline: normalize the trip's UTC timestamps into the
//! caller's local calendar, classify the covered days, resolve the
//! destination rate table, compute each day's allowance, and sum the trip
//! total.
//!
//! Regeneration is deliberately lossy: whenever trip dates change the host
//! replaces the whole meal-day set with a freshly expanded one (default
//! meal flags), then re-applies whatever selections it still holds by date.
//! Selections for dates the trip no longer covers are dropped, never merged.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::{MealDay, MealSelection, Trip};

use super::day_classifier::classify_trip_days;
use super::meal_day_allowance::calculate_day_allowance;
use super::rate_resolver::resolve_rate_table;
use super::time_normalizer::normalize_trip_times;

/// The regenerated meal-day set of a trip plus its total allowance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripAllowance {
    /// One meal day per covered calendar date, ordered by date.
    pub meal_days: Vec<MealDay>,
    /// The trip total: `sum(meal_days.allowance)`.
    pub total: Decimal,
}

/// Expands a trip into its meal-day set with default meal flags.
///
/// Normalizes the trip's timestamps into the caller's timezone, classifies
/// the covered days, and creates one [`MealDay`] per day with no meals
/// included and the day's allowance already computed.
///
/// # Errors
///
/// Propagates timezone resolution failures and invalid travel ranges; on
/// error no days are produced.
pub fn expand_trip(trip: &Trip, tz_name: Option<&str>) -> EngineResult<Vec<MealDay>> {
    let (begin_local, end_local) =
        normalize_trip_times(trip.travel_begin, trip.travel_end, tz_name)?;
    let classified = classify_trip_days(begin_local, end_local)?;
    let rates = resolve_rate_table(&trip.destination);

    let days = classified
        .into_iter()
        .map(|day| {
            let mut meal_day = MealDay::new(day.date, day.kind);
            meal_day.allowance = calculate_day_allowance(&meal_day, &rates).amount;
            meal_day
        })
        .collect();

    Ok(days)
}

/// Applies user meal selections onto a meal-day set by matching dates.
///
/// Selections whose date is not in the set are ignored. Flags of unmatched
/// days keep their defaults. Allowances are not recomputed here; call
/// [`recompute_total`] afterwards.
pub fn apply_meal_selections(days: &mut [MealDay], selections: &[MealSelection]) {
    for selection in selections {
        if let Some(day) = days.iter_mut().find(|d| d.date == selection.date) {
            day.breakfast_included = selection.breakfast_included;
            day.lunch_included = selection.lunch_included;
            day.dinner_included = selection.dinner_included;
        }
    }
}

/// Recomputes every day's allowance from its current meal flags and returns
/// the trip total.
pub fn recompute_total(trip: &Trip, days: &mut [MealDay]) -> Decimal {
    let rates = resolve_rate_table(&trip.destination);
    let mut total = Decimal::ZERO;
    for day in days.iter_mut() {
        day.allowance = calculate_day_allowance(day, &rates).amount;
        total += day.allowance;
    }
    total
}

/// Calculates the complete allowance for a trip.
///
/// Regenerates the meal-day set from the trip's current timestamps, applies
/// the given meal selections by date, recomputes each day, and returns the
/// set with the trip total. Identical inputs always yield an identical
/// result.
///
/// # Example
///
/// ```
/// use chrono::{DateTime, Utc};
/// use perdiem_engine::calculation::calculate_trip_allowance;
/// use perdiem_engine::models::{Country, Currency, Destination, RateTable, Trip};
/// use rust_decimal::Decimal;
///
/// let trip = Trip {
///     travel_begin: "2024-03-01T07:00:00Z".parse::<DateTime<Utc>>().unwrap(),
///     travel_end: "2024-03-03T17:00:00Z".parse::<DateTime<Utc>>().unwrap(),
///     destination: Destination {
///         country: Country {
///             code: "DE".to_string(),
///             name: "Germany".to_string(),
///             rates: RateTable {
///                 daily_rate_24h: Decimal::from(28),
///                 daily_rate_8h: Decimal::from(14),
///                 pct_breakfast: 20,
///                 pct_lunch: 40,
///                 pct_dinner: 40,
///             },
///         },
///         city: None,
///     },
///     currency: Currency::default(),
/// };
///
/// let allowance = calculate_trip_allowance(&trip, Some("Europe/Berlin"), &[]).unwrap();
/// assert_eq!(allowance.meal_days.len(), 3);
/// assert_eq!(allowance.total, Decimal::from(56)); // 14 + 28 + 14
/// ```
pub fn calculate_trip_allowance(
    trip: &Trip,
    tz_name: Option<&str>,
    selections: &[MealSelection],
) -> EngineResult<TripAllowance> {
    let mut meal_days = expand_trip(trip, tz_name)?;
    apply_meal_selections(&mut meal_days, selections);
    let total = recompute_total(trip, &mut meal_days);

    Ok(TripAllowance { meal_days, total })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::models::{City, Country, Currency, DayKind, Destination, RateTable};
    use chrono::{DateTime, NaiveDate, Utc};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_utc(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    fn make_date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn german_rates() -> RateTable {
        RateTable {
            daily_rate_24h: dec("28"),
            daily_rate_8h: dec("14"),
            pct_breakfast: 20,
            pct_lunch: 40,
            pct_dinner: 40,
        }
    }

    fn make_trip(begin: &str, end: &str) -> Trip {
        Trip {
            travel_begin: make_utc(begin),
            travel_end: make_utc(end),
            destination: Destination {
                country: Country {
                    code: "DE".to_string(),
                    name: "Germany".to_string(),
                    rates: german_rates(),
                },
                city: None,
            },
            currency: Currency::default(),
        }
    }

    // Berlin is CET (+1) for all March dates used here.
    const TZ: Option<&str> = Some("Europe/Berlin");

    // ==========================================================================
    // TA-001: three-day trip expands to arrival/full/departure with totals
    // ==========================================================================
    #[test]
    fn test_ta_001_three_day_trip_total() {
        let trip = make_trip("2024-03-01T07:00:00Z", "2024-03-03T17:00:00Z");
        let allowance = calculate_trip_allowance(&trip, TZ, &[]).unwrap();

        assert_eq!(allowance.meal_days.len(), 3);
        assert_eq!(allowance.meal_days[0].day_kind, DayKind::Arrival);
        assert_eq!(allowance.meal_days[0].allowance, dec("14"));
        assert_eq!(allowance.meal_days[1].day_kind, DayKind::Full);
        assert_eq!(allowance.meal_days[1].allowance, dec("28"));
        assert_eq!(allowance.meal_days[2].day_kind, DayKind::Departure);
        assert_eq!(allowance.meal_days[2].allowance, dec("14"));
        assert_eq!(allowance.total, dec("56"));
    }

    // ==========================================================================
    // TA-002: meal selections reduce the matched day only
    // ==========================================================================
    #[test]
    fn test_ta_002_meal_selections_reduce_matched_day() {
        let trip = make_trip("2024-03-01T07:00:00Z", "2024-03-03T17:00:00Z");
        let selections = vec![MealSelection {
            date: make_date("2024-03-02"),
            breakfast_included: true,
            lunch_included: false,
            dinner_included: true,
        }];

        let allowance = calculate_trip_allowance(&trip, TZ, &selections).unwrap();

        // 14 + (28 - 5.6 - 11.2) + 14 = 39.2
        assert_eq!(allowance.meal_days[1].allowance, dec("11.20"));
        assert_eq!(allowance.total, dec("39.20"));
    }

    // ==========================================================================
    // TA-003: selections for dates outside the trip are dropped
    // ==========================================================================
    #[test]
    fn test_ta_003_selections_outside_trip_are_dropped() {
        let trip = make_trip("2024-03-01T07:00:00Z", "2024-03-03T17:00:00Z");
        let selections = vec![MealSelection {
            date: make_date("2024-03-10"),
            breakfast_included: true,
            lunch_included: true,
            dinner_included: true,
        }];

        let allowance = calculate_trip_allowance(&trip, TZ, &selections).unwrap();
        assert_eq!(allowance.total, dec("56"));
    }

    // ==========================================================================
    // TA-004: short same-day trip yields no days and a zero total
    // ==========================================================================
    #[test]
    fn test_ta_004_short_trip_zero_total() {
        // 08:00–14:00 Berlin local (6 hours)
        let trip = make_trip("2024-03-01T07:00:00Z", "2024-03-01T13:00:00Z");
        let allowance = calculate_trip_allowance(&trip, TZ, &[]).unwrap();

        assert!(allowance.meal_days.is_empty());
        assert_eq!(allowance.total, Decimal::ZERO);
    }

    // ==========================================================================
    // TA-005: regeneration is idempotent over identical inputs
    // ==========================================================================
    #[test]
    fn test_ta_005_idempotent_regeneration() {
        let trip = make_trip("2024-03-01T07:00:00Z", "2024-03-05T17:00:00Z");
        let first = calculate_trip_allowance(&trip, TZ, &[]).unwrap();
        let second = calculate_trip_allowance(&trip, TZ, &[]).unwrap();

        assert_eq!(first, second);
    }

    // ==========================================================================
    // TA-006: invalid range surfaces before any day is produced
    // ==========================================================================
    #[test]
    fn test_ta_006_invalid_range_fails() {
        let trip = make_trip("2024-03-05T07:00:00Z", "2024-03-01T17:00:00Z");
        let result = calculate_trip_allowance(&trip, TZ, &[]);
        assert!(matches!(
            result,
            Err(EngineError::InvalidTravelRange { .. })
        ));
    }

    // ==========================================================================
    // TA-007: missing timezone surfaces before any day is produced
    // ==========================================================================
    #[test]
    fn test_ta_007_missing_timezone_fails() {
        let trip = make_trip("2024-03-01T07:00:00Z", "2024-03-03T17:00:00Z");
        let result = calculate_trip_allowance(&trip, None, &[]);
        assert!(matches!(result, Err(EngineError::TimezoneNotConfigured)));
    }

    // ==========================================================================
    // TA-008: a zero-rated city shadows its country's rates
    // ==========================================================================
    #[test]
    fn test_ta_008_zero_rated_city_shadows_country() {
        let mut trip = make_trip("2024-03-01T07:00:00Z", "2024-03-03T17:00:00Z");
        trip.destination.city = Some(City {
            name: "Nowhere".to_string(),
            rates: RateTable::default(),
        });

        let allowance = calculate_trip_allowance(&trip, TZ, &[]).unwrap();
        assert_eq!(allowance.meal_days.len(), 3);
        assert_eq!(allowance.total, Decimal::ZERO);
    }

    // ==========================================================================
    // TA-009: timezone choice can change the day set
    // ==========================================================================
    #[test]
    fn test_ta_009_timezone_changes_day_set() {
        // 23:30 UTC on 03-01 to 08:00 UTC on 03-02: two calendar dates in
        // UTC, but in Berlin (+1) both instants fall on 03-02.
        let trip = make_trip("2024-03-01T23:30:00Z", "2024-03-02T08:00:00Z");

        let utc = calculate_trip_allowance(&trip, Some("UTC"), &[]).unwrap();
        assert_eq!(utc.meal_days.len(), 2);
        assert_eq!(utc.meal_days[0].day_kind, DayKind::Arrival);

        let berlin = calculate_trip_allowance(&trip, TZ, &[]).unwrap();
        // 00:30 to 09:00 local on 03-02: 8.5 hours, a long single day.
        assert_eq!(berlin.meal_days.len(), 1);
        assert_eq!(berlin.meal_days[0].day_kind, DayKind::SingleLong);
    }

    #[test]
    fn test_expand_trip_defaults_flags_to_false() {
        let trip = make_trip("2024-03-01T07:00:00Z", "2024-03-03T17:00:00Z");
        let days = expand_trip(&trip, TZ).unwrap();

        for day in &days {
            assert!(!day.breakfast_included);
            assert!(!day.lunch_included);
            assert!(!day.dinner_included);
        }
    }

    #[test]
    fn test_recompute_total_after_flag_change() {
        let trip = make_trip("2024-03-01T07:00:00Z", "2024-03-03T17:00:00Z");
        let mut days = expand_trip(&trip, TZ).unwrap();

        days[1].breakfast_included = true;
        let total = recompute_total(&trip, &mut days);

        // 14 + (28 - 5.6) + 14 = 50.4
        assert_eq!(days[1].allowance, dec("22.40"));
        assert_eq!(total, dec("50.40"));
    }
}
