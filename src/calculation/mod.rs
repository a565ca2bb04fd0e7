//! Calculation logic for the per-diem allowance engine.
//!
//! This module contains the calculation core: timezone normalization of
//! trip timestamps, classification of the calendar days a trip covers,
//! destination rate resolution, per-day allowance calculation with meal
//! deductions, and aggregation of the per-day amounts into the trip total.

mod day_classifier;
mod meal_day_allowance;
mod rate_resolver;
mod time_normalizer;
mod trip_aggregator;

pub use day_classifier::{
    ClassifiedDay, SHORT_TRIP_THRESHOLD_SECONDS, classify_trip_days,
};
pub use meal_day_allowance::{
    DayAllowance, MealDeductions, calculate_day_allowance, gross_rate, meal_deduction_rates,
};
pub use rate_resolver::resolve_rate_table;
pub use time_normalizer::{normalize_trip_times, resolve_timezone, to_local};
pub use trip_aggregator::{
    TripAllowance, apply_meal_selections, calculate_trip_allowance, expand_trip, recompute_total,
};
