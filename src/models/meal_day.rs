//! Meal-day models.
//!
//! One [`MealDay`] is generated per calendar day touched by a trip. The set
//! is owned by its trip and regenerated as a whole whenever the travel dates
//! change.

use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The classification of one calendar day of a trip.
///
/// Determines which daily rate applies: full days earn the 24-hour rate,
/// arrival/departure days and long single-day trips earn the reduced 8-hour
/// rate, and short single-day trips earn nothing.
///
/// # Example
///
/// ```
/// use perdiem_engine::models::DayKind;
///
/// let kind = DayKind::Arrival;
/// assert_eq!(format!("{:?}", kind), "Arrival");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayKind {
    /// A single-day trip of 8 hours or less; earns no allowance.
    SingleShort,
    /// A single-day trip longer than 8 hours; earns the 8h rate.
    SingleLong,
    /// The first day of a multi-day trip; earns the 8h rate.
    Arrival,
    /// The last day of a multi-day trip; earns the 8h rate.
    Departure,
    /// A day entirely within a multi-day trip; earns the 24h rate.
    Full,
}

impl std::fmt::Display for DayKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayKind::SingleShort => write!(f, "Single (short)"),
            DayKind::SingleLong => write!(f, "Single (long)"),
            DayKind::Arrival => write!(f, "Arrival"),
            DayKind::Departure => write!(f, "Departure"),
            DayKind::Full => write!(f, "Full"),
        }
    }
}

/// One computed allowance day of a trip.
///
/// Meal-inclusion flags default to `false` on creation; the user marks meals
/// that were provided (by the customer, the hotel, ...) and each included
/// meal reduces the day's allowance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealDay {
    /// The calendar date of this day.
    pub date: NaiveDate,
    /// The day classification.
    pub day_kind: DayKind,
    /// Whether breakfast was provided on this day.
    #[serde(default)]
    pub breakfast_included: bool,
    /// Whether lunch was provided on this day.
    #[serde(default)]
    pub lunch_included: bool,
    /// Whether dinner was provided on this day.
    #[serde(default)]
    pub dinner_included: bool,
    /// The computed net allowance for this day.
    pub allowance: Decimal,
}

impl MealDay {
    /// Creates a meal day with default (no meals included) flags and a zero
    /// allowance, pending calculation.
    pub fn new(date: NaiveDate, day_kind: DayKind) -> Self {
        Self {
            date,
            day_kind,
            breakfast_included: false,
            lunch_included: false,
            dinner_included: false,
            allowance: Decimal::ZERO,
        }
    }

    /// Returns the day of the week for this meal day.
    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }
}

/// User-entered meal flags for one date of a trip.
///
/// Selections are re-applied onto a regenerated meal-day set by matching
/// dates; selections for dates the trip no longer covers are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealSelection {
    /// The date the selection applies to.
    pub date: NaiveDate,
    /// Whether breakfast was provided.
    #[serde(default)]
    pub breakfast_included: bool,
    /// Whether lunch was provided.
    #[serde(default)]
    pub lunch_included: bool,
    /// Whether dinner was provided.
    #[serde(default)]
    pub dinner_included: bool,
}
