//! Trip allowance result models.
//!
//! This module contains the [`TripAllowanceResult`] type returned by the
//! calculation endpoint: one line per meal day plus the trip total, with
//! enough rate detail to render a human-readable expense description.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Currency, DayKind};

/// The destination of a trip, reduced to its display names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DestinationSummary {
    /// The destination country name.
    pub country: String,
    /// The destination city name, if a city rate table applied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}

/// One computed allowance line, covering a single calendar day of the trip.
///
/// Carries the gross day rate that applied and the per-meal deduction rates
/// (always derived from the 24-hour rate) so the caller can render the
/// breakdown without re-running the calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealDayLine {
    /// The calendar date of this line.
    pub date: NaiveDate,
    /// The day classification.
    pub day_kind: DayKind,
    /// Whether breakfast was provided on this day.
    pub breakfast_included: bool,
    /// Whether lunch was provided on this day.
    pub lunch_included: bool,
    /// Whether dinner was provided on this day.
    pub dinner_included: bool,
    /// The gross day rate before meal deductions.
    pub gross_rate: Decimal,
    /// The breakfast deduction rate.
    pub breakfast_rate: Decimal,
    /// The lunch deduction rate.
    pub lunch_rate: Decimal,
    /// The dinner deduction rate.
    pub dinner_rate: Decimal,
    /// The net allowance for this day.
    pub allowance: Decimal,
}

/// The complete result of a trip allowance calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripAllowanceResult {
    /// Unique identifier for this calculation run.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The engine version that produced this result.
    pub engine_version: String,
    /// The travel begin, in the caller's local time.
    pub travel_begin_local: NaiveDateTime,
    /// The travel end, in the caller's local time.
    pub travel_end_local: NaiveDateTime,
    /// The trip destination.
    pub destination: DestinationSummary,
    /// The billing currency.
    pub currency: Currency,
    /// One line per meal day, ordered by date.
    pub meal_days: Vec<MealDayLine>,
    /// The trip total: the sum of all per-day allowances.
    pub total: Decimal,
}

impl TripAllowanceResult {
    /// Renders the human-readable expense description for this result.
    ///
    /// Lists travel begin/end, the destination, and one block per meal day
    /// with the day rate and any meal deductions, each amount formatted in
    /// the billing currency.
    pub fn summary(&self) -> String {
        let mut text = String::new();
        text.push_str(&format!(
            "Travel Begin: {}\n",
            self.travel_begin_local.format("%Y-%m-%d %H:%M")
        ));
        text.push_str(&format!(
            "Travel End: {}\n",
            self.travel_end_local.format("%Y-%m-%d %H:%M")
        ));
        text.push_str(&format!("Destination: {}\n", self.destination_label()));

        for line in &self.meal_days {
            text.push_str(&format!(
                "\nExpense for {}: {}\n",
                line.date,
                self.currency.format(line.allowance)
            ));
            text.push_str(&format!(
                "  Day rate: {}\n",
                self.currency.format(line.gross_rate)
            ));
            if line.breakfast_included {
                text.push_str(&format!(
                    "  - Breakfast: {}\n",
                    self.currency.format(-line.breakfast_rate)
                ));
            }
            if line.lunch_included {
                text.push_str(&format!(
                    "  - Lunch: {}\n",
                    self.currency.format(-line.lunch_rate)
                ));
            }
            if line.dinner_included {
                text.push_str(&format!(
                    "  - Dinner: {}\n",
                    self.currency.format(-line.dinner_rate)
                ));
            }
        }

        text.push_str(&format!("\nTotal: {}\n", self.currency.format(self.total)));
        text
    }

    fn destination_label(&self) -> String {
        match &self.destination.city {
            Some(city) => format!("{}, {}", city, self.destination.country),
            None => self.destination.country.clone(),
        }
    }
}
