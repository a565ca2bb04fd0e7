//! Per-day allowance calculation.
//!
//! Computes the net allowance for one classified meal day: the gross day
//! rate selected by the day kind, minus a deduction for each meal that was
//! provided, floored at zero. Meal deductions are always derived from the
//! 24-hour rate and its percentages, even on days whose gross rate is the
//! 8-hour rate; the relationship is fixed, not scaled.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{DayKind, MealDay, RateTable};

/// The monetary deduction rates for the three meals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealDeductions {
    /// The breakfast deduction.
    pub breakfast: Decimal,
    /// The lunch deduction.
    pub lunch: Decimal,
    /// The dinner deduction.
    pub dinner: Decimal,
}

/// The result of one per-day allowance calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayAllowance {
    /// The gross day rate selected by the day kind.
    pub gross: Decimal,
    /// The sum of deductions for included meals.
    pub deducted: Decimal,
    /// The net allowance: gross minus deductions, floored at zero and
    /// rounded to two decimal places.
    pub amount: Decimal,
}

/// Returns the gross day rate for a day kind.
///
/// Arrival, departure, and long single days earn the 8-hour rate; full days
/// earn the 24-hour rate; short single days earn nothing.
pub fn gross_rate(kind: DayKind, rates: &RateTable) -> Decimal {
    match kind {
        DayKind::SingleLong | DayKind::Arrival | DayKind::Departure => rates.daily_rate_8h,
        DayKind::Full => rates.daily_rate_24h,
        DayKind::SingleShort => Decimal::ZERO,
    }
}

/// Computes the per-meal deduction rates from a rate table.
///
/// Each meal deduction is `daily_rate_24h × percentage / 100`, regardless of
/// which gross rate the day itself uses.
///
/// # Example
///
/// ```
/// use perdiem_engine::calculation::meal_deduction_rates;
/// use perdiem_engine::models::RateTable;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let rates = RateTable {
///     daily_rate_24h: Decimal::from(28),
///     daily_rate_8h: Decimal::from(14),
///     pct_breakfast: 20,
///     pct_lunch: 40,
///     pct_dinner: 40,
/// };
///
/// let deductions = meal_deduction_rates(&rates);
/// assert_eq!(deductions.breakfast, Decimal::from_str("5.6").unwrap());
/// assert_eq!(deductions.lunch, Decimal::from_str("11.2").unwrap());
/// ```
pub fn meal_deduction_rates(rates: &RateTable) -> MealDeductions {
    let hundred = Decimal::from(100);
    MealDeductions {
        breakfast: rates.daily_rate_24h * Decimal::from(rates.pct_breakfast) / hundred,
        lunch: rates.daily_rate_24h * Decimal::from(rates.pct_lunch) / hundred,
        dinner: rates.daily_rate_24h * Decimal::from(rates.pct_dinner) / hundred,
    }
}

/// Calculates the net allowance for one meal day.
///
/// # Arguments
///
/// * `day` - The classified day with its meal-inclusion flags
/// * `rates` - The resolved rate table for the trip destination
///
/// # Returns
///
/// The gross rate, total deductions, and the net amount. The net amount is
/// never negative and carries two decimal places, matching the billing
/// currency's display precision.
///
/// # Example
///
/// ```
/// use perdiem_engine::calculation::calculate_day_allowance;
/// use perdiem_engine::models::{DayKind, MealDay, RateTable};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let rates = RateTable {
///     daily_rate_24h: Decimal::from(28),
///     daily_rate_8h: Decimal::from(14),
///     pct_breakfast: 20,
///     pct_lunch: 40,
///     pct_dinner: 40,
/// };
///
/// let mut day = MealDay::new(NaiveDate::from_ymd_opt(2024, 3, 2).unwrap(), DayKind::Full);
/// day.breakfast_included = true;
/// day.dinner_included = true;
///
/// let result = calculate_day_allowance(&day, &rates);
/// // 28 - 5.6 - 11.2 = 11.2
/// assert_eq!(result.amount, Decimal::from_str("11.20").unwrap());
/// ```
pub fn calculate_day_allowance(day: &MealDay, rates: &RateTable) -> DayAllowance {
    let gross = gross_rate(day.day_kind, rates);
    let deductions = meal_deduction_rates(rates);

    let mut deducted = Decimal::ZERO;
    if day.breakfast_included {
        deducted += deductions.breakfast;
    }
    if day.lunch_included {
        deducted += deductions.lunch;
    }
    if day.dinner_included {
        deducted += deductions.dinner;
    }

    let net = gross - deducted;
    let amount = if net <= Decimal::ZERO {
        Decimal::ZERO
    } else {
        net.round_dp(2)
    };

    DayAllowance {
        gross,
        deducted,
        amount,
    }
}
