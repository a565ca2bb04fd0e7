//! Request types for the per-diem allowance engine API.
//!
//! This module defines the JSON request structures for the `/calculate` and
//! `/submit` endpoints.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{Currency, Destination, ExpenseState, MealSelection, Trip};

/// Request body for the `/calculate` endpoint.
///
/// Contains the trip to expand plus the caller's configured timezone and
/// any user-entered meal selections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The caller's IANA timezone name. Absent means not configured, which
    /// aborts the calculation.
    #[serde(default)]
    pub timezone: Option<String>,
    /// The trip to calculate.
    pub trip: TripRequest,
    /// Meal selections keyed by date.
    #[serde(default)]
    pub meal_selections: Vec<MealSelectionRequest>,
}

/// Trip information in a request.
///
/// Timestamps are optional at the wire level; a per-diem calculation with
/// either one absent fails with `MissingTravelInfo`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripRequest {
    /// The travel begin timestamp, in UTC.
    #[serde(default)]
    pub travel_begin: Option<DateTime<Utc>>,
    /// The travel end timestamp, in UTC.
    #[serde(default)]
    pub travel_end: Option<DateTime<Utc>>,
    /// The destination country code (e.g., "DE").
    pub country: String,
    /// The destination city name, if any.
    #[serde(default)]
    pub city: Option<String>,
    /// The billing currency; defaults to EUR.
    #[serde(default)]
    pub currency: Option<CurrencyRequest>,
}

impl TripRequest {
    /// Builds the domain trip from this request and a resolved destination.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::MissingTravelInfo`] when either timestamp is
    /// absent.
    pub fn into_trip(self, destination: Destination) -> EngineResult<Trip> {
        let travel_begin = self
            .travel_begin
            .ok_or_else(|| EngineError::MissingTravelInfo {
                field: "travel_begin".to_string(),
            })?;
        let travel_end = self
            .travel_end
            .ok_or_else(|| EngineError::MissingTravelInfo {
                field: "travel_end".to_string(),
            })?;

        Ok(Trip {
            travel_begin,
            travel_end,
            destination,
            currency: self.currency.map(Into::into).unwrap_or_default(),
        })
    }
}

/// Currency information in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrencyRequest {
    /// ISO currency code (e.g., "EUR").
    pub code: String,
    /// The display symbol (e.g., "€").
    pub symbol: String,
}

impl From<CurrencyRequest> for Currency {
    fn from(req: CurrencyRequest) -> Self {
        Currency {
            code: req.code,
            symbol: req.symbol,
        }
    }
}

/// A meal selection for one date in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealSelectionRequest {
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

impl From<MealSelectionRequest> for MealSelection {
    fn from(req: MealSelectionRequest) -> Self {
        MealSelection {
            date: req.date,
            breakfast_included: req.breakfast_included,
            lunch_included: req.lunch_included,
            dinner_included: req.dinner_included,
        }
    }
}

/// Request body for the `/submit` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionRequest {
    /// The caller's IANA timezone name.
    #[serde(default)]
    pub timezone: Option<String>,
    /// The expense lines to submit as one report.
    pub expenses: Vec<ExpenseLineRequest>,
}

/// One expense line in a submission request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseLineRequest {
    /// Unique identifier for the expense line.
    pub id: String,
    /// The employee the expense belongs to.
    pub employee_id: String,
    /// The workflow state of the line.
    #[serde(default = "default_state")]
    pub state: ExpenseState,
    /// Whether this line uses the per-diem allowance scheme.
    #[serde(default)]
    pub is_per_diem: bool,
    /// The billed quantity.
    pub quantity: Decimal,
    /// The unit price.
    pub unit_amount: Decimal,
    /// The trip, for per-diem lines.
    #[serde(default)]
    pub trip: Option<TripRequest>,
    /// Meal selections for the trip's days.
    #[serde(default)]
    pub meal_selections: Vec<MealSelectionRequest>,
}

fn default_state() -> ExpenseState {
    ExpenseState::Draft
}
