//! Core data models for the per-diem allowance engine.
//!
//! This module contains all the domain models used throughout the engine.

mod allowance_result;
mod destination;
mod expense;
mod meal_day;
mod trip;

pub use allowance_result::{DestinationSummary, MealDayLine, TripAllowanceResult};
pub use destination::{City, Country, Destination, RateTable};
pub use expense::{ExpenseLine, ExpenseState, validate_submission};
pub use meal_day::{DayKind, MealDay, MealSelection};
pub use trip::{Currency, Trip};
