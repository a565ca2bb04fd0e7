//! Expense line model and submission rules.
//!
//! An expense line is the record-management wrapper around a trip. Lines
//! flagged as per-diem get their pricing overridden by the computed trip
//! allowance; ordinary lines price as `unit_amount × quantity`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::Trip;

/// The workflow state of an expense line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseState {
    /// Not yet submitted; the only state a line may be submitted from.
    Draft,
    /// Submitted in an expense report.
    Reported,
    /// Approved by a manager.
    Approved,
    /// Paid out.
    Done,
    /// Rejected.
    Refused,
}

/// One expense line, optionally carrying a per-diem trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseLine {
    /// Unique identifier for the expense line.
    pub id: String,
    /// The employee the expense belongs to.
    pub employee_id: String,
    /// The workflow state of the line.
    pub state: ExpenseState,
    /// Whether this line uses the per-diem allowance scheme.
    #[serde(default)]
    pub is_per_diem: bool,
    /// The billed quantity.
    pub quantity: Decimal,
    /// The unit price.
    pub unit_amount: Decimal,
    /// The trip, when the allowance scheme applies.
    #[serde(default)]
    pub trip: Option<Trip>,
}

impl ExpenseLine {
    /// Validates that a per-diem line carries its travel information.
    ///
    /// Per-diem lines without a trip cannot be priced; creation is aborted
    /// with [`EngineError::MissingTravelInfo`].
    pub fn validate_travel_info(&self) -> EngineResult<()> {
        if self.is_per_diem && self.trip.is_none() {
            return Err(EngineError::MissingTravelInfo {
                field: "trip".to_string(),
            });
        }
        Ok(())
    }

    /// Computes the line total.
    ///
    /// For per-diem lines the computed trip allowance replaces both the unit
    /// amount and the total; ordinary lines price as `unit_amount × quantity`.
    pub fn line_total(&self, allowance: Option<Decimal>) -> Decimal {
        match (self.is_per_diem, allowance) {
            (true, Some(total)) => total,
            _ => self.unit_amount * self.quantity,
        }
    }
}

/// Validates a set of expense lines for submission as one report.
///
/// Fails with [`EngineError::DuplicateSubmission`] if any line has already
/// left the draft state, or if the lines belong to more than one employee.
/// No partial submission takes place on failure.
pub fn validate_submission(lines: &[ExpenseLine]) -> EngineResult<()> {
    if let Some(line) = lines.iter().find(|l| l.state != ExpenseState::Draft) {
        return Err(EngineError::DuplicateSubmission {
            message: format!("expense '{}' has already been reported", line.id),
        });
    }

    let mut employees: Vec<&str> = lines.iter().map(|l| l.employee_id.as_str()).collect();
    employees.sort_unstable();
    employees.dedup();
    if employees.len() > 1 {
        return Err(EngineError::DuplicateSubmission {
            message: "expenses for different employees cannot share one report".to_string(),
        });
    }

    Ok(())
}
