//! HTTP API module for the per-diem allowance engine.
//!
//! This module provides the REST API endpoints for expanding trips into
//! meal-day allowances and for submitting priced expense reports.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, SubmissionRequest};
pub use response::{ApiError, SubmissionResponse};
pub use state::AppState;
