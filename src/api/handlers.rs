//! HTTP request handlers for the per-diem allowance engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    calculate_trip_allowance, gross_rate, meal_deduction_rates, normalize_trip_times,
    resolve_rate_table,
};
use crate::error::EngineResult;
use crate::models::{
    DestinationSummary, ExpenseLine, MealDayLine, MealSelection, Trip, TripAllowanceResult,
    validate_submission,
};

use super::request::{CalculationRequest, ExpenseLineRequest, SubmissionRequest};
use super::response::{ApiError, ApiErrorResponse, SubmissionResponse, SubmittedLine};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/submit", post(submit_handler))
        .with_state(state)
}

/// Maps a JSON extraction rejection to an API error.
fn rejection_to_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            // Check if it's a missing field error
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

/// Handler for POST /calculate endpoint.
///
/// Accepts a trip calculation request and returns the expanded meal-day set
/// with the trip total.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = rejection_to_error(correlation_id, rejection);
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let start_time = Instant::now();
    match perform_calculation(&state, &request) {
        Ok(result) => {
            let duration = start_time.elapsed();
            info!(
                correlation_id = %correlation_id,
                destination = %result.destination.country,
                meal_days = result.meal_days.len(),
                total = %result.total,
                duration_us = duration.as_micros(),
                "Calculation completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(result),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Calculation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Performs the trip allowance calculation for one request.
fn perform_calculation(
    state: &AppState,
    request: &CalculationRequest,
) -> EngineResult<TripAllowanceResult> {
    let destination = state
        .config()
        .destination(&request.trip.country, request.trip.city.as_deref())?;
    let trip = request.trip.clone().into_trip(destination)?;

    let selections: Vec<MealSelection> = request
        .meal_selections
        .iter()
        .cloned()
        .map(Into::into)
        .collect();

    let timezone = request.timezone.as_deref();
    let allowance = calculate_trip_allowance(&trip, timezone, &selections)?;

    build_result(&trip, timezone, allowance)
}

/// Assembles the API result from a computed trip allowance.
fn build_result(
    trip: &Trip,
    timezone: Option<&str>,
    allowance: crate::calculation::TripAllowance,
) -> EngineResult<TripAllowanceResult> {
    let (begin_local, end_local) =
        normalize_trip_times(trip.travel_begin, trip.travel_end, timezone)?;

    let rates = resolve_rate_table(&trip.destination);
    let deductions = meal_deduction_rates(&rates);

    let meal_days = allowance
        .meal_days
        .iter()
        .map(|day| MealDayLine {
            date: day.date,
            day_kind: day.day_kind,
            breakfast_included: day.breakfast_included,
            lunch_included: day.lunch_included,
            dinner_included: day.dinner_included,
            gross_rate: gross_rate(day.day_kind, &rates),
            breakfast_rate: deductions.breakfast,
            lunch_rate: deductions.lunch,
            dinner_rate: deductions.dinner,
            allowance: day.allowance,
        })
        .collect();

    Ok(TripAllowanceResult {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        travel_begin_local: begin_local,
        travel_end_local: end_local,
        destination: DestinationSummary {
            country: trip.destination.country.name.clone(),
            city: trip.destination.city.as_ref().map(|c| c.name.clone()),
        },
        currency: trip.currency.clone(),
        meal_days,
        total: allowance.total,
    })
}

/// Handler for POST /submit endpoint.
///
/// Validates the submission rules, prices every line (overriding per-diem
/// lines with their computed allowance), and returns the priced report.
async fn submit_handler(
    State(state): State<AppState>,
    payload: Result<Json<SubmissionRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing submission request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = rejection_to_error(correlation_id, rejection);
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    match perform_submission(&state, &request) {
        Ok(response) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %response.employee_id,
                lines = response.lines.len(),
                report_total = %response.report_total,
                "Submission completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(response),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Submission failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Prices one submission request.
fn perform_submission(
    state: &AppState,
    request: &SubmissionRequest,
) -> EngineResult<SubmissionResponse> {
    let timezone = request.timezone.as_deref();

    // Build all domain lines first so validation sees the complete report.
    let mut lines: Vec<(ExpenseLine, Vec<MealSelection>)> = Vec::new();
    for expense in &request.expenses {
        lines.push((build_expense_line(state, expense)?, meal_selections(expense)));
    }

    let domain_lines: Vec<ExpenseLine> = lines.iter().map(|(l, _)| l.clone()).collect();
    for line in &domain_lines {
        line.validate_travel_info()?;
    }
    validate_submission(&domain_lines)?;

    let employee_id = domain_lines
        .first()
        .map(|l| l.employee_id.clone())
        .unwrap_or_default();

    let mut priced = Vec::with_capacity(lines.len());
    let mut report_total = Decimal::ZERO;

    for (line, selections) in &lines {
        let (total, unit_amount, description) = match (&line.trip, line.is_per_diem) {
            (Some(trip), true) => {
                let allowance = calculate_trip_allowance(trip, timezone, selections)?;
                let result = build_result(trip, timezone, allowance)?;
                (result.total, result.total, Some(result.summary()))
            }
            _ => (line.line_total(None), line.unit_amount, None),
        };

        report_total += total;
        priced.push(SubmittedLine {
            id: line.id.clone(),
            unit_amount,
            total_amount: total,
            description,
        });
    }

    Ok(SubmissionResponse {
        employee_id,
        lines: priced,
        report_total,
    })
}

/// Builds a domain expense line from its request form.
fn build_expense_line(state: &AppState, request: &ExpenseLineRequest) -> EngineResult<ExpenseLine> {
    let trip = match &request.trip {
        Some(trip_request) => {
            let destination = state
                .config()
                .destination(&trip_request.country, trip_request.city.as_deref())?;
            Some(trip_request.clone().into_trip(destination)?)
        }
        None => None,
    };

    Ok(ExpenseLine {
        id: request.id.clone(),
        employee_id: request.employee_id.clone(),
        state: request.state,
        is_per_diem: request.is_per_diem,
        quantity: request.quantity,
        unit_amount: request.unit_amount,
        trip,
    })
}

fn meal_selections(request: &ExpenseLineRequest) -> Vec<MealSelection> {
    request
        .meal_selections
        .iter()
        .cloned()
        .map(Into::into)
        .collect()
}
