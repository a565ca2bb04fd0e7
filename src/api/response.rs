//! Response types for the per-diem allowance engine API.
//!
//! This module defines the error response structures, the submission
//! response, and the error mapping for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::CountryNotFound { code } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "COUNTRY_NOT_FOUND",
                    format!("Country not found: {}", code),
                    "No rate data is configured for the requested country code",
                ),
            },
            EngineError::TimezoneNotConfigured => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "TIMEZONE_NOT_CONFIGURED",
                    "No timezone configured",
                    "Please set a timezone in user settings",
                ),
            },
            EngineError::InvalidTimezone { name } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_TIMEZONE",
                    format!("Invalid timezone: {}", name),
                    "The configured timezone is not a known IANA timezone",
                ),
            },
            EngineError::InvalidTravelRange { begin, end } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_TRAVEL_RANGE",
                    format!("Invalid travel range: begin {} is after end {}", begin, end),
                    "Travel end must not precede travel begin",
                ),
            },
            EngineError::MissingTravelInfo { field } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "MISSING_TRAVEL_INFO",
                    format!("Missing travel information: {}", field),
                    "Per-diem expenses require both travel timestamps",
                ),
            },
            EngineError::DuplicateSubmission { message } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::with_details(
                    "DUPLICATE_SUBMISSION",
                    "Duplicate submission",
                    message,
                ),
            },
        }
    }
}

/// One priced line in a submission response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmittedLine {
    /// The expense line identifier.
    pub id: String,
    /// The (possibly overridden) unit amount.
    pub unit_amount: Decimal,
    /// The line total.
    pub total_amount: Decimal,
    /// The rendered expense description, for per-diem lines.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Response body for the `/submit` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionResponse {
    /// The employee the report belongs to.
    pub employee_id: String,
    /// The priced expense lines.
    pub lines: Vec<SubmittedLine>,
    /// The report total: the sum of all line totals.
    pub report_total: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details")); // Should be skipped when None
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_timezone_error_maps_to_bad_request() {
        let api_error: ApiErrorResponse = EngineError::TimezoneNotConfigured.into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "TIMEZONE_NOT_CONFIGURED");
    }

    #[test]
    fn test_duplicate_submission_maps_to_conflict() {
        let engine_error = EngineError::DuplicateSubmission {
            message: "expense 'exp_001' has already been reported".to_string(),
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::CONFLICT);
        assert_eq!(api_error.error.code, "DUPLICATE_SUBMISSION");
    }

    #[test]
    fn test_config_error_maps_to_internal_error() {
        let engine_error = EngineError::ConfigNotFound {
            path: "/missing".to_string(),
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "CONFIG_ERROR");
    }

    #[test]
    fn test_submitted_line_skips_absent_description() {
        let line = SubmittedLine {
            id: "exp_001".to_string(),
            unit_amount: Decimal::from(50),
            total_amount: Decimal::from(50),
            description: None,
        };
        let json = serde_json::to_string(&line).unwrap();
        assert!(!json.contains("description"));
    }
}
