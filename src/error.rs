//! Error types for the per-diem allowance engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during allowance calculation.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the per-diem allowance engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use perdiem_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No rate data is configured for the requested country code.
    #[error("Country not found: {code}")]
    CountryNotFound {
        /// The country code that was not found.
        code: String,
    },

    /// No timezone is configured for the requesting user.
    ///
    /// The engine never assumes a default timezone; calculation cannot
    /// proceed without one.
    #[error("No timezone configured: please set a timezone in user settings")]
    TimezoneNotConfigured,

    /// The configured timezone name is not a valid IANA timezone.
    #[error("Invalid timezone: {name}")]
    InvalidTimezone {
        /// The timezone name that failed to resolve.
        name: String,
    },

    /// Travel end precedes travel begin.
    #[error("Invalid travel range: begin {begin} is after end {end}")]
    InvalidTravelRange {
        /// The local travel begin date.
        begin: NaiveDate,
        /// The local travel end date.
        end: NaiveDate,
    },

    /// A per-diem expense is missing its travel information.
    #[error("Missing travel information: {field}")]
    MissingTravelInfo {
        /// The absent field (e.g., "travel_begin").
        field: String,
    },

    /// An expense submission violated the submission rules.
    #[error("Duplicate submission: {message}")]
    DuplicateSubmission {
        /// A description of the violated rule.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
