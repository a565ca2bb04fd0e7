//! Timezone normalization for trip timestamps.
//!
//! Trip timestamps are stored in UTC; all day classification happens on the
//! caller's local calendar. This module resolves the caller's configured
//! IANA timezone and converts the raw UTC pair into local date/times.
//!
//! There is no default timezone: an absent timezone is a hard stop, surfaced
//! as [`EngineError::TimezoneNotConfigured`] before any computation.

use chrono::{DateTime, NaiveDateTime, Utc};
use chrono_tz::Tz;

use crate::error::{EngineError, EngineResult};

/// Resolves an optional timezone name into a [`Tz`].
///
/// # Arguments
///
/// * `name` - The caller's configured IANA timezone name, if any
///
/// # Errors
///
/// * [`EngineError::TimezoneNotConfigured`] if `name` is `None`
/// * [`EngineError::InvalidTimezone`] if the name is not a known IANA zone
///
/// # Example
///
/// ```
/// use perdiem_engine::calculation::resolve_timezone;
///
/// let tz = resolve_timezone(Some("Europe/Berlin")).unwrap();
/// assert_eq!(tz.to_string(), "Europe/Berlin");
///
/// assert!(resolve_timezone(None).is_err());
/// ```
pub fn resolve_timezone(name: Option<&str>) -> EngineResult<Tz> {
    let name = name.ok_or(EngineError::TimezoneNotConfigured)?;
    name.parse::<Tz>().map_err(|_| EngineError::InvalidTimezone {
        name: name.to_string(),
    })
}

/// Converts a UTC timestamp to a local date/time in the given timezone.
///
/// Pure function, no side effects.
pub fn to_local(utc: DateTime<Utc>, tz: Tz) -> NaiveDateTime {
    utc.with_timezone(&tz).naive_local()
}

/// Normalizes a trip's UTC begin/end pair into the caller's local times.
///
/// # Example
///
/// ```
/// use chrono::{DateTime, Utc};
/// use perdiem_engine::calculation::normalize_trip_times;
///
/// let begin: DateTime<Utc> = "2024-03-01T07:00:00Z".parse().unwrap();
/// let end: DateTime<Utc> = "2024-03-03T17:00:00Z".parse().unwrap();
///
/// // Berlin is UTC+1 in March (CET)
/// let (begin_local, end_local) =
///     normalize_trip_times(begin, end, Some("Europe/Berlin")).unwrap();
/// assert_eq!(begin_local.to_string(), "2024-03-01 08:00:00");
/// assert_eq!(end_local.to_string(), "2024-03-03 18:00:00");
/// ```
pub fn normalize_trip_times(
    begin: DateTime<Utc>,
    end: DateTime<Utc>,
    tz_name: Option<&str>,
) -> EngineResult<(NaiveDateTime, NaiveDateTime)> {
    let tz = resolve_timezone(tz_name)?;
    Ok((to_local(begin, tz), to_local(end, tz)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_utc(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    // ==========================================================================
    // TN-001: missing timezone is a hard stop
    // ==========================================================================
    #[test]
    fn test_tn_001_missing_timezone_fails() {
        let result = resolve_timezone(None);
        assert!(matches!(result, Err(EngineError::TimezoneNotConfigured)));
    }

    // ==========================================================================
    // TN-002: unknown timezone name fails
    // ==========================================================================
    #[test]
    fn test_tn_002_unknown_timezone_fails() {
        let result = resolve_timezone(Some("Not/A_Zone"));
        match result {
            Err(EngineError::InvalidTimezone { name }) => assert_eq!(name, "Not/A_Zone"),
            other => panic!("Expected InvalidTimezone, got {:?}", other),
        }
    }

    // ==========================================================================
    // TN-003: UTC to Berlin winter time (CET, +1)
    // ==========================================================================
    #[test]
    fn test_tn_003_utc_to_berlin_winter() {
        let tz = resolve_timezone(Some("Europe/Berlin")).unwrap();
        let local = to_local(make_utc("2024-03-01T07:00:00Z"), tz);
        assert_eq!(local.to_string(), "2024-03-01 08:00:00");
    }

    // ==========================================================================
    // TN-004: UTC to Berlin summer time (CEST, +2)
    // ==========================================================================
    #[test]
    fn test_tn_004_utc_to_berlin_summer() {
        let tz = resolve_timezone(Some("Europe/Berlin")).unwrap();
        let local = to_local(make_utc("2024-07-01T07:00:00Z"), tz);
        assert_eq!(local.to_string(), "2024-07-01 09:00:00");
    }

    // ==========================================================================
    // TN-005: conversion can shift the calendar date
    // ==========================================================================
    #[test]
    fn test_tn_005_conversion_shifts_date() {
        let tz = resolve_timezone(Some("Europe/Berlin")).unwrap();
        let local = to_local(make_utc("2024-03-01T23:30:00Z"), tz);
        assert_eq!(local.to_string(), "2024-03-02 00:30:00");
    }

    #[test]
    fn test_normalize_trip_times_pair() {
        let (begin, end) = normalize_trip_times(
            make_utc("2024-03-01T07:00:00Z"),
            make_utc("2024-03-03T17:00:00Z"),
            Some("Europe/Berlin"),
        )
        .unwrap();

        assert_eq!(begin.to_string(), "2024-03-01 08:00:00");
        assert_eq!(end.to_string(), "2024-03-03 18:00:00");
    }

    #[test]
    fn test_normalize_trip_times_without_timezone_fails() {
        let result = normalize_trip_times(
            make_utc("2024-03-01T07:00:00Z"),
            make_utc("2024-03-03T17:00:00Z"),
            None,
        );
        assert!(matches!(result, Err(EngineError::TimezoneNotConfigured)));
    }

    #[test]
    fn test_utc_passthrough() {
        let tz = resolve_timezone(Some("UTC")).unwrap();
        let local = to_local(make_utc("2024-03-01T07:00:00Z"), tz);
        assert_eq!(local.to_string(), "2024-03-01 07:00:00");
    }
}
