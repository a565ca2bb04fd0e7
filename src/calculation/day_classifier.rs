//! Trip day classification.
//!
//! This module expands a normalized (local) begin/end pair into the ordered
//! sequence of calendar days the trip covers, each tagged with a
//! [`DayKind`]. Day classification drives the rate selection: arrival,
//! departure, and long single days earn the reduced 8-hour rate, full days
//! the 24-hour rate, and short single-day trips earn nothing at all.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::DayKind;

/// A single-day trip must exceed this elapsed duration (8 hours) to earn an
/// allowance.
pub const SHORT_TRIP_THRESHOLD_SECONDS: i64 = 28_800;

/// One classified calendar day of a trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedDay {
    /// The calendar date.
    pub date: NaiveDate,
    /// The day classification.
    pub kind: DayKind,
}

/// Classifies the calendar days covered by a trip.
///
/// Input datetimes must already be normalized to the caller's local
/// timezone. Days are produced in date order starting at the begin date,
/// one per day, with no gaps or duplicates.
///
/// # Behavior
///
/// - Begin date after end date fails with [`EngineError::InvalidTravelRange`].
/// - A single-day trip of 8 hours or less produces no days at all.
/// - A single-day trip longer than 8 hours produces one `single_long` day.
/// - A trip spanning exactly two calendar dates produces `arrival` and
///   `departure` days only.
/// - A longer trip produces `arrival`, one `full` day per intermediate
///   calendar day, and `departure`. When the intermediate count falls below
///   one the two-day arrival/departure set is still produced.
///
/// # Example
///
/// ```
/// use chrono::NaiveDateTime;
/// use perdiem_engine::calculation::classify_trip_days;
/// use perdiem_engine::models::DayKind;
///
/// let begin = NaiveDateTime::parse_from_str("2024-03-01 08:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let end = NaiveDateTime::parse_from_str("2024-03-03 18:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
///
/// let days = classify_trip_days(begin, end).unwrap();
/// assert_eq!(days.len(), 3);
/// assert_eq!(days[0].kind, DayKind::Arrival);
/// assert_eq!(days[1].kind, DayKind::Full);
/// assert_eq!(days[2].kind, DayKind::Departure);
/// ```
pub fn classify_trip_days(
    begin: NaiveDateTime,
    end: NaiveDateTime,
) -> EngineResult<Vec<ClassifiedDay>> {
    let begin_date = begin.date();
    let end_date = end.date();

    if begin_date > end_date {
        return Err(EngineError::InvalidTravelRange {
            begin: begin_date,
            end: end_date,
        });
    }

    if begin_date == end_date {
        let elapsed_seconds = (end - begin).num_seconds();
        if elapsed_seconds > SHORT_TRIP_THRESHOLD_SECONDS {
            return Ok(vec![ClassifiedDay {
                date: begin_date,
                kind: DayKind::SingleLong,
            }]);
        }
        // Short trip: no allowance days at all.
        return Ok(Vec::new());
    }

    let gap_days = (end_date - begin_date).num_days();

    if gap_days == 1 {
        return Ok(vec![
            ClassifiedDay {
                date: begin_date,
                kind: DayKind::Arrival,
            },
            ClassifiedDay {
                date: end_date,
                kind: DayKind::Departure,
            },
        ]);
    }

    let total_days = gap_days + 1;
    let middle_days = total_days - 2;

    // The source system emits the plain two-day set when no whole middle day
    // remains, even on this multi-day branch; preserved as observed.
    if middle_days < 1 {
        return Ok(vec![
            ClassifiedDay {
                date: begin_date,
                kind: DayKind::Arrival,
            },
            ClassifiedDay {
                date: end_date,
                kind: DayKind::Departure,
            },
        ]);
    }

    let mut days = Vec::with_capacity(total_days as usize);
    days.push(ClassifiedDay {
        date: begin_date,
        kind: DayKind::Arrival,
    });
    for offset in 1..=middle_days {
        days.push(ClassifiedDay {
            date: begin_date + Duration::days(offset),
            kind: DayKind::Full,
        });
    }
    days.push(ClassifiedDay {
        date: end_date,
        kind: DayKind::Departure,
    });

    Ok(days)
}
