//! Parsing of raw date and time strings at the engine boundary.
//!
//! Everything that reaches the resolver or the aggregator has already been
//! through these functions, so the core never sees malformed timestamps.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{EngineError, EngineResult};

/// Date format accepted from forms and query strings.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Clock time format accepted for punch entry and exit.
pub const CLOCK_TIME_FORMAT: &str = "%H:%M";

/// Parses a `YYYY-MM-DD` date.
///
/// # Example
///
/// ```
/// use time_bank_engine::models::parse_date;
/// use chrono::NaiveDate;
///
/// assert_eq!(
///     parse_date("date", "2025-03-03").unwrap(),
///     NaiveDate::from_ymd_opt(2025, 3, 3).unwrap()
/// );
/// assert!(parse_date("date", "03/03/2025").is_err());
/// ```
pub fn parse_date(field: &str, value: &str) -> EngineResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| EngineError::InvalidInput {
        field: field.to_string(),
        value: value.to_string(),
        message: "expected a date formatted as YYYY-MM-DD".to_string(),
    })
}

/// Parses an `HH:MM` clock time.
pub fn parse_clock_time(field: &str, value: &str) -> EngineResult<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), CLOCK_TIME_FORMAT).map_err(|_| {
        EngineError::InvalidInput {
            field: field.to_string(),
            value: value.to_string(),
            message: "expected a time formatted as HH:MM".to_string(),
        }
    })
}

/// Combines a `YYYY-MM-DD` date and an `HH:MM` time into a local timestamp.
///
/// # Example
///
/// ```
/// use time_bank_engine::models::parse_local_datetime;
///
/// let entry = parse_local_datetime("entry", "2025-03-03", "08:00").unwrap();
/// assert_eq!(entry.to_string(), "2025-03-03 08:00:00");
/// ```
pub fn parse_local_datetime(field: &str, date: &str, time: &str) -> EngineResult<NaiveDateTime> {
    let date = parse_date("date", date)?;
    let time = parse_clock_time(field, time)?;
    Ok(date.and_time(time))
}

/// Returns `None` for a missing or blank optional form value.
pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
