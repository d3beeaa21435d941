//! Inclusive date range used to select the punches being summarized.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Number of days covered by the personal "recent history" view.
pub const RECENT_HISTORY_DAYS: i64 = 30;

/// An inclusive range of calendar days.
///
/// # Example
///
/// ```
/// use time_bank_engine::models::DateRange;
/// use chrono::NaiveDate;
///
/// let range = DateRange::new(
///     NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 3, 31).unwrap(),
/// )
/// .unwrap();
///
/// assert!(range.contains_date(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()));
/// assert!(range.contains_date(NaiveDate::from_ymd_opt(2025, 3, 31).unwrap()));
/// assert!(!range.contains_date(NaiveDate::from_ymd_opt(2025, 4, 1).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// The first day of the range (inclusive).
    pub start_date: NaiveDate,
    /// The last day of the range (inclusive).
    pub end_date: NaiveDate,
}

impl DateRange {
    /// Creates a range, rejecting a start after the end.
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> EngineResult<Self> {
        if start_date > end_date {
            return Err(EngineError::InvalidDateRange {
                start: start_date,
                end: end_date,
            });
        }
        Ok(Self {
            start_date,
            end_date,
        })
    }

    /// A range with no lower or upper bound in practice.
    pub fn unbounded() -> Self {
        Self {
            start_date: NaiveDate::MIN,
            end_date: NaiveDate::MAX,
        }
    }

    /// Builds a range from optional bounds; a missing bound is left open.
    pub fn from_bounds(start: Option<NaiveDate>, end: Option<NaiveDate>) -> EngineResult<Self> {
        Self::new(
            start.unwrap_or(NaiveDate::MIN),
            end.unwrap_or(NaiveDate::MAX),
        )
    }

    /// The `days` days ending on `today`, both ends inclusive. The start is
    /// clamped to the earliest representable date.
    ///
    /// ```
    /// use time_bank_engine::models::DateRange;
    /// use chrono::NaiveDate;
    ///
    /// let today = NaiveDate::from_ymd_opt(2025, 3, 31).unwrap();
    /// let range = DateRange::last_days(today, 30);
    /// assert_eq!(range.start_date, NaiveDate::from_ymd_opt(2025, 3, 2).unwrap());
    /// assert_eq!(range.end_date, today);
    /// ```
    pub fn last_days(today: NaiveDate, days: i64) -> Self {
        let span = Days::new(u64::try_from(days - 1).unwrap_or(0));
        Self {
            start_date: today.checked_sub_days(span).unwrap_or(NaiveDate::MIN),
            end_date: today,
        }
    }

    /// The personal history window ending on `today`.
    pub fn recent_history(today: NaiveDate) -> Self {
        Self::last_days(today, RECENT_HISTORY_DAYS)
    }

    /// Checks if a date falls within the range (inclusive on both ends).
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }
}
