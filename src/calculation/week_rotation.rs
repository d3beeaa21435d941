//! Day classification and Saturday rotation logic.
//!
//! Classifies a date by weekday kind and works out which rotation group is
//! active in the date's ISO week.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::models::RotationGroup;

/// Represents the kind of day for schedule resolution.
///
/// # Example
///
/// ```
/// use time_bank_engine::calculation::{day_kind, DayKind};
/// use chrono::NaiveDate;
///
/// // 2025-03-07 is a Friday
/// assert_eq!(day_kind(NaiveDate::from_ymd_opt(2025, 3, 7).unwrap()), DayKind::Friday);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayKind {
    /// Monday through Thursday share one expectation.
    MondayToThursday,
    /// Friday may be shorter than the rest of the week.
    Friday,
    /// Saturday is only worked by the active rotation group.
    Saturday,
    /// Sunday is never worked.
    Sunday,
}

impl std::fmt::Display for DayKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayKind::MondayToThursday => write!(f, "Monday-Thursday"),
            DayKind::Friday => write!(f, "Friday"),
            DayKind::Saturday => write!(f, "Saturday"),
            DayKind::Sunday => write!(f, "Sunday"),
        }
    }
}

/// Determines the day kind for a given date.
///
/// # Example
///
/// ```
/// use time_bank_engine::calculation::{day_kind, DayKind};
/// use chrono::NaiveDate;
///
/// // 2025-03-08 is a Saturday, 2025-03-09 a Sunday, 2025-03-03 a Monday
/// assert_eq!(day_kind(NaiveDate::from_ymd_opt(2025, 3, 8).unwrap()), DayKind::Saturday);
/// assert_eq!(day_kind(NaiveDate::from_ymd_opt(2025, 3, 9).unwrap()), DayKind::Sunday);
/// assert_eq!(day_kind(NaiveDate::from_ymd_opt(2025, 3, 3).unwrap()), DayKind::MondayToThursday);
/// ```
pub fn day_kind(date: NaiveDate) -> DayKind {
    match date.weekday() {
        Weekday::Mon | Weekday::Tue | Weekday::Wed | Weekday::Thu => DayKind::MondayToThursday,
        Weekday::Fri => DayKind::Friday,
        Weekday::Sat => DayKind::Saturday,
        Weekday::Sun => DayKind::Sunday,
    }
}

/// Difference between the ISO week number of `date` and that of `reference`.
///
/// Only the week numbers are compared, not the ISO years, so the offset
/// restarts every year. A date in an earlier week of its year gives a
/// negative offset.
///
/// # Example
///
/// ```
/// use time_bank_engine::calculation::iso_week_offset;
/// use chrono::NaiveDate;
///
/// let reference = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
/// assert_eq!(iso_week_offset(NaiveDate::from_ymd_opt(2024, 12, 30).unwrap(), reference), 0);
/// assert_eq!(iso_week_offset(NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(), reference), 9);
/// ```
pub fn iso_week_offset(date: NaiveDate, reference: NaiveDate) -> i64 {
    i64::from(date.iso_week().week()) - i64::from(reference.iso_week().week())
}

/// Returns the rotation group whose Saturday falls in the week of `date`.
///
/// Group A is active when the ISO week offset from the reference is even,
/// group B when it is odd.
///
/// # Example
///
/// ```
/// use time_bank_engine::calculation::active_group;
/// use time_bank_engine::models::RotationGroup;
/// use chrono::NaiveDate;
///
/// let reference = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
/// // ISO week 9 of 2025 is eight weeks after week 1
/// assert_eq!(active_group(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(), reference), RotationGroup::A);
/// // ISO week 10 is nine weeks after week 1
/// assert_eq!(active_group(NaiveDate::from_ymd_opt(2025, 3, 8).unwrap(), reference), RotationGroup::B);
/// ```
pub fn active_group(date: NaiveDate, reference: NaiveDate) -> RotationGroup {
    if iso_week_offset(date, reference).rem_euclid(2) == 0 {
        RotationGroup::A
    } else {
        RotationGroup::B
    }
}
