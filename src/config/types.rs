//! Configuration types for schedule resolution.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files. Every type has a
//! `Default` carrying the standard company schedule, so the engine works
//! without any configuration on disk.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Holiday, WorkDuration};

/// Expected hours for the days Monday to Friday of one week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayHours {
    /// Expected hours on Monday through Thursday.
    pub monday_to_thursday: Decimal,
    /// Expected hours on Friday.
    pub friday: Decimal,
}

impl DayHours {
    fn from_hours(monday_to_thursday: i64, friday: i64) -> Self {
        Self {
            monday_to_thursday: Decimal::from(monday_to_thursday),
            friday: Decimal::from(friday),
        }
    }
}

/// Weekday hours for one start time, split by whether the week has Saturday work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartHours {
    /// Hours in a week in which the employee also works Saturday.
    pub with_saturday: DayHours,
    /// Hours in a week without Saturday work.
    pub without_saturday: DayHours,
}

impl StartHours {
    /// Selects the table for a week with or without Saturday work.
    pub fn for_week(&self, works_saturday: bool) -> &DayHours {
        if works_saturday {
            &self.with_saturday
        } else {
            &self.without_saturday
        }
    }
}

/// The weekday expectation table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekdayHours {
    /// Employees starting at the regular hour.
    pub regular_start: StartHours,
    /// Employees flagged as starting late.
    pub late_start: StartHours,
}

impl WeekdayHours {
    /// Selects the table for an employee's start time.
    pub fn for_start(&self, starts_late: bool) -> &StartHours {
        if starts_late {
            &self.late_start
        } else {
            &self.regular_start
        }
    }
}

impl Default for WeekdayHours {
    fn default() -> Self {
        Self {
            regular_start: StartHours {
                with_saturday: DayHours::from_hours(8, 8),
                without_saturday: DayHours::from_hours(9, 8),
            },
            late_start: StartHours {
                with_saturday: DayHours::from_hours(7, 7),
                without_saturday: DayHours::from_hours(8, 7),
            },
        }
    }
}

/// Weekly schedule policy shared by all employees.
///
/// # Example
///
/// ```
/// use time_bank_engine::config::SchedulePolicy;
/// use time_bank_engine::models::WorkDuration;
///
/// let policy = SchedulePolicy::default();
/// assert_eq!(policy.saturday_duration(), WorkDuration::from_hours(4));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulePolicy {
    /// A date whose ISO week has rotation group A active.
    pub reference_date: NaiveDate,
    /// Expected hours on a rostered Saturday.
    pub saturday_hours: Decimal,
    /// Expected hours Monday to Friday.
    pub weekday_hours: WeekdayHours,
}

impl Default for SchedulePolicy {
    fn default() -> Self {
        Self {
            reference_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or_default(),
            saturday_hours: Decimal::from(4),
            weekday_hours: WeekdayHours::default(),
        }
    }
}

impl SchedulePolicy {
    /// Expected duration of a rostered Saturday.
    pub fn saturday_duration(&self) -> WorkDuration {
        WorkDuration::from_decimal_hours(self.saturday_hours)
    }

    /// Returns every configured hour value with a label, for validation.
    pub(crate) fn labelled_hours(&self) -> Vec<(&'static str, Decimal)> {
        let table = &self.weekday_hours;
        vec![
            ("saturday_hours", self.saturday_hours),
            (
                "weekday_hours.regular_start.with_saturday.monday_to_thursday",
                table.regular_start.with_saturday.monday_to_thursday,
            ),
            (
                "weekday_hours.regular_start.with_saturday.friday",
                table.regular_start.with_saturday.friday,
            ),
            (
                "weekday_hours.regular_start.without_saturday.monday_to_thursday",
                table.regular_start.without_saturday.monday_to_thursday,
            ),
            (
                "weekday_hours.regular_start.without_saturday.friday",
                table.regular_start.without_saturday.friday,
            ),
            (
                "weekday_hours.late_start.with_saturday.monday_to_thursday",
                table.late_start.with_saturday.monday_to_thursday,
            ),
            (
                "weekday_hours.late_start.with_saturday.friday",
                table.late_start.with_saturday.friday,
            ),
            (
                "weekday_hours.late_start.without_saturday.monday_to_thursday",
                table.late_start.without_saturday.monday_to_thursday,
            ),
            (
                "weekday_hours.late_start.without_saturday.friday",
                table.late_start.without_saturday.friday,
            ),
        ]
    }
}

/// Holidays configuration file structure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HolidaysConfig {
    /// Holidays applying to every employee.
    #[serde(default)]
    pub holidays: Vec<Holiday>,
}
