//! Balance summary models.
//!
//! This module contains the derived, never-persisted results of a balance
//! calculation: one [`DailySummary`] per worked day, the [`RangeSummary`] that
//! aggregates them, and the [`EmployeeSummary`] rows of a team report.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::WorkDuration;

/// The schedule rule that produced a day's expected duration.
///
/// # Example
///
/// ```
/// use time_bank_engine::models::ScheduleRule;
///
/// assert_eq!(ScheduleRule::RotaSaturday.to_string(), "rota_saturday");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleRule {
    /// Sundays are never worked.
    Sunday,
    /// The date is a registered holiday.
    Holiday,
    /// A Saturday the employee's rotation group works.
    RotaSaturday,
    /// A Saturday the employee is off.
    FreeSaturday,
    /// Monday to Friday in a week where the employee also works Saturday.
    WeekdayWithSaturday,
    /// Monday to Friday in a week without Saturday work.
    Weekday,
}

impl fmt::Display for ScheduleRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScheduleRule::Sunday => "sunday",
            ScheduleRule::Holiday => "holiday",
            ScheduleRule::RotaSaturday => "rota_saturday",
            ScheduleRule::FreeSaturday => "free_saturday",
            ScheduleRule::WeekdayWithSaturday => "weekday_with_saturday",
            ScheduleRule::Weekday => "weekday",
        };
        write!(f, "{}", name)
    }
}

/// Worked, expected and balance figures for one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySummary {
    /// The calendar day (the entry date of its punches).
    pub date: NaiveDate,
    /// One `HH:MM:SS - HH:MM:SS` (or `- (Open)`) line per punch, in entry
    /// order, joined with `\n`.
    pub formatted_punches: String,
    /// Sum of the closed punches of the day.
    pub worked: WorkDuration,
    /// What the schedule expected for the day.
    pub expected: WorkDuration,
    /// `worked - expected`; negative when the employee owes time.
    pub balance: WorkDuration,
    /// The rule the expectation came from.
    pub rule: ScheduleRule,
    /// Whether any punch of the day is still open.
    pub has_open_punch: bool,
}

impl DailySummary {
    /// Returns the punch lines as separate strings.
    pub fn punch_lines(&self) -> impl Iterator<Item = &str> {
        self.formatted_punches.lines()
    }
}

/// The balance of one employee over a range of days.
///
/// # Example
///
/// ```
/// use time_bank_engine::models::{RangeSummary, WorkDuration};
///
/// let summary = RangeSummary::empty("emp_001");
/// assert!(summary.days.is_empty());
/// assert_eq!(summary.total_balance, WorkDuration::zero());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeSummary {
    /// The employee the summary belongs to.
    pub employee_id: String,
    /// Days with at least one punch, most recent first.
    pub days: Vec<DailySummary>,
    /// Sum of all daily balances.
    pub total_balance: WorkDuration,
}

impl RangeSummary {
    /// A summary with no days and a zero balance.
    pub fn empty(employee_id: impl Into<String>) -> Self {
        Self {
            employee_id: employee_id.into(),
            days: Vec::new(),
            total_balance: WorkDuration::zero(),
        }
    }

    /// Sum of worked time across all days.
    pub fn total_worked(&self) -> WorkDuration {
        self.days.iter().map(|d| d.worked).sum()
    }

    /// Sum of expected time across all days.
    pub fn total_expected(&self) -> WorkDuration {
        self.days.iter().map(|d| d.expected).sum()
    }

    /// Returns the summary of `date`, if the employee punched that day.
    pub fn day(&self, date: NaiveDate) -> Option<&DailySummary> {
        self.days.iter().find(|d| d.date == date)
    }
}

/// One row of a team report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeSummary {
    /// The employee's ID.
    pub employee_id: String,
    /// The employee's display name.
    pub name: String,
    /// The employee's balance over the requested range.
    pub summary: RangeSummary,
}
