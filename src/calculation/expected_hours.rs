//! Expected work duration per day.
//!
//! Resolves how long an employee is expected to work on a given date from the
//! weekly schedule policy, the employee's Saturday rotation group and
//! start-time flag, and the holiday calendar.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::SchedulePolicy;
use crate::models::{Employee, HolidayLookup, RotationGroup, ScheduleRule, WorkDuration};

use super::{DayKind, active_group, day_kind};

/// The result of resolving one day's expectation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpectedHours {
    /// The date that was resolved.
    pub date: NaiveDate,
    /// The kind of day.
    pub day_kind: DayKind,
    /// The rotation group whose Saturday falls in this date's week.
    pub active_group: RotationGroup,
    /// The rule that decided the expectation.
    pub rule: ScheduleRule,
    /// Expected work duration.
    pub duration: WorkDuration,
}

/// Resolves the expected duration for `employee` on `date`, with the rule
/// that produced it.
///
/// Resolution order:
/// 1. Sunday: nothing expected.
/// 2. Holiday: nothing expected, whatever the weekday or rotation.
/// 3. Saturday: the policy's Saturday hours if the employee's group is the
///    week's active group, otherwise nothing.
/// 4. Monday to Friday: looked up in the weekday table by start time and by
///    whether the employee works this week's Saturday.
///
/// # Example
///
/// ```
/// use time_bank_engine::calculation::resolve_expected_hours;
/// use time_bank_engine::config::SchedulePolicy;
/// use time_bank_engine::models::{Employee, NoHolidays, RotationGroup, ScheduleRule, WorkDuration};
/// use chrono::NaiveDate;
///
/// let employee = Employee::new("emp_001", "Ana", Some(RotationGroup::A), false).unwrap();
/// let saturday = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(); // group A week
///
/// let expected = resolve_expected_hours(&employee, saturday, &SchedulePolicy::default(), &NoHolidays);
/// assert_eq!(expected.rule, ScheduleRule::RotaSaturday);
/// assert_eq!(expected.duration, WorkDuration::from_hours(4));
/// ```
pub fn resolve_expected_hours<H>(
    employee: &Employee,
    date: NaiveDate,
    policy: &SchedulePolicy,
    holidays: &H,
) -> ExpectedHours
where
    H: HolidayLookup + ?Sized,
{
    let kind = day_kind(date);
    let active = active_group(date, policy.reference_date);
    let works_saturday = employee.works_saturday_in(active);

    let rule = if kind == DayKind::Sunday {
        ScheduleRule::Sunday
    } else if holidays.is_holiday(date) {
        ScheduleRule::Holiday
    } else {
        match (kind, works_saturday) {
            (DayKind::Saturday, true) => ScheduleRule::RotaSaturday,
            (DayKind::Saturday, false) => ScheduleRule::FreeSaturday,
            (_, true) => ScheduleRule::WeekdayWithSaturday,
            (_, false) => ScheduleRule::Weekday,
        }
    };

    let duration = match rule {
        ScheduleRule::Sunday | ScheduleRule::Holiday | ScheduleRule::FreeSaturday => {
            WorkDuration::zero()
        }
        ScheduleRule::RotaSaturday => policy.saturday_duration(),
        ScheduleRule::WeekdayWithSaturday | ScheduleRule::Weekday => {
            let hours = policy
                .weekday_hours
                .for_start(employee.starts_late)
                .for_week(works_saturday);
            let hours = if kind == DayKind::Friday {
                hours.friday
            } else {
                hours.monday_to_thursday
            };
            WorkDuration::from_decimal_hours(hours)
        }
    };

    ExpectedHours {
        date,
        day_kind: kind,
        active_group: active,
        rule,
        duration,
    }
}

/// Returns how long `employee` is expected to work on `date`.
///
/// # Example
///
/// ```
/// use time_bank_engine::calculation::expected_duration;
/// use time_bank_engine::config::SchedulePolicy;
/// use time_bank_engine::models::{Employee, NoHolidays, WorkDuration};
/// use chrono::NaiveDate;
///
/// let employee = Employee::new("emp_001", "Ana", None, false).unwrap();
/// let monday = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
///
/// assert_eq!(
///     expected_duration(&employee, monday, &SchedulePolicy::default(), &NoHolidays),
///     WorkDuration::from_hours(9)
/// );
/// ```
pub fn expected_duration<H>(
    employee: &Employee,
    date: NaiveDate,
    policy: &SchedulePolicy,
    holidays: &H,
) -> WorkDuration
where
    H: HolidayLookup + ?Sized,
{
    resolve_expected_hours(employee, date, policy, holidays).duration
}
