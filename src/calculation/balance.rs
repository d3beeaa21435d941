//! Work-balance aggregation.
//!
//! Groups an employee's punches by calendar day, sums the worked time of each
//! day, compares it with the resolved expectation, and accumulates the signed
//! balance over the whole range.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::config::SchedulePolicy;
use crate::models::{
    DailySummary, DateRange, Employee, EmployeeSummary, HolidayLookup, Punch, RangeSummary,
    WorkDuration,
};

use super::resolve_expected_hours;

/// Summarizes one employee's punches over `range`.
///
/// Punches of other employees, and punches whose entry date is outside the
/// range, are ignored. A punch belongs to the day of its entry even if it ends
/// after midnight. Open punches are listed with an `(Open)` marker and add no
/// worked time. Days are returned most recent first.
///
/// # Example
///
/// ```
/// use time_bank_engine::calculation::summarize;
/// use time_bank_engine::config::SchedulePolicy;
/// use time_bank_engine::models::{DateRange, Employee, NoHolidays, Punch, WorkDuration};
///
/// let employee = Employee::new("emp_001", "Ana", None, false).unwrap();
/// let punches = vec![
///     Punch::from_form("p_1", "emp_001", "2025-03-03", "08:00", Some("17:00"), None).unwrap(),
/// ];
///
/// let summary = summarize(
///     &employee,
///     &punches,
///     &DateRange::unbounded(),
///     &SchedulePolicy::default(),
///     &NoHolidays,
/// );
///
/// assert_eq!(summary.days.len(), 1);
/// assert_eq!(summary.days[0].worked, WorkDuration::from_hours(9));
/// assert_eq!(summary.days[0].balance, WorkDuration::zero());
/// ```
pub fn summarize<H>(
    employee: &Employee,
    punches: &[Punch],
    range: &DateRange,
    policy: &SchedulePolicy,
    holidays: &H,
) -> RangeSummary
where
    H: HolidayLookup + ?Sized,
{
    let mut by_day: BTreeMap<NaiveDate, Vec<&Punch>> = BTreeMap::new();
    for punch in punches
        .iter()
        .filter(|p| p.employee_id == employee.id && range.contains_date(p.date()))
    {
        by_day.entry(punch.date()).or_default().push(punch);
    }

    let days: Vec<DailySummary> = by_day
        .into_iter()
        .rev()
        .map(|(date, day_punches)| summarize_day(employee, date, day_punches, policy, holidays))
        .collect();

    let total_balance = days.iter().map(|d| d.balance).sum();

    RangeSummary {
        employee_id: employee.id.clone(),
        days,
        total_balance,
    }
}

/// Builds the summary of a single day from its punches.
fn summarize_day<H>(
    employee: &Employee,
    date: NaiveDate,
    mut punches: Vec<&Punch>,
    policy: &SchedulePolicy,
    holidays: &H,
) -> DailySummary
where
    H: HolidayLookup + ?Sized,
{
    punches.sort_by_key(|p| p.entry);

    let formatted_punches = punches
        .iter()
        .map(|p| p.display_line())
        .collect::<Vec<_>>()
        .join("\n");
    let worked: WorkDuration = punches.iter().map(|p| p.worked()).sum();
    let has_open_punch = punches.iter().any(|p| p.is_open());

    let expected = resolve_expected_hours(employee, date, policy, holidays);

    DailySummary {
        date,
        formatted_punches,
        worked,
        expected: expected.duration,
        balance: worked - expected.duration,
        rule: expected.rule,
        has_open_punch,
    }
}

/// Summarizes several employees at once, as in an administrator overview.
///
/// Employees without any punch in the range are left out. Rows are ordered by
/// employee name, then by ID.
pub fn summarize_team<H>(
    employees: &[Employee],
    punches: &[Punch],
    range: &DateRange,
    policy: &SchedulePolicy,
    holidays: &H,
) -> Vec<EmployeeSummary>
where
    H: HolidayLookup + ?Sized,
{
    let mut ordered: Vec<&Employee> = employees.iter().collect();
    ordered.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));

    ordered
        .into_iter()
        .map(|employee| EmployeeSummary {
            employee_id: employee.id.clone(),
            name: employee.name.clone(),
            summary: summarize(employee, punches, range, policy, holidays),
        })
        .filter(|row| !row.summary.days.is_empty())
        .collect()
}
