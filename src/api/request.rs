//! Request types for the Time-Bank Engine API.
//!
//! Punch times arrive as form-style strings and employees carry their
//! rotation group as free text; both are parsed here into domain types.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{
    DateRange, Employee, Holiday, HolidayCalendar, Punch, RotationGroup, non_blank,
};

/// Employee information in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// Unique identifier for the employee.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Saturday rotation group: `"A"`, `"B"`, or blank/absent for none.
    #[serde(default)]
    pub rotation_group: Option<String>,
    /// Whether the employee starts at the later hour.
    #[serde(default)]
    pub starts_late: bool,
}

/// A punch as entered on a form: a date and `HH:MM` times.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PunchRequest {
    /// Punch ID; generated from the position in the list when absent.
    #[serde(default)]
    pub id: Option<String>,
    /// Owner of the punch; defaults to the request's employee when absent.
    #[serde(default)]
    pub employee_id: Option<String>,
    /// Entry date, `YYYY-MM-DD`.
    pub date: String,
    /// Entry time, `HH:MM`.
    pub entry: String,
    /// Exit time on the same date, `HH:MM`; blank or absent for an open punch.
    #[serde(default)]
    pub exit: Option<String>,
    /// Optional note.
    #[serde(default)]
    pub note: Option<String>,
}

/// A holiday supplied with a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HolidayRequest {
    /// The holiday date.
    pub date: NaiveDate,
    /// The holiday name.
    #[serde(default)]
    pub name: String,
}

/// Request body for `POST /expected`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpectedRequest {
    /// The employee.
    pub employee: EmployeeRequest,
    /// The day to resolve.
    pub date: NaiveDate,
    /// Extra holidays, on top of the configured calendar.
    #[serde(default)]
    pub holidays: Vec<HolidayRequest>,
}

/// Request body for `POST /balance`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceRequest {
    /// The employee.
    pub employee: EmployeeRequest,
    /// The employee's punches.
    #[serde(default)]
    pub punches: Vec<PunchRequest>,
    /// Extra holidays, on top of the configured calendar.
    #[serde(default)]
    pub holidays: Vec<HolidayRequest>,
    /// First day of the range (inclusive).
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// Last day of the range (inclusive).
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// When set and neither bound is given, restricts the summary to the
    /// recent history window ending on this day.
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
}

/// Request body for `POST /balance/team`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamBalanceRequest {
    /// The employees to report on.
    pub employees: Vec<EmployeeRequest>,
    /// Punches of all employees; each must name its `employee_id`.
    #[serde(default)]
    pub punches: Vec<PunchRequest>,
    /// Extra holidays, on top of the configured calendar.
    #[serde(default)]
    pub holidays: Vec<HolidayRequest>,
    /// First day of the range (inclusive).
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// Last day of the range (inclusive).
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

/// Request body for `POST /clock`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClockRequest {
    /// The employee clocking in or out.
    pub employee_id: String,
    /// When the clock was pressed.
    pub at: NaiveDateTime,
    /// The current punches, as returned by the previous clock call.
    #[serde(default)]
    pub punches: Vec<Punch>,
}

impl TryFrom<EmployeeRequest> for Employee {
    type Error = EngineError;

    fn try_from(req: EmployeeRequest) -> Result<Self, Self::Error> {
        let rotation_group = match req.rotation_group.as_deref() {
            Some(value) => RotationGroup::parse_optional(value)?,
            None => None,
        };
        Employee::new(req.id, req.name, rotation_group, req.starts_late)
    }
}

impl From<HolidayRequest> for Holiday {
    fn from(req: HolidayRequest) -> Self {
        Holiday {
            date: req.date,
            name: req.name,
        }
    }
}

impl PunchRequest {
    /// Parses the punch. `index` is its position in the request, used for
    /// generated IDs.
    pub fn into_punch(self, default_employee: Option<&str>, index: usize) -> EngineResult<Punch> {
        let id = non_blank(self.id.as_deref())
            .map(str::to_string)
            .unwrap_or_else(|| format!("punch_{}", index + 1));

        let employee_id = non_blank(self.employee_id.as_deref())
            .or(default_employee)
            .ok_or_else(|| EngineError::InvalidPunch {
                punch_id: id.clone(),
                message: "employee_id is required".to_string(),
            })?
            .to_string();

        Punch::from_form(
            id,
            employee_id,
            &self.date,
            &self.entry,
            self.exit.as_deref(),
            self.note.as_deref(),
        )
    }
}

/// Parses a list of form punches.
pub fn parse_punches(
    punches: Vec<PunchRequest>,
    default_employee: Option<&str>,
) -> EngineResult<Vec<Punch>> {
    punches
        .into_iter()
        .enumerate()
        .map(|(index, punch)| punch.into_punch(default_employee, index))
        .collect()
}

/// Builds the holiday calendar for a request.
///
/// Request holidays take precedence over configured ones on the same date;
/// a date repeated within the request is rejected.
pub fn holiday_calendar(
    holidays: Vec<HolidayRequest>,
    configured: &HolidayCalendar,
) -> EngineResult<HolidayCalendar> {
    let mut calendar = HolidayCalendar::from_holidays(holidays.into_iter().map(Holiday::from))?;
    calendar.merge_missing(configured);
    Ok(calendar)
}

impl BalanceRequest {
    /// The requested range. Missing bounds are open, unless `as_of` selects
    /// the recent history window.
    pub fn range(&self) -> EngineResult<DateRange> {
        match (self.start_date, self.end_date, self.as_of) {
            (None, None, Some(today)) => Ok(DateRange::recent_history(today)),
            (start, end, _) => DateRange::from_bounds(start, end),
        }
    }
}

impl TeamBalanceRequest {
    /// The requested range; missing bounds are open.
    pub fn range(&self) -> EngineResult<DateRange> {
        DateRange::from_bounds(self.start_date, self.end_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn punch_request(date: &str, entry: &str, exit: Option<&str>) -> PunchRequest {
        PunchRequest {
            id: None,
            employee_id: None,
            date: date.to_string(),
            entry: entry.to_string(),
            exit: exit.map(str::to_string),
            note: None,
        }
    }

    #[test]
    fn test_deserialize_balance_request() {
        let json = r#"{
            "employee": { "id": "emp_001", "name": "Ana", "rotation_group": "a" },
            "punches": [
                { "date": "2025-03-03", "entry": "08:00", "exit": "17:00" },
                { "date": "2025-03-04", "entry": "08:00" }
            ],
            "start_date": "2025-03-01"
        }"#;

        let request: BalanceRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.punches.len(), 2);
        assert!(request.holidays.is_empty());
        assert_eq!(request.start_date, Some(make_date("2025-03-01")));
        assert!(request.end_date.is_none());

        let employee = Employee::try_from(request.employee).unwrap();
        assert_eq!(employee.rotation_group, Some(RotationGroup::A));
        assert!(!employee.starts_late);
    }

    #[test]
    fn test_blank_rotation_group_means_none() {
        let req = EmployeeRequest {
            id: "emp_001".to_string(),
            name: "Ana".to_string(),
            rotation_group: Some(" ".to_string()),
            starts_late: true,
        };
        let employee = Employee::try_from(req).unwrap();
        assert_eq!(employee.rotation_group, None);
        assert!(employee.starts_late);
    }

    #[test]
    fn test_unknown_rotation_group_rejected() {
        let req = EmployeeRequest {
            id: "emp_001".to_string(),
            name: "Ana".to_string(),
            rotation_group: Some("C".to_string()),
            starts_late: false,
        };
        assert!(matches!(
            Employee::try_from(req),
            Err(EngineError::InvalidEmployee { .. })
        ));
    }

    #[test]
    fn test_punch_defaults_id_and_employee() {
        let punch = punch_request("2025-03-03", "08:00", Some("17:00"))
            .into_punch(Some("emp_001"), 2)
            .unwrap();
        assert_eq!(punch.id, "punch_3");
        assert_eq!(punch.employee_id, "emp_001");
        assert!(!punch.is_open());
    }

    #[test]
    fn test_punch_without_owner_rejected() {
        let result = punch_request("2025-03-03", "08:00", None).into_punch(None, 0);
        assert!(matches!(result, Err(EngineError::InvalidPunch { .. })));
    }

    #[test]
    fn test_malformed_time_rejected() {
        let result = punch_request("2025-03-03", "8h", None).into_punch(Some("emp_001"), 0);
        match result {
            Err(EngineError::InvalidInput { field, .. }) => assert_eq!(field, "entry"),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_request_holiday_wins_over_configured() {
        let configured = HolidayCalendar::from_holidays(vec![Holiday {
            date: make_date("2025-12-25"),
            name: "Natal".to_string(),
        }])
        .unwrap();
        let calendar = holiday_calendar(
            vec![
                HolidayRequest {
                    date: make_date("2025-12-25"),
                    name: "Christmas".to_string(),
                },
                HolidayRequest {
                    date: make_date("2025-12-24"),
                    name: "Eve".to_string(),
                },
            ],
            &configured,
        )
        .unwrap();

        assert_eq!(calendar.len(), 2);
        assert_eq!(
            calendar.get(make_date("2025-12-25")).map(|h| h.name.as_str()),
            Some("Christmas")
        );
    }

    #[test]
    fn test_duplicate_request_holiday_rejected() {
        let holiday = HolidayRequest {
            date: make_date("2025-12-25"),
            name: "Natal".to_string(),
        };
        let result = holiday_calendar(vec![holiday.clone(), holiday], &HolidayCalendar::new());
        assert!(matches!(result, Err(EngineError::DuplicateHoliday { .. })));
    }

    #[test]
    fn test_range_as_of_uses_recent_history() {
        let request = BalanceRequest {
            employee: EmployeeRequest {
                id: "emp_001".to_string(),
                name: "Ana".to_string(),
                rotation_group: None,
                starts_late: false,
            },
            punches: vec![],
            holidays: vec![],
            start_date: None,
            end_date: None,
            as_of: Some(make_date("2025-03-31")),
        };

        let range = request.range().unwrap();
        assert_eq!(range.start_date, make_date("2025-03-02"));
        assert_eq!(range.end_date, make_date("2025-03-31"));
    }

    #[test]
    fn test_inverted_range_rejected() {
        let request = TeamBalanceRequest {
            employees: vec![],
            punches: vec![],
            holidays: vec![],
            start_date: Some(make_date("2025-03-31")),
            end_date: Some(make_date("2025-03-01")),
        };
        assert!(matches!(
            request.range(),
            Err(EngineError::InvalidDateRange { .. })
        ));
    }
}
