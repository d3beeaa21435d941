//! Punch (time-clock record) model.
//!
//! A punch is created on clock-in with no exit, and closed once on clock-out.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::WorkDuration;
use super::parse::{non_blank, parse_local_datetime};

/// Format used for entry and exit times in formatted punch lines.
pub const PUNCH_TIME_FORMAT: &str = "%H:%M:%S";

/// Marker rendered in place of the exit time of an open punch.
pub const OPEN_MARKER: &str = "(Open)";

/// Lifecycle state of a punch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PunchState {
    /// Clocked in, no exit recorded yet.
    Open,
    /// Exit recorded; the punch no longer changes.
    Closed,
}

/// A single clock-in/clock-out pair for one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Punch {
    /// Unique identifier for the punch.
    pub id: String,
    /// The employee who punched.
    pub employee_id: String,
    /// When the employee clocked in.
    pub entry: NaiveDateTime,
    /// When the employee clocked out; `None` while the punch is open.
    #[serde(default)]
    pub exit: Option<NaiveDateTime>,
    /// Optional free-text note entered by an administrator.
    #[serde(default)]
    pub note: Option<String>,
}

impl Punch {
    /// Creates an open punch at `entry`.
    pub fn open(id: impl Into<String>, employee_id: impl Into<String>, entry: NaiveDateTime) -> Self {
        Self {
            id: id.into(),
            employee_id: employee_id.into(),
            entry,
            exit: None,
            note: None,
        }
    }

    /// Creates a punch, rejecting an exit that is not strictly after the entry.
    pub fn new(
        id: impl Into<String>,
        employee_id: impl Into<String>,
        entry: NaiveDateTime,
        exit: Option<NaiveDateTime>,
        note: Option<String>,
    ) -> EngineResult<Self> {
        let punch = Self {
            id: id.into(),
            employee_id: employee_id.into(),
            entry,
            exit,
            note,
        };
        punch.validate()?;
        Ok(punch)
    }

    /// Builds a punch from form-style strings: a `YYYY-MM-DD` date and
    /// `HH:MM` entry and optional exit times on that same date.
    ///
    /// A blank exit yields an open punch; a blank note is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use time_bank_engine::models::Punch;
    ///
    /// let punch = Punch::from_form("p_1", "emp_001", "2025-03-03", "08:00", Some("17:00"), None).unwrap();
    /// assert_eq!(punch.display_line(), "08:00:00 - 17:00:00");
    ///
    /// let open = Punch::from_form("p_2", "emp_001", "2025-03-03", "18:00", Some(""), None).unwrap();
    /// assert!(open.is_open());
    ///
    /// assert!(Punch::from_form("p_3", "emp_001", "2025-03-03", "17:00", Some("08:00"), None).is_err());
    /// ```
    pub fn from_form(
        id: impl Into<String>,
        employee_id: impl Into<String>,
        date: &str,
        entry: &str,
        exit: Option<&str>,
        note: Option<&str>,
    ) -> EngineResult<Self> {
        let entry = parse_local_datetime("entry", date, entry)?;
        let exit = non_blank(exit)
            .map(|time| parse_local_datetime("exit", date, time))
            .transpose()?;
        let note = non_blank(note).map(str::to_string);

        Self::new(id, employee_id, entry, exit, note)
    }

    /// Checks the invariants of a deserialized punch.
    pub fn validate(&self) -> EngineResult<()> {
        if self.employee_id.trim().is_empty() {
            return Err(EngineError::InvalidPunch {
                punch_id: self.id.clone(),
                message: "employee_id must not be blank".to_string(),
            });
        }
        if let Some(exit) = self.exit {
            if exit <= self.entry {
                return Err(EngineError::InvalidPunch {
                    punch_id: self.id.clone(),
                    message: format!("exit {} must be after entry {}", exit, self.entry),
                });
            }
        }
        Ok(())
    }

    /// Returns the lifecycle state of the punch.
    pub fn state(&self) -> PunchState {
        match self.exit {
            Some(_) => PunchState::Closed,
            None => PunchState::Open,
        }
    }

    /// Returns true while no exit has been recorded.
    pub fn is_open(&self) -> bool {
        self.exit.is_none()
    }

    /// Records the exit of an open punch.
    pub fn close(&mut self, at: NaiveDateTime) -> EngineResult<()> {
        if self.exit.is_some() {
            return Err(EngineError::InvalidPunch {
                punch_id: self.id.clone(),
                message: "punch is already closed".to_string(),
            });
        }
        if at <= self.entry {
            return Err(EngineError::InvalidPunch {
                punch_id: self.id.clone(),
                message: format!("exit {} must be after entry {}", at, self.entry),
            });
        }
        self.exit = Some(at);
        Ok(())
    }

    /// The calendar day the punch is booked against (the day of its entry).
    pub fn date(&self) -> NaiveDate {
        self.entry.date()
    }

    /// Worked time of the punch. Open punches count as zero.
    pub fn worked(&self) -> WorkDuration {
        match self.exit {
            Some(exit) => WorkDuration::between(self.entry, exit),
            None => WorkDuration::zero(),
        }
    }

    /// Formats the punch as `HH:MM:SS - HH:MM:SS`, or `HH:MM:SS - (Open)`.
    pub fn display_line(&self) -> String {
        let entry = self.entry.format(PUNCH_TIME_FORMAT);
        match self.exit {
            Some(exit) => format!("{} - {}", entry, exit.format(PUNCH_TIME_FORMAT)),
            None => format!("{} - {}", entry, OPEN_MARKER),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    #[test]
    fn test_nine_hour_punch_worked() {
        let punch = Punch::new(
            "p_001",
            "emp_001",
            make_datetime("2025-03-03", "08:00:00"),
            Some(make_datetime("2025-03-03", "17:00:00")),
            None,
        )
        .unwrap();

        assert_eq!(punch.worked(), WorkDuration::from_hours(9));
        assert_eq!(punch.state(), PunchState::Closed);
    }

    #[test]
    fn test_open_punch_contributes_zero() {
        let punch = Punch::open("p_002", "emp_001", make_datetime("2025-03-03", "08:00:00"));

        assert!(punch.is_open());
        assert_eq!(punch.state(), PunchState::Open);
        assert!(punch.worked().is_zero());
        assert_eq!(punch.display_line(), "08:00:00 - (Open)");
    }

    #[test]
    fn test_new_rejects_exit_equal_to_entry() {
        let at = make_datetime("2025-03-03", "08:00:00");
        let result = Punch::new("p_003", "emp_001", at, Some(at), None);
        match result {
            Err(EngineError::InvalidPunch { punch_id, .. }) => assert_eq!(punch_id, "p_003"),
            _ => panic!("Expected InvalidPunch error"),
        }
    }

    #[test]
    fn test_new_rejects_blank_employee() {
        let at = make_datetime("2025-03-03", "08:00:00");
        assert!(Punch::new("p_004", " ", at, None, None).is_err());
    }

    #[test]
    fn test_close_sets_exit_once() {
        let mut punch = Punch::open("p_005", "emp_001", make_datetime("2025-03-03", "08:00:00"));

        punch.close(make_datetime("2025-03-03", "12:30:00")).unwrap();
        assert_eq!(punch.worked(), WorkDuration::from_minutes(270));

        let again = punch.close(make_datetime("2025-03-03", "13:00:00"));
        assert!(again.is_err());
        assert_eq!(punch.exit, Some(make_datetime("2025-03-03", "12:30:00")));
    }

    #[test]
    fn test_close_rejects_time_before_entry() {
        let mut punch = Punch::open("p_006", "emp_001", make_datetime("2025-03-03", "08:00:00"));
        assert!(punch.close(make_datetime("2025-03-03", "07:59:00")).is_err());
        assert!(punch.is_open());
    }

    #[test]
    fn test_overnight_punch_belongs_to_entry_date() {
        let punch = Punch::new(
            "p_007",
            "emp_001",
            make_datetime("2025-03-03", "22:00:00"),
            Some(make_datetime("2025-03-04", "02:00:00")),
            None,
        )
        .unwrap();

        assert_eq!(punch.date(), NaiveDate::from_ymd_opt(2025, 3, 3).unwrap());
        assert_eq!(punch.worked(), WorkDuration::from_hours(4));
    }

    #[test]
    fn test_from_form_parses_and_keeps_note() {
        let punch = Punch::from_form(
            "p_008",
            "emp_001",
            "2025-03-03",
            "08:15",
            Some("12:00"),
            Some("manual adjustment"),
        )
        .unwrap();

        assert_eq!(punch.entry, make_datetime("2025-03-03", "08:15:00"));
        assert_eq!(punch.exit, Some(make_datetime("2025-03-03", "12:00:00")));
        assert_eq!(punch.note.as_deref(), Some("manual adjustment"));
    }

    #[test]
    fn test_from_form_rejects_malformed_exit() {
        let result = Punch::from_form("p_009", "emp_001", "2025-03-03", "08:00", Some("5pm"), None);
        match result {
            Err(EngineError::InvalidInput { field, value, .. }) => {
                assert_eq!(field, "exit");
                assert_eq!(value, "5pm");
            }
            _ => panic!("Expected InvalidInput error"),
        }
    }

    #[test]
    fn test_from_form_rejects_malformed_date() {
        let result = Punch::from_form("p_010", "emp_001", "03/03/2025", "08:00", None, None);
        assert!(matches!(result, Err(EngineError::InvalidInput { .. })));
    }

    #[test]
    fn test_punch_deserialization() {
        let json = r#"{
            "id": "p_011",
            "employee_id": "emp_001",
            "entry": "2025-03-03T08:00:00"
        }"#;

        let punch: Punch = serde_json::from_str(json).unwrap();
        assert!(punch.is_open());
        assert_eq!(punch.note, None);
    }
}
