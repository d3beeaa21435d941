//! Clock-in/clock-out toggling.
//!
//! A [`PunchLedger`] holds punches and enforces that each employee has at
//! most one open punch. Clocking toggles: it closes the open punch if there is
//! one, and opens a new punch otherwise.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{Punch, WorkDuration};

/// What a clock action did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ClockEvent {
    /// A new open punch was created.
    ClockedIn {
        /// ID of the new punch.
        punch_id: String,
        /// Entry time.
        at: NaiveDateTime,
    },
    /// The employee's open punch was closed.
    ClockedOut {
        /// ID of the closed punch.
        punch_id: String,
        /// Exit time.
        at: NaiveDateTime,
        /// Duration of the closed punch.
        worked: WorkDuration,
    },
}

impl ClockEvent {
    /// ID of the punch the event touched.
    pub fn punch_id(&self) -> &str {
        match self {
            ClockEvent::ClockedIn { punch_id, .. } | ClockEvent::ClockedOut { punch_id, .. } => {
                punch_id
            }
        }
    }
}

/// Whether an employee is currently clocked in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ClockStatus {
    /// No open punch.
    OffDuty,
    /// An open punch exists since the given entry time.
    Working {
        /// Entry time of the open punch.
        since: NaiveDateTime,
    },
}

/// An in-memory collection of punches with the one-open-punch rule enforced.
#[derive(Debug, Clone, Default)]
pub struct PunchLedger {
    punches: Vec<Punch>,
}

impl PunchLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a ledger from existing punches.
    ///
    /// # Errors
    ///
    /// - `InvalidPunch` if a punch is invalid or an ID repeats
    /// - `OpenPunchExists` if an employee has more than one open punch
    pub fn from_punches(punches: Vec<Punch>) -> EngineResult<Self> {
        let mut ledger = Self::new();
        for punch in punches {
            ledger.insert(punch)?;
        }
        Ok(ledger)
    }

    /// Adds a punch to the ledger.
    pub fn insert(&mut self, punch: Punch) -> EngineResult<()> {
        punch.validate()?;
        if self.get(&punch.id).is_some() {
            return Err(EngineError::InvalidPunch {
                punch_id: punch.id.clone(),
                message: "a punch with this ID already exists".to_string(),
            });
        }
        if punch.is_open() && self.open_punch(&punch.employee_id).is_some() {
            return Err(EngineError::OpenPunchExists {
                employee_id: punch.employee_id.clone(),
            });
        }
        self.punches.push(punch);
        Ok(())
    }

    /// Replaces the punch with the same ID.
    ///
    /// Used for administrator corrections. The replacement is validated and
    /// must not leave the employee with two open punches.
    pub fn update(&mut self, punch: Punch) -> EngineResult<()> {
        punch.validate()?;
        let index = self.index_of(&punch.id)?;
        if punch.is_open()
            && self
                .punches
                .iter()
                .any(|p| p.id != punch.id && p.employee_id == punch.employee_id && p.is_open())
        {
            return Err(EngineError::OpenPunchExists {
                employee_id: punch.employee_id.clone(),
            });
        }
        self.punches[index] = punch;
        Ok(())
    }

    /// Removes and returns the punch with `punch_id`.
    pub fn remove(&mut self, punch_id: &str) -> EngineResult<Punch> {
        let index = self.index_of(punch_id)?;
        Ok(self.punches.remove(index))
    }

    /// Returns the punch with `punch_id`.
    pub fn get(&self, punch_id: &str) -> Option<&Punch> {
        self.punches.iter().find(|p| p.id == punch_id)
    }

    /// Returns the employee's open punch, if any.
    pub fn open_punch(&self, employee_id: &str) -> Option<&Punch> {
        self.punches
            .iter()
            .find(|p| p.employee_id == employee_id && p.is_open())
    }

    /// Reports whether the employee is clocked in.
    pub fn status(&self, employee_id: &str) -> ClockStatus {
        match self.open_punch(employee_id) {
            Some(punch) => ClockStatus::Working { since: punch.entry },
            None => ClockStatus::OffDuty,
        }
    }

    /// Toggles the employee's clock at `at`.
    ///
    /// # Errors
    ///
    /// - `InvalidEmployee` if `employee_id` is blank
    /// - `InvalidPunch` if `at` is not after the open punch's entry
    ///
    /// # Example
    ///
    /// ```
    /// use time_bank_engine::calculation::{ClockEvent, PunchLedger};
    /// use chrono::NaiveDate;
    ///
    /// let day = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
    /// let mut ledger = PunchLedger::new();
    ///
    /// let event = ledger.clock("emp_001", day.and_hms_opt(8, 0, 0).unwrap()).unwrap();
    /// assert!(matches!(event, ClockEvent::ClockedIn { .. }));
    ///
    /// let event = ledger.clock("emp_001", day.and_hms_opt(17, 0, 0).unwrap()).unwrap();
    /// assert!(matches!(event, ClockEvent::ClockedOut { .. }));
    /// assert_eq!(ledger.punches()[0].display_line(), "08:00:00 - 17:00:00");
    /// ```
    pub fn clock(&mut self, employee_id: &str, at: NaiveDateTime) -> EngineResult<ClockEvent> {
        if employee_id.trim().is_empty() {
            return Err(EngineError::InvalidEmployee {
                field: "employee_id".to_string(),
                message: "must not be blank".to_string(),
            });
        }

        if let Some(punch) = self
            .punches
            .iter_mut()
            .find(|p| p.employee_id == employee_id && p.is_open())
        {
            punch.close(at)?;
            return Ok(ClockEvent::ClockedOut {
                punch_id: punch.id.clone(),
                at,
                worked: punch.worked(),
            });
        }

        let punch_id = Uuid::new_v4().to_string();
        self.punches.push(Punch::open(punch_id.clone(), employee_id, at));
        Ok(ClockEvent::ClockedIn { punch_id, at })
    }

    /// All punches, in insertion order.
    pub fn punches(&self) -> &[Punch] {
        &self.punches
    }

    /// The punches of one employee, in insertion order.
    pub fn for_employee<'a>(&'a self, employee_id: &'a str) -> impl Iterator<Item = &'a Punch> {
        self.punches
            .iter()
            .filter(move |p| p.employee_id == employee_id)
    }

    /// Consumes the ledger and returns its punches.
    pub fn into_punches(self) -> Vec<Punch> {
        self.punches
    }

    fn index_of(&self, punch_id: &str) -> EngineResult<usize> {
        self.punches
            .iter()
            .position(|p| p.id == punch_id)
            .ok_or_else(|| EngineError::PunchNotFound {
                punch_id: punch_id.to_string(),
            })
    }
}
