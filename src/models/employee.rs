//! Employee model and related types.
//!
//! This module defines the Employee struct and the RotationGroup enum
//! describing which alternating Saturdays an employee works.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// One of the two alternating Saturday rotation groups.
///
/// Each ISO week has exactly one active group; employees in that group work
/// the week's Saturday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RotationGroup {
    /// Active on weeks with even distance from the reference week.
    A,
    /// Active on weeks with odd distance from the reference week.
    B,
}

impl RotationGroup {
    /// Returns the group active on the following week.
    pub fn other(self) -> Self {
        match self {
            RotationGroup::A => RotationGroup::B,
            RotationGroup::B => RotationGroup::A,
        }
    }

    /// Parses an optional group from form input; blank means no rotation.
    ///
    /// # Examples
    ///
    /// ```
    /// use time_bank_engine::models::RotationGroup;
    ///
    /// assert_eq!(RotationGroup::parse_optional("b").unwrap(), Some(RotationGroup::B));
    /// assert_eq!(RotationGroup::parse_optional("").unwrap(), None);
    /// assert!(RotationGroup::parse_optional("C").is_err());
    /// ```
    pub fn parse_optional(value: &str) -> EngineResult<Option<Self>> {
        if value.trim().is_empty() {
            return Ok(None);
        }
        value.parse().map(Some)
    }
}

impl fmt::Display for RotationGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RotationGroup::A => write!(f, "A"),
            RotationGroup::B => write!(f, "B"),
        }
    }
}

impl FromStr for RotationGroup {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(RotationGroup::A),
            "B" => Ok(RotationGroup::B),
            _ => Err(EngineError::InvalidEmployee {
                field: "rotation_group".to_string(),
                message: format!("'{}' is not a rotation group, expected A or B", s),
            }),
        }
    }
}

/// Represents an employee whose punches are being balanced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// Display name, used to order team reports.
    pub name: String,
    /// Saturday rotation group, or `None` if the employee never works Saturdays.
    #[serde(default)]
    pub rotation_group: Option<RotationGroup>,
    /// Whether the employee's shift begins at the later start hour.
    #[serde(default)]
    pub starts_late: bool,
}

impl Employee {
    /// Creates an employee, rejecting blank identifiers and names.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        rotation_group: Option<RotationGroup>,
        starts_late: bool,
    ) -> EngineResult<Self> {
        let employee = Self {
            id: id.into(),
            name: name.into(),
            rotation_group,
            starts_late,
        };
        employee.validate()?;
        Ok(employee)
    }

    /// Checks the required fields of a deserialized employee.
    pub fn validate(&self) -> EngineResult<()> {
        if self.id.trim().is_empty() {
            return Err(EngineError::InvalidEmployee {
                field: "id".to_string(),
                message: "must not be blank".to_string(),
            });
        }
        if self.name.trim().is_empty() {
            return Err(EngineError::InvalidEmployee {
                field: "name".to_string(),
                message: "must not be blank".to_string(),
            });
        }
        Ok(())
    }

    /// Returns true if the employee works the Saturday of a week whose active group is `active`.
    ///
    /// # Examples
    ///
    /// ```
    /// use time_bank_engine::models::{Employee, RotationGroup};
    ///
    /// let employee = Employee::new("emp_001", "Ana", Some(RotationGroup::A), false).unwrap();
    /// assert!(employee.works_saturday_in(RotationGroup::A));
    /// assert!(!employee.works_saturday_in(RotationGroup::B));
    /// ```
    pub fn works_saturday_in(&self, active: RotationGroup) -> bool {
        self.rotation_group == Some(active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_employee(rotation_group: Option<RotationGroup>) -> Employee {
        Employee {
            id: "emp_001".to_string(),
            name: "Ana Souza".to_string(),
            rotation_group,
            starts_late: false,
        }
    }

    #[test]
    fn test_deserialize_employee_with_group() {
        let json = r#"{
            "id": "emp_001",
            "name": "Ana Souza",
            "rotation_group": "A",
            "starts_late": true
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.id, "emp_001");
        assert_eq!(employee.rotation_group, Some(RotationGroup::A));
        assert!(employee.starts_late);
    }

    #[test]
    fn test_deserialize_employee_defaults() {
        let json = r#"{ "id": "emp_002", "name": "Bruno" }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.rotation_group, None);
        assert!(!employee.starts_late);
    }

    #[test]
    fn test_new_rejects_blank_name() {
        let result = Employee::new("emp_003", "  ", None, false);
        match result {
            Err(EngineError::InvalidEmployee { field, .. }) => assert_eq!(field, "name"),
            _ => panic!("Expected InvalidEmployee error"),
        }
    }

    #[test]
    fn test_new_rejects_blank_id() {
        assert!(Employee::new("", "Carla", None, false).is_err());
    }

    #[test]
    fn test_without_group_never_works_saturday() {
        let employee = create_test_employee(None);
        assert!(!employee.works_saturday_in(RotationGroup::A));
        assert!(!employee.works_saturday_in(RotationGroup::B));
    }

    #[test]
    fn test_group_b_works_only_b_saturdays() {
        let employee = create_test_employee(Some(RotationGroup::B));
        assert!(employee.works_saturday_in(RotationGroup::B));
        assert!(!employee.works_saturday_in(RotationGroup::A));
    }

    #[test]
    fn test_rotation_group_parsing_is_case_insensitive() {
        assert_eq!("a".parse::<RotationGroup>().unwrap(), RotationGroup::A);
        assert_eq!(" B ".parse::<RotationGroup>().unwrap(), RotationGroup::B);
        assert!("AB".parse::<RotationGroup>().is_err());
    }

    #[test]
    fn test_rotation_group_other() {
        assert_eq!(RotationGroup::A.other(), RotationGroup::B);
        assert_eq!(RotationGroup::B.other(), RotationGroup::A);
    }

    #[test]
    fn test_rotation_group_serialization() {
        assert_eq!(serde_json::to_string(&RotationGroup::A).unwrap(), "\"A\"");
        assert_eq!(
            serde_json::to_string(&create_test_employee(Some(RotationGroup::B))).unwrap(),
            r#"{"id":"emp_001","name":"Ana Souza","rotation_group":"B","starts_late":false}"#
        );
    }
}
