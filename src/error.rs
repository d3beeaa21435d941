//! Error types for the Time-Bank Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every condition rejected at the engine boundary. The schedule resolver
//! and the balance aggregator themselves never fail; everything here is raised
//! while parsing, validating, or loading configuration.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the Time-Bank Engine.
///
/// # Example
///
/// ```
/// use time_bank_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/schedule.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/schedule.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A raw input value could not be parsed.
    #[error("Invalid value '{value}' for '{field}': {message}")]
    InvalidInput {
        /// The input field being parsed.
        field: String,
        /// The raw value that was rejected.
        value: String,
        /// A description of the expected format.
        message: String,
    },

    /// A punch record was invalid or contained inconsistent data.
    #[error("Invalid punch '{punch_id}': {message}")]
    InvalidPunch {
        /// The ID of the invalid punch.
        punch_id: String,
        /// A description of what made the punch invalid.
        message: String,
    },

    /// An employee record was invalid or contained inconsistent data.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A date range ended before it started.
    #[error("Invalid date range: {start} is after {end}")]
    InvalidDateRange {
        /// The first day of the range.
        start: NaiveDate,
        /// The last day of the range.
        end: NaiveDate,
    },

    /// A holiday is already registered for the date.
    #[error("A holiday is already registered on {date}")]
    DuplicateHoliday {
        /// The conflicting date.
        date: NaiveDate,
    },

    /// The employee already has a punch without an exit.
    #[error("Employee '{employee_id}' already has an open punch")]
    OpenPunchExists {
        /// The employee holding the open punch.
        employee_id: String,
    },

    /// No punch exists with the given ID.
    #[error("Punch not found: {punch_id}")]
    PunchNotFound {
        /// The ID that was looked up.
        punch_id: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/file.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/file.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_input_displays_field_and_value() {
        let error = EngineError::InvalidInput {
            field: "entry".to_string(),
            value: "25:99".to_string(),
            message: "expected HH:MM".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid value '25:99' for 'entry': expected HH:MM"
        );
    }

    #[test]
    fn test_invalid_punch_displays_id_and_message() {
        let error = EngineError::InvalidPunch {
            punch_id: "p_001".to_string(),
            message: "exit must be after entry".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid punch 'p_001': exit must be after entry"
        );
    }

    #[test]
    fn test_invalid_date_range_displays_bounds() {
        let error = EngineError::InvalidDateRange {
            start: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            end: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid date range: 2025-03-10 is after 2025-03-01"
        );
    }

    #[test]
    fn test_duplicate_holiday_displays_date() {
        let error = EngineError::DuplicateHoliday {
            date: NaiveDate::from_ymd_opt(2025, 12, 25).unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "A holiday is already registered on 2025-12-25"
        );
    }

    #[test]
    fn test_open_punch_exists_displays_employee() {
        let error = EngineError::OpenPunchExists {
            employee_id: "emp_001".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Employee 'emp_001' already has an open punch"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_not_found() -> EngineResult<()> {
            Err(EngineError::PunchNotFound {
                punch_id: "p_404".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
