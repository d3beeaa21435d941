//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the schedule
//! policy and the holiday calendar from YAML files.

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::HolidayCalendar;

use super::types::{HolidaysConfig, SchedulePolicy};

/// Upper bound for any configured daily expectation.
const MAX_DAILY_HOURS: i64 = 24;

/// Loads and provides access to the engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── schedule.yaml   # Reference date, Saturday hours, weekday table
/// └── holidays.yaml   # Optional list of company-wide holidays
/// ```
///
/// # Example
///
/// ```no_run
/// use time_bank_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Reference date: {}", loader.policy().reference_date);
/// println!("Holidays loaded: {}", loader.holidays().len());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    policy: SchedulePolicy,
    holidays: HolidayCalendar,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// `schedule.yaml` is required. A missing `holidays.yaml` means there are
    /// no configured holidays.
    ///
    /// # Errors
    ///
    /// - `ConfigNotFound` if `schedule.yaml` is missing
    /// - `ConfigParseError` if a file contains invalid YAML, an hour value is
    ///   out of range, or a holiday date repeats
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let schedule_path = path.join("schedule.yaml");
        let policy = Self::load_yaml::<SchedulePolicy>(&schedule_path)?;
        Self::validate_policy(&policy, &schedule_path)?;

        let holidays_path = path.join("holidays.yaml");
        let holidays_config = if holidays_path.exists() {
            Self::load_yaml::<HolidaysConfig>(&holidays_path)?
        } else {
            HolidaysConfig::default()
        };

        let holidays = HolidayCalendar::from_holidays(holidays_config.holidays).map_err(|e| {
            EngineError::ConfigParseError {
                path: holidays_path.display().to_string(),
                message: e.to_string(),
            }
        })?;

        Ok(Self { policy, holidays })
    }

    /// Builds a loader from already constructed parts.
    pub fn from_parts(policy: SchedulePolicy, holidays: HolidayCalendar) -> Self {
        Self { policy, holidays }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Rejects negative hours and days longer than a day.
    fn validate_policy(policy: &SchedulePolicy, path: &Path) -> EngineResult<()> {
        let max = Decimal::from(MAX_DAILY_HOURS);
        for (label, hours) in policy.labelled_hours() {
            if hours < Decimal::ZERO || hours > max {
                return Err(EngineError::ConfigParseError {
                    path: path.display().to_string(),
                    message: format!("{} must be between 0 and {}, got {}", label, max, hours),
                });
            }
        }
        Ok(())
    }

    /// Returns the schedule policy.
    pub fn policy(&self) -> &SchedulePolicy {
        &self.policy
    }

    /// Returns the configured holiday calendar.
    pub fn holidays(&self) -> &HolidayCalendar {
        &self.holidays
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::path::PathBuf;

    fn config_path() -> &'static str {
        "./config/default"
    }

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "time-bank-engine-{}-{}",
            name,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(*loader.policy(), SchedulePolicy::default());
    }

    #[test]
    fn test_default_holidays_loaded() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let christmas = NaiveDate::from_ymd_opt(2025, 12, 25).unwrap();
        assert_eq!(
            loader.holidays().get(christmas).map(|h| h.name.as_str()),
            Some("Natal")
        );
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("schedule.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_missing_holidays_file_means_no_holidays() {
        let dir = scratch_dir("no-holidays");
        fs::copy(
            Path::new(config_path()).join("schedule.yaml"),
            dir.join("schedule.yaml"),
        )
        .unwrap();

        let loader = ConfigLoader::load(&dir).unwrap();
        assert!(loader.holidays().is_empty());

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_invalid_yaml_returns_parse_error() {
        let dir = scratch_dir("bad-yaml");
        fs::write(dir.join("schedule.yaml"), "reference_date: [not a date").unwrap();

        let result = ConfigLoader::load(&dir);
        assert!(matches!(result, Err(EngineError::ConfigParseError { .. })));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_out_of_range_hours_rejected() {
        let dir = scratch_dir("bad-hours");
        let yaml = r#"
reference_date: 2025-01-01
saturday_hours: 30
weekday_hours:
  regular_start:
    with_saturday: { monday_to_thursday: 8, friday: 8 }
    without_saturday: { monday_to_thursday: 9, friday: 8 }
  late_start:
    with_saturday: { monday_to_thursday: 7, friday: 7 }
    without_saturday: { monday_to_thursday: 8, friday: 7 }
"#;
        fs::write(dir.join("schedule.yaml"), yaml).unwrap();

        match ConfigLoader::load(&dir) {
            Err(EngineError::ConfigParseError { message, .. }) => {
                assert!(message.contains("saturday_hours"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_duplicate_configured_holiday_rejected() {
        let dir = scratch_dir("dup-holiday");
        fs::copy(
            Path::new(config_path()).join("schedule.yaml"),
            dir.join("schedule.yaml"),
        )
        .unwrap();
        let yaml = r#"
holidays:
  - { date: 2025-12-25, name: Natal }
  - { date: 2025-12-25, name: Christmas }
"#;
        fs::write(dir.join("holidays.yaml"), yaml).unwrap();

        match ConfigLoader::load(&dir) {
            Err(EngineError::ConfigParseError { path, message }) => {
                assert!(path.contains("holidays.yaml"));
                assert!(message.contains("2025-12-25"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }

        fs::remove_dir_all(&dir).unwrap();
    }
}
