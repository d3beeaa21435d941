//! Configuration loading and management for the Time-Bank Engine.
//!
//! This module loads the weekly schedule policy and the company holiday
//! calendar from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use time_bank_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Saturday hours: {}", config.policy().saturday_hours);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{DayHours, HolidaysConfig, SchedulePolicy, StartHours, WeekdayHours};
