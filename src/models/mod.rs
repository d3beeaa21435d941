//! Core data models for the Time-Bank Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod date_range;
mod duration;
mod employee;
mod holiday;
mod parse;
mod punch;
mod summary;

pub use date_range::{DateRange, RECENT_HISTORY_DAYS};
pub use duration::WorkDuration;
pub use employee::{Employee, RotationGroup};
pub use holiday::{Holiday, HolidayCalendar, HolidayLookup, NoHolidays};
pub(crate) use parse::non_blank;
pub use parse::{CLOCK_TIME_FORMAT, DATE_FORMAT, parse_clock_time, parse_date, parse_local_datetime};
pub use punch::{OPEN_MARKER, PUNCH_TIME_FORMAT, Punch, PunchState};
pub use summary::{DailySummary, EmployeeSummary, RangeSummary, ScheduleRule};
