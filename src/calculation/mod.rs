//! Calculation logic for the Time-Bank Engine.
//!
//! This module contains the day classification and Saturday rotation rules,
//! the expected-hours resolver, the work-balance aggregator, and the clock
//! toggle that opens and closes punches.

mod balance;
mod clock;
mod expected_hours;
mod week_rotation;

pub use balance::{summarize, summarize_team};
pub use clock::{ClockEvent, ClockStatus, PunchLedger};
pub use expected_hours::{ExpectedHours, expected_duration, resolve_expected_hours};
pub use week_rotation::{DayKind, active_group, day_kind, iso_week_offset};
