//! Time-Bank Engine
//!
//! This crate resolves how many hours an employee is expected to work on a
//! given day (weekly schedule, alternating Saturday rotation, start-time
//! variant, holidays) and aggregates time-clock punches into a per-day and
//! total work balance ("banco de horas").

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
