//! Signed work duration.
//!
//! [`WorkDuration`] wraps a chrono duration and carries the display contract
//! used everywhere a worked, expected, or balance figure leaves the engine:
//! an optional `-` followed by zero-padded `HH:MM:SS` of the absolute value.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub};
use std::str::FromStr;

use chrono::{Duration, NaiveDateTime};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::EngineError;

const SECONDS_PER_HOUR: i64 = 3600;

/// A signed amount of working time with second precision.
///
/// # Example
///
/// ```
/// use time_bank_engine::models::WorkDuration;
///
/// let balance = WorkDuration::from_minutes(-90);
/// assert_eq!(balance.to_string(), "-01:30:00");
/// assert_eq!(WorkDuration::zero().to_string(), "00:00:00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct WorkDuration(Duration);

impl WorkDuration {
    /// Returns a duration of zero length.
    pub fn zero() -> Self {
        Self(Duration::zero())
    }

    /// Creates a duration from whole hours.
    pub fn from_hours(hours: i64) -> Self {
        Self(Duration::hours(hours))
    }

    /// Creates a duration from whole minutes.
    pub fn from_minutes(minutes: i64) -> Self {
        Self(Duration::minutes(minutes))
    }

    /// Creates a duration from whole seconds.
    pub fn from_seconds(seconds: i64) -> Self {
        Self(Duration::seconds(seconds))
    }

    /// Creates a duration from decimal hours, truncated to the second.
    ///
    /// ```
    /// use time_bank_engine::models::WorkDuration;
    /// use rust_decimal::Decimal;
    ///
    /// let duration = WorkDuration::from_decimal_hours(Decimal::new(75, 1)); // 7.5
    /// assert_eq!(duration.to_string(), "07:30:00");
    /// ```
    pub fn from_decimal_hours(hours: Decimal) -> Self {
        let seconds = (hours * Decimal::from(SECONDS_PER_HOUR))
            .trunc()
            .to_i64()
            .unwrap_or_default();
        Self::from_seconds(seconds)
    }

    /// Returns the time elapsed from `start` to `end` (negative if `end` is earlier).
    pub fn between(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self(end - start)
    }

    /// Total number of whole seconds.
    pub fn num_seconds(&self) -> i64 {
        self.0.num_seconds()
    }

    /// Returns true if the duration is below zero.
    pub fn is_negative(&self) -> bool {
        self.0 < Duration::zero()
    }

    /// Returns true if the duration is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns the duration in hours, rounded to two decimal places.
    ///
    /// ```
    /// use time_bank_engine::models::WorkDuration;
    /// use rust_decimal::Decimal;
    ///
    /// assert_eq!(WorkDuration::from_minutes(-90).as_hours(), Decimal::new(-150, 2));
    /// ```
    pub fn as_hours(&self) -> Decimal {
        (Decimal::from(self.num_seconds()) / Decimal::from(SECONDS_PER_HOUR)).round_dp(2)
    }

    /// Returns the underlying chrono duration.
    pub fn as_duration(&self) -> Duration {
        self.0
    }
}

impl Default for WorkDuration {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<Duration> for WorkDuration {
    fn from(duration: Duration) -> Self {
        Self(duration)
    }
}

impl Add for WorkDuration {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for WorkDuration {
    fn add_assign(&mut self, rhs: Self) {
        self.0 = self.0 + rhs.0;
    }
}

impl Sub for WorkDuration {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Neg for WorkDuration {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Sum for WorkDuration {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, d| acc + d)
    }
}

impl<'a> Sum<&'a WorkDuration> for WorkDuration {
    fn sum<I: Iterator<Item = &'a WorkDuration>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl fmt::Display for WorkDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.num_seconds();
        let sign = if total < 0 { "-" } else { "" };
        let total = total.unsigned_abs();
        let hours = total / 3600;
        let minutes = (total % 3600) / 60;
        let seconds = total % 60;
        write!(f, "{sign}{hours:02}:{minutes:02}:{seconds:02}")
    }
}

impl FromStr for WorkDuration {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EngineError::InvalidInput {
            field: "duration".to_string(),
            value: s.to_string(),
            message: "expected [-]HH:MM:SS".to_string(),
        };

        let (negative, body) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };

        let parts: Vec<&str> = body.split(':').collect();
        let [hours, minutes, seconds] = parts.as_slice() else {
            return Err(invalid());
        };

        let hours: i64 = hours.parse().map_err(|_| invalid())?;
        let minutes: i64 = minutes.parse().map_err(|_| invalid())?;
        let seconds: i64 = seconds.parse().map_err(|_| invalid())?;
        if hours < 0 || !(0..60).contains(&minutes) || !(0..60).contains(&seconds) {
            return Err(invalid());
        }

        let total = hours * 3600 + minutes * 60 + seconds;
        Ok(Self::from_seconds(if negative { -total } else { total }))
    }
}

impl Serialize for WorkDuration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for WorkDuration {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
