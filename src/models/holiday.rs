//! Holiday models.
//!
//! This module contains the [`Holiday`] record, the [`HolidayLookup`] trait the
//! schedule resolver consults, and [`HolidayCalendar`], which keeps at most one
//! holiday per date.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A calendar date on which nobody is expected to work.
///
/// # Example
///
/// ```
/// use time_bank_engine::models::Holiday;
/// use chrono::NaiveDate;
///
/// let holiday = Holiday {
///     date: NaiveDate::from_ymd_opt(2025, 4, 21).unwrap(),
///     name: "Tiradentes".to_string(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// The date of the holiday.
    pub date: NaiveDate,
    /// The name of the holiday.
    pub name: String,
}

/// Membership test for non-working dates.
///
/// The resolver only ever asks whether a date is a holiday, so anything able
/// to answer that (a calendar, a slice of records, a database-backed cache)
/// can be passed in.
pub trait HolidayLookup {
    /// Returns true if `date` is registered as a holiday.
    fn is_holiday(&self, date: NaiveDate) -> bool;
}

impl HolidayLookup for [Holiday] {
    fn is_holiday(&self, date: NaiveDate) -> bool {
        self.iter().any(|h| h.date == date)
    }
}

impl HolidayLookup for Vec<Holiday> {
    fn is_holiday(&self, date: NaiveDate) -> bool {
        self.as_slice().is_holiday(date)
    }
}

/// A lookup with no holidays at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHolidays;

impl HolidayLookup for NoHolidays {
    fn is_holiday(&self, _date: NaiveDate) -> bool {
        false
    }
}

/// Holidays indexed by date, at most one per date.
///
/// # Example
///
/// ```
/// use time_bank_engine::models::{Holiday, HolidayCalendar, HolidayLookup};
/// use chrono::NaiveDate;
///
/// let christmas = NaiveDate::from_ymd_opt(2025, 12, 25).unwrap();
/// let mut calendar = HolidayCalendar::new();
/// calendar.insert(Holiday { date: christmas, name: "Natal".to_string() }).unwrap();
///
/// assert!(calendar.is_holiday(christmas));
/// assert!(calendar.insert(Holiday { date: christmas, name: "Again".to_string() }).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidayCalendar {
    holidays: BTreeMap<NaiveDate, Holiday>,
}

impl HolidayCalendar {
    /// Creates an empty calendar.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a calendar, failing on the first repeated date.
    pub fn from_holidays<I>(holidays: I) -> EngineResult<Self>
    where
        I: IntoIterator<Item = Holiday>,
    {
        let mut calendar = Self::new();
        for holiday in holidays {
            calendar.insert(holiday)?;
        }
        Ok(calendar)
    }

    /// Registers a holiday. A date may only be registered once.
    pub fn insert(&mut self, holiday: Holiday) -> EngineResult<()> {
        if self.holidays.contains_key(&holiday.date) {
            return Err(EngineError::DuplicateHoliday { date: holiday.date });
        }
        self.holidays.insert(holiday.date, holiday);
        Ok(())
    }

    /// Adds every holiday of `other` whose date is not registered yet.
    pub fn merge_missing(&mut self, other: &HolidayCalendar) {
        for (date, holiday) in &other.holidays {
            self.holidays
                .entry(*date)
                .or_insert_with(|| holiday.clone());
        }
    }

    /// Removes and returns the holiday on `date`, if any.
    pub fn remove(&mut self, date: NaiveDate) -> Option<Holiday> {
        self.holidays.remove(&date)
    }

    /// Returns the holiday on `date`, if any.
    pub fn get(&self, date: NaiveDate) -> Option<&Holiday> {
        self.holidays.get(&date)
    }

    /// Iterates over holidays in ascending date order.
    pub fn iter(&self) -> impl Iterator<Item = &Holiday> {
        self.holidays.values()
    }

    /// Number of registered holidays.
    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    /// Returns true if no holiday is registered.
    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }
}

impl HolidayLookup for HolidayCalendar {
    fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.contains_key(&date)
    }
}
