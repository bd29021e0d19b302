use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_COMMON_YEAR, DAYS_IN_LEAP_YEAR, DAYS_IN_MONTH, FEBRUARY,
    FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, GREGORIAN_YEAR_DAYS, LEAP_YEAR_CYCLE, MAX_MONTH,
    WEEKS_PER_YEAR,
};
use crate::CalendarError;
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, CalendarError> {
        let non_zero = NonZeroU8::new(value).ok_or(CalendarError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(CalendarError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Month {
    type Error = CalendarError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day value guaranteed to be valid for a given year and month
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating that it's non-zero and valid for the given year and month
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidMonth` for a bad month and
    /// `CalendarError::InvalidDay` if the value is 0 or past the end of the month.
    pub fn new(value: u8, year: i32, month: u8) -> Result<Self, CalendarError> {
        let month = Month::new(month)?;
        let invalid = || CalendarError::InvalidDay {
            month: month.get(),
            day: value,
            year,
        };

        let non_zero = NonZeroU8::new(value).ok_or_else(invalid)?;
        if value > days_in_month(year, month) {
            return Err(invalid());
        }

        Ok(Self(non_zero))
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Length of one "year" in Earth days, for the Gregorian calendar or any
/// orbiting body. Always positive and finite.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, Display, Into)]
#[serde(try_from = "f64", into = "f64")]
#[display(fmt = "{}", _0)]
pub struct YearLength(f64);

impl YearLength {
    /// The mean Gregorian calendar year (365.2425 days).
    pub const GREGORIAN: Self = Self(GREGORIAN_YEAR_DAYS);

    /// Creates a new year length in Earth days.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidYearLength` if `days` is not a positive, finite number.
    pub fn new(days: f64) -> Result<Self, CalendarError> {
        if !days.is_finite() || days <= 0.0 {
            return Err(CalendarError::InvalidYearLength(days));
        }
        Ok(Self(days))
    }

    /// For compile-time tables already known to be positive.
    pub(crate) const fn new_unchecked(days: f64) -> Self {
        Self(days)
    }

    /// Returns the length in Earth days
    #[inline]
    pub const fn get(self) -> f64 {
        self.0
    }

    /// Fractional age in these years after `elapsed_days` Earth days.
    #[allow(clippy::cast_precision_loss)]
    pub fn age(self, elapsed_days: i64) -> f64 {
        elapsed_days as f64 / self.0
    }

    /// Earth days in one local "week", the same fraction of this year as an
    /// Earth week is of the Gregorian year.
    pub fn week_length(self) -> f64 {
        self.0 / WEEKS_PER_YEAR
    }
}

impl TryFrom<f64> for YearLength {
    type Error = CalendarError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

// Helper functions

/// Proleptic Gregorian leap-year rule, defined for every integer year.
pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Number of days in `year` (365 or 366).
pub const fn days_in_year(year: i32) -> u16 {
    if is_leap_year(year) {
        DAYS_IN_LEAP_YEAR
    } else {
        DAYS_IN_COMMON_YEAR
    }
}

/// Number of days in `month` of `year`.
pub const fn days_in_month(year: i32, month: Month) -> u8 {
    month_length(year, month.get())
}

/// Unchecked form of [`days_in_month`] for month numbers already known to be valid.
pub(crate) const fn month_length(year: i32, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}
