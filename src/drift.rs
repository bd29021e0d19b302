//! Leap-year drift of fixed-length-year birthdays.
//!
//! A calendar birthday repeats on the same month and day, but a year of
//! 365.2425 days does not line up with whole calendar days. Counting
//! whole days since birth and converting to fractional years, the time until
//! the next whole age wobbles around the true calendar distance depending on
//! how many leap days the life so far has picked up. [`sweep`] measures that
//! wobble for one birthday across many past birth years.

use crate::anniversary::days_until_anniversary;
use crate::calendar::{add_days, elapsed_days};
use crate::consts::MIN_YEAR;
use crate::date::CalendarDate;
use crate::types::YearLength;
use crate::CalendarError;
use serde::Serialize;
use tracing::{debug, info};

/// Birth years swept by default (one full 400-year Gregorian cycle).
pub const DEFAULT_ENTRIES: u32 = 400;

/// Default distance from today to the birthday under test.
pub const DEFAULT_DAYS_AHEAD: u32 = 10;

/// Days until the next whole age for one birth year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DriftSample {
    pub birth_year: i32,
    pub days_until: f64,
}

/// Result of a drift sweep.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DriftSummary {
    /// The calendar birthday under test (month and day are what matter).
    pub birthday:   CalendarDate,
    /// Calendar days from today to `birthday`.
    pub true_value: f64,
    /// One sample per birth year, newest first.
    pub samples:    Vec<DriftSample>,
}

impl DriftSummary {
    /// Mean days-until over every sample; `None` when there are none.
    #[allow(clippy::cast_precision_loss)]
    pub fn mean(&self) -> Option<f64> {
        if self.samples.is_empty() {
            return None;
        }
        let total: f64 = self.samples.iter().map(|s| s.days_until).sum();
        Some(total / self.samples.len() as f64)
    }

    /// Largest distance of any sample from the true value.
    pub fn max_deviation(&self) -> Option<f64> {
        self.samples
            .iter()
            .map(|s| (s.days_until - self.true_value).abs())
            .reduce(f64::max)
    }
}

/// Sweeps `entries` birth years ending at the birthday `days_ahead` days
/// after `today`, recording the un-floored days until each next whole age.
///
/// The sweep stops at `MIN_YEAR`. Birth years in which the birthday does
/// not exist (February 29 in a common year) or that lie after `today`'s
/// year are skipped. A birthday
/// still ahead in `today`'s own year counts, through the signed same-year
/// day count.
///
/// # Errors
/// Returns `CalendarError::NegativeOffset` for a negative `days_ahead` and
/// `CalendarError::OffsetOutOfRange` when the birthday is past `MAX_YEAR`.
#[tracing::instrument(level = "debug")]
pub fn sweep(
    today: CalendarDate,
    days_ahead: i64,
    entries: u32,
    year_length: YearLength,
) -> Result<DriftSummary, CalendarError> {
    let birthday = add_days(days_ahead, today)?;

    // Oldest birth year swept, clamped to the supported range
    let oldest = (i64::from(birthday.year()) - i64::from(entries) + 1).max(i64::from(MIN_YEAR));
    let oldest = i32::try_from(oldest).unwrap_or(MIN_YEAR);
    let mut samples = Vec::new();

    for birth_year in (oldest..=birthday.year()).rev() {
        if birth_year > today.year() {
            debug!(birth_year, "birth year after today, skipping");
            continue;
        }

        let birth = match CalendarDate::new(birth_year, birthday.month(), birthday.day()) {
            Ok(birth) => birth,
            Err(e) => {
                debug!(birth_year, error = %e, "birthday missing in this year, skipping");
                continue;
            }
        };

        let age = year_length.age(elapsed_days(birth, today));
        samples.push(DriftSample {
            birth_year,
            days_until: days_until_anniversary(age, year_length),
        });
    }

    #[allow(clippy::cast_precision_loss)]
    let summary = DriftSummary {
        birthday,
        true_value: days_ahead as f64,
        samples,
    };
    info!(
        samples = summary.samples.len(),
        mean = summary.mean(),
        "drift sweep finished"
    );
    Ok(summary)
}
