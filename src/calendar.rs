//! Day counting on the proleptic Gregorian calendar.
//!
//! Everything here is plain integer arithmetic over month lengths and the
//! leap-year rule. The two directions are:
//!
//! * [`elapsed_days`] counts whole days from one date to another, and
//! * [`add_days`] walks forward from a date by a day offset.
//!
//! For any date `t` and offset `k >= 0`,
//! `elapsed_days(t, add_days(k, t)?) == k`.

use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_COMMON_YEAR, DAYS_IN_GREGORIAN_CYCLE, DECEMBER, FEBRUARY,
    GREGORIAN_CYCLE, JANUARY, LEAP_YEAR_CYCLE, MAX_YEAR,
};
use crate::date::CalendarDate;
use crate::types::{days_in_month, days_in_year, month_length};
use crate::CalendarError;
use tracing::trace;

/// 1-based ordinal of `date` within its year.
pub fn day_of_year(date: CalendarDate) -> u16 {
    let year = date.year();
    let before: u16 = (JANUARY..date.month())
        .map(|m| u16::from(month_length(year, m)))
        .sum();
    before + u16::from(date.day())
}

/// Days left in the year after `date`. Zero on December 31.
pub fn days_left(date: CalendarDate) -> u16 {
    days_in_year(date.year()) - day_of_year(date)
}

/// Sum of the lengths of every year strictly between `from` and `to`.
///
/// Zero when `to <= from + 1`.
pub fn days_between(from: i32, to: i32) -> i64 {
    let (from, to) = (i64::from(from), i64::from(to));
    if to <= from + 1 {
        return 0;
    }
    let last = to - 1;
    (last - from) * i64::from(DAYS_IN_COMMON_YEAR) + leap_years_through(last)
        - leap_years_through(from)
}

/// Leap years in `1..=year`, extended to every integer so that differences
/// count the leap years in any half-open span `(a, b]`.
const fn leap_years_through(year: i64) -> i64 {
    year.div_euclid(LEAP_YEAR_CYCLE as i64) - year.div_euclid(CENTURY_CYCLE as i64)
        + year.div_euclid(GREGORIAN_CYCLE as i64)
}

/// Whole days from `birth` to `today`.
///
/// Within a single year this is the raw difference of the two ordinals and
/// is negative when `birth` falls later in the year than `today`. Across
/// years it is the rest of the birth year, plus the days so far in `today`'s
/// year, plus every full year in between.
pub fn elapsed_days(birth: CalendarDate, today: CalendarDate) -> i64 {
    if birth.year() == today.year() {
        return i64::from(day_of_year(today)) - i64::from(day_of_year(birth));
    }

    i64::from(days_left(birth))
        + i64::from(day_of_year(today))
        + days_between(birth.year(), today.year())
}

/// The date `offset` days after `today`.
///
/// Whole years are stepped first, then whole months, then the remaining
/// days. The day number is carried relative to the first of the current
/// month, so a day that overhangs a shorter month (January 31 stepped into
/// February) is settled at the end.
///
/// # Errors
/// Returns `CalendarError::NegativeOffset` if `offset` is negative and
/// `CalendarError::OffsetOutOfRange` if the result would fall after
/// `MAX_YEAR`.
pub fn add_days(offset: i64, today: CalendarDate) -> Result<CalendarDate, CalendarError> {
    if offset < 0 {
        return Err(CalendarError::NegativeOffset(offset));
    }
    let out_of_range = || CalendarError::OffsetOutOfRange {
        start: today,
        offset,
    };

    let mut remaining = offset;
    let mut year = today.year();
    let mut month = today.month();
    let mut day = i64::from(today.day());

    // Any 400 consecutive year spans hold the same number of days
    let cycles = remaining / DAYS_IN_GREGORIAN_CYCLE;
    if cycles > 0 {
        year = i32::try_from(cycles)
            .ok()
            .and_then(|c| c.checked_mul(GREGORIAN_CYCLE))
            .and_then(|years| year.checked_add(years))
            .filter(|&y| y <= MAX_YEAR)
            .ok_or_else(out_of_range)?;
        remaining -= cycles * DAYS_IN_GREGORIAN_CYCLE;
    }

    let mut span = year_span(year, month);
    while remaining >= span {
        remaining -= span;
        year += 1;
        span = year_span(year, month);
    }

    let mut length = i64::from(month_length(year, month));
    while remaining >= length {
        remaining -= length;
        (year, month) = next_month(year, month);
        length = i64::from(month_length(year, month));
    }

    if remaining >= 1 {
        if day + remaining <= length {
            day += remaining;
        } else {
            remaining -= length;
            (year, month) = next_month(year, month);
            day += remaining;
        }
    }

    let mut length = i64::from(month_length(year, month));
    while day > length {
        trace!(year, month, day, "day overhangs month, rolling forward");
        day -= length;
        (year, month) = next_month(year, month);
        length = i64::from(month_length(year, month));
    }

    if year > MAX_YEAR {
        return Err(out_of_range());
    }

    // 1..=31 after settling
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let day = day as u8;
    CalendarDate::new(year, month, day)
}

/// Length of the year-long span that starts in `month` of `year`: it picks
/// up the next February 29 when one falls inside it.
fn year_span(year: i32, month: u8) -> i64 {
    let leap_year = if month <= FEBRUARY { year } else { year + 1 };
    i64::from(days_in_year(leap_year))
}

const fn next_month(year: i32, month: u8) -> (i32, u8) {
    if month == DECEMBER {
        (year + 1, JANUARY)
    } else {
        (year, month + 1)
    }
}

/// Last valid day of the month `date` falls in.
pub fn end_of_month(date: CalendarDate) -> u8 {
    days_in_month(date.year(), date.month_typed())
}
