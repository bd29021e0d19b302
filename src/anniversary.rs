use crate::calendar::{add_days, elapsed_days};
use crate::date::CalendarDate;
use crate::prelude::*;
use crate::types::YearLength;
use crate::CalendarError;
use serde::Serialize;

/// Date on which `age` (in years of `year_length`) next reaches a whole
/// number, counting from `today`.
///
/// The fractional day is dropped, so the projected date never lands after
/// the true instant. A whole-number age is already an anniversary and
/// projects `today` itself.
///
/// # Errors
/// Returns `CalendarError::InvalidAge` if `age` is not finite.
pub fn next_anniversary(
    age: f64,
    year_length: YearLength,
    today: CalendarDate,
) -> Result<CalendarDate, CalendarError> {
    project(age.ceil(), age, year_length, today)
}

/// Date on which `age` next reaches a half-integer, counting from `today`.
///
/// With a fractional part of one half or more the next half-integer is the
/// one after the coming whole number, so a tie at exactly `.5` skips ahead a
/// full year.
///
/// # Errors
/// Returns `CalendarError::InvalidAge` if `age` is not finite.
pub fn next_half_anniversary(
    age: f64,
    year_length: YearLength,
    today: CalendarDate,
) -> Result<CalendarDate, CalendarError> {
    let fraction = age.rem_euclid(1.0);
    let target = if fraction >= 0.5 {
        age.ceil() + 0.5
    } else {
        age.floor() + 0.5
    };
    project(target, age, year_length, today)
}

/// Un-floored number of Earth days until `age` reaches the next whole number.
pub fn days_until_anniversary(age: f64, year_length: YearLength) -> f64 {
    (age.ceil() - age) * year_length.get()
}

/// Year of the next calendar birthday on or after `today`.
///
/// Only month and day are compared, so a February 29 birthday still reports
/// the coming year even when that year has no February 29.
pub fn next_calendar_birthday(birth: CalendarDate, today: CalendarDate) -> i32 {
    if (birth.month(), birth.day()) >= (today.month(), today.day()) {
        today.year()
    } else {
        today.year() + 1
    }
}

fn project(
    target: f64,
    age: f64,
    year_length: YearLength,
    today: CalendarDate,
) -> Result<CalendarDate, CalendarError> {
    if !age.is_finite() {
        return Err(CalendarError::InvalidAge(age));
    }

    let offset = ((target - age) * year_length.get()).floor();
    #[allow(clippy::cast_precision_loss)]
    let limit = i64::MAX as f64;
    if offset >= limit {
        return Err(CalendarError::OffsetOutOfRange {
            start:  today,
            offset: i64::MAX,
        });
    }
    // non-negative and below i64::MAX here: target is never below age
    #[allow(clippy::cast_possible_truncation)]
    let offset = offset as i64;
    add_days(offset, today)
}

/// Age and projected anniversaries for one birth date and one year length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Display)]
#[display(
    fmt = "{:.4} years ({} days), next {}, half {}",
    age,
    elapsed_days,
    next_anniversary,
    next_half_anniversary
)]
pub struct AgeReport {
    pub elapsed_days:          i64,
    pub age:                   f64,
    pub next_anniversary:      CalendarDate,
    pub next_half_anniversary: CalendarDate,
}

impl AgeReport {
    /// Computes the report for `birth` as seen on `today`.
    ///
    /// # Errors
    /// Propagates any `CalendarError` from the projections.
    pub fn new(
        birth: CalendarDate,
        today: CalendarDate,
        year_length: YearLength,
    ) -> Result<Self, CalendarError> {
        let elapsed_days = elapsed_days(birth, today);
        let age = year_length.age(elapsed_days);
        Ok(Self {
            elapsed_days,
            age,
            next_anniversary: next_anniversary(age, year_length, today)?,
            next_half_anniversary: next_half_anniversary(age, year_length, today)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u8, day: u8) -> CalendarDate {
        CalendarDate::new(year, month, day).unwrap()
    }

    fn year_length(days: f64) -> YearLength {
        YearLength::new(days).unwrap()
    }

    #[test]
    fn test_next_anniversary_whole_age_is_today() {
        let today = date(2024, 1, 11);
        assert_eq!(
            next_anniversary(0.0, YearLength::GREGORIAN, today).unwrap(),
            today
        );
        assert_eq!(
            next_anniversary(3.0, year_length(686.98), today).unwrap(),
            today
        );
    }

    #[test]
    fn test_next_anniversary_floors_fractional_day() {
        let today = date(2024, 1, 11);
        // 1.5 days of a 3-day year left: floors to 1
        let got = next_anniversary(0.5, year_length(3.0), today).unwrap();
        assert_eq!(got, date(2024, 1, 12));

        // A sliver past a whole age leaves almost a full year
        let mars = year_length(686.98);
        let age = mars.age(1);
        let got = next_anniversary(age, mars, today).unwrap();
        assert_eq!(got, add_days(685, today).unwrap());
    }

    #[test]
    fn test_next_anniversary_negative_age() {
        // Birthday ten days ahead in the same year
        let today = date(2024, 1, 11);
        let age = YearLength::GREGORIAN.age(-10);
        let got = next_anniversary(age, YearLength::GREGORIAN, today).unwrap();
        assert_eq!(got, date(2024, 1, 21));
    }

    #[test]
    fn test_next_half_anniversary_tie_goes_up() {
        let today = date(2024, 1, 11);
        // target 1.5, not 0.5
        let got = next_half_anniversary(0.5, YearLength::GREGORIAN, today).unwrap();
        assert_eq!(got, add_days(365, today).unwrap());
        assert_eq!(got, date(2025, 1, 10));
    }

    #[test]
    fn test_next_half_anniversary_branches() {
        let today = date(2024, 1, 1);
        let year = year_length(100.0);

        // fraction below one half: floor(2.25) + 0.5 = 2.5
        let got = next_half_anniversary(2.25, year, today).unwrap();
        assert_eq!(got, add_days(25, today).unwrap());

        // fraction above one half: ceil(2.75) + 0.5 = 3.5
        let got = next_half_anniversary(2.75, year, today).unwrap();
        assert_eq!(got, add_days(75, today).unwrap());

        // whole age: 2.5
        let got = next_half_anniversary(2.0, year, today).unwrap();
        assert_eq!(got, add_days(50, today).unwrap());
    }

    #[test]
    fn test_next_half_anniversary_negative_age() {
        let today = date(2024, 1, 1);
        let year = year_length(100.0);
        // -0.3 has fraction 0.7, so the target is ceil(-0.3) + 0.5 = 0.5
        let got = next_half_anniversary(-0.3, year, today).unwrap();
        assert_eq!(got, add_days(80, today).unwrap());
    }

    #[test]
    fn test_projection_rejects_non_finite_age() {
        let today = date(2024, 1, 1);
        assert!(matches!(
            next_anniversary(f64::NAN, YearLength::GREGORIAN, today),
            Err(CalendarError::InvalidAge(_))
        ));
        assert!(matches!(
            next_half_anniversary(f64::INFINITY, YearLength::GREGORIAN, today),
            Err(CalendarError::InvalidAge(_))
        ));
    }

    #[test]
    fn test_projection_past_last_year() {
        let today = date(2024, 1, 11);
        for days in [1e300, f64::MAX, 1e8] {
            let year = year_length(days);
            assert!(
                matches!(
                    next_anniversary(0.5, year, today),
                    Err(CalendarError::OffsetOutOfRange { .. })
                ),
                "{days}"
            );
            assert!(
                matches!(
                    next_half_anniversary(0.25, year, today),
                    Err(CalendarError::OffsetOutOfRange { .. })
                ),
                "{days}"
            );
        }
    }

    #[test]
    fn test_days_until_anniversary() {
        let year = year_length(100.0);
        assert!((days_until_anniversary(2.25, year) - 75.0).abs() < 1e-9);
        assert!(days_until_anniversary(2.0, year).abs() < 1e-9);
        assert!((days_until_anniversary(-0.1, year) - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_next_calendar_birthday() {
        let today = date(2024, 6, 14);
        assert_eq!(next_calendar_birthday(date(1992, 6, 14), today), 2024);
        assert_eq!(next_calendar_birthday(date(1992, 6, 20), today), 2024);
        assert_eq!(next_calendar_birthday(date(1992, 9, 1), today), 2024);
        assert_eq!(next_calendar_birthday(date(1992, 6, 13), today), 2025);
        assert_eq!(next_calendar_birthday(date(1992, 1, 30), today), 2025);
        assert_eq!(next_calendar_birthday(date(1992, 2, 29), today), 2025);
    }

    #[test]
    fn test_age_report() {
        let report = AgeReport::new(date(2000, 1, 1), date(2024, 1, 11), YearLength::GREGORIAN).unwrap();
        assert_eq!(report.elapsed_days, 8776);
        assert!((report.age - 24.027_87).abs() < 1e-4);
        // 24.5 comes before 25
        assert!(report.next_half_anniversary > date(2024, 1, 11));
        assert!(report.next_half_anniversary < report.next_anniversary);
        // 355.06 days floor to 355, a day short of the calendar birthday
        assert_eq!(report.next_anniversary, date(2024, 12, 31));
    }
}
