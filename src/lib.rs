//! Birthday arithmetic on the proleptic Gregorian calendar.
//!
//! Counts the whole days between a birth date and a reference "today",
//! turns that into fractional ages for any fixed year length (the calendar
//! year, a planet's orbit), and walks forward from today to the next whole
//! and half anniversary. The calendar arithmetic is done by hand, without a
//! date library, so that the rounding at anniversary boundaries is exactly
//! the floor/ceil policy documented on each function.
//!
//! ```
//! use planetary_age::{CalendarDate, YearLength, elapsed_days, next_anniversary};
//!
//! let birth: CalendarDate = "01/01/2000".parse()?;
//! let today: CalendarDate = "01/11/2024".parse()?;
//! let days = elapsed_days(birth, today);
//! assert_eq!(days, 8776);
//!
//! let mars = YearLength::new(686.98)?;
//! let next = next_anniversary(mars.age(days), mars, today)?;
//! assert!(next > today);
//! # Ok::<(), planetary_age::CalendarError>(())
//! ```

mod anniversary;
mod bodies;
mod calendar;
mod consts;
mod date;
mod drift;
mod prelude;
mod types;

pub use anniversary::{
    days_until_anniversary, next_anniversary, next_calendar_birthday, next_half_anniversary,
    AgeReport,
};
pub use bodies::{body_reports, solar_system, Body, BodyReport, EARTH, SOLAR_SYSTEM};
pub use calendar::{add_days, day_of_year, days_between, days_left, elapsed_days, end_of_month};
pub use consts::*;
pub use date::CalendarDate;
pub use drift::{sweep, DriftSample, DriftSummary, DEFAULT_DAYS_AHEAD, DEFAULT_ENTRIES};
pub use types::{days_in_month, days_in_year, is_leap_year, Day, Month, YearLength};

/// Error type for all fallible operations in this crate.
///
/// Every variant is a caller-input problem; nothing here is transient.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),
    #[error("Invalid year: {0} (must be {min} to {max})", min = MIN_YEAR, max = MAX_YEAR)]
    InvalidYear(i32),
    #[error("Invalid month: {0} (must be 1-{max})", max = MAX_MONTH)]
    InvalidMonth(u8),
    #[error("Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { month: u8, day: u8, year: i32 },
    #[error("Empty date string")]
    EmptyInput,
    /// Dates are only ever walked forward.
    #[error("Negative day offset: {0}")]
    NegativeOffset(i64),
    /// The walk would end after the last supported year.
    #[error("{offset} days after {start} is past year {max}", max = MAX_YEAR)]
    OffsetOutOfRange { start: CalendarDate, offset: i64 },
    #[error("Invalid year length: {0} (must be a positive number of days)")]
    InvalidYearLength(f64),
    #[error("Invalid age: {0} (must be finite)")]
    InvalidAge(f64),
}
