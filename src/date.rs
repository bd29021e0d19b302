use crate::consts::{DATE_SEPARATOR, MAX_YEAR, MIN_YEAR, MONTH_FIRST_SEPARATOR};
use crate::prelude::*;
use crate::types::{Day, Month};
use crate::CalendarError;
use std::str::FromStr;

/// A concrete day on the proleptic Gregorian calendar.
///
/// The day is always valid for its month and year; every constructor checks
/// it. Fields are ordered so the derived ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:02}/{:02}/{:04}", "month.get()", "day.get()", year)]
pub struct CalendarDate {
    year:  i32,
    month: Month,
    day:   Day,
}

impl CalendarDate {
    /// Creates a date from its month, day and year numbers.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidYear` outside `MIN_YEAR..=MAX_YEAR`, and
    /// `CalendarError::InvalidMonth` or `CalendarError::InvalidDay` when the
    /// components do not name a real day.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(CalendarError::InvalidYear(year));
        }
        let month_typed = Month::new(month)?;
        let day = Day::new(day, year, month)?;
        Ok(Self {
            year,
            month: month_typed,
            day,
        })
    }

    /// Returns the year
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12)
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the day of the month
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Returns the Month type
    pub const fn month_typed(&self) -> Month {
        self.month
    }

    /// Returns the Day type
    pub const fn day_typed(&self) -> Day {
        self.day
    }

    /// Components in the US order the date is written in: (month, day, year)
    pub const fn to_mdy(&self) -> (u8, u8, i32) {
        (self.month.get(), self.day.get(), self.year)
    }
}

impl TryFrom<(u8, u8, i32)> for CalendarDate {
    type Error = CalendarError;

    fn try_from((month, day, year): (u8, u8, i32)) -> Result<Self, Self::Error> {
        Self::new(year, month, day)
    }
}

impl FromStr for CalendarDate {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(CalendarError::EmptyInput);
        }

        let has_hyphen = trimmed.contains(DATE_SEPARATOR);
        let has_slash = trimmed.contains(MONTH_FIRST_SEPARATOR);

        if has_hyphen && has_slash {
            return Err(CalendarError::InvalidFormat(format!(
                "Mixed delimiters ({DATE_SEPARATOR} and {MONTH_FIRST_SEPARATOR})"
            )));
        }

        let (separator, month_first) = if has_slash {
            (MONTH_FIRST_SEPARATOR, true)
        } else if has_hyphen {
            (DATE_SEPARATOR, false)
        } else {
            return Err(CalendarError::InvalidFormat(format!(
                "Expected MM{MONTH_FIRST_SEPARATOR}DD{MONTH_FIRST_SEPARATOR}YYYY or \
                 YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD: {trimmed}"
            )));
        };

        let parts: Vec<&str> = trimmed.split(separator).map(str::trim).collect();
        let [first, second, third] = parts.as_slice() else {
            return Err(CalendarError::InvalidFormat(format!(
                "Expected 2 {separator} separators, found {}",
                parts.len() - 1
            )));
        };

        if month_first {
            Self::new(parse_year(third)?, parse_u8(first)?, parse_u8(second)?)
        } else {
            Self::new(parse_year(first)?, parse_u8(second)?, parse_u8(third)?)
        }
    }
}

fn parse_u8(s: &str) -> Result<u8, CalendarError> {
    s.parse::<u8>()
        .map_err(|_| CalendarError::InvalidFormat(s.to_owned()))
}

fn parse_year(s: &str) -> Result<i32, CalendarError> {
    s.parse::<i32>()
        .map_err(|_| CalendarError::InvalidFormat(s.to_owned()))
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for CalendarDate {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        use quickcheck::Arbitrary;

        let year = i32::arbitrary(g).rem_euclid(MAX_YEAR - MIN_YEAR + 1) + MIN_YEAR;
        let month = u8::arbitrary(g) % crate::consts::MAX_MONTH + 1;
        let day = u8::arbitrary(g) % crate::types::month_length(year, month) + 1;
        Self::new(year, month, day).unwrap()
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        use quickcheck::Arbitrary;

        Box::new(
            (self.year, self.month(), self.day())
                .shrink()
                .filter_map(|(year, month, day)| Self::new(year, month, day).ok()),
        )
    }
}
