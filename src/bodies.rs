//! Named year lengths and per-body age reports.
//!
//! Year lengths for bodies other than Earth are sidereal orbital periods in
//! Earth days (NSSDC planetary fact sheet). Earth uses the mean Gregorian
//! calendar year, since birthdays follow the calendar rather than the stars.

use crate::anniversary::{AgeReport, next_calendar_birthday};
use crate::date::CalendarDate;
use crate::types::YearLength;
use crate::CalendarError;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Name of the body whose "year" is the Gregorian calendar year.
pub const EARTH: &str = "Earth";

/// Mercury through Pluto, with Ceres between Mars and Jupiter.
pub const SOLAR_SYSTEM: [(&str, f64); 10] = [
    ("Mercury", 87.97),
    ("Venus", 224.70),
    (EARTH, 365.2425),
    ("Mars", 686.98),
    ("Ceres", 1680.82),
    ("Jupiter", 4332.59),
    ("Saturn", 10759.22),
    ("Uranus", 30685.4),
    ("Neptune", 60189.0),
    ("Pluto", 90560.0),
];

/// A named reference period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Body {
    pub name:          String,
    pub year_length:   YearLength,
    /// Birthdays on this body follow the calendar date rather than the
    /// projected anniversary.
    #[serde(default)]
    pub calendar_year: bool,
}

impl Body {
    /// Creates a body, validating the year length.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidYearLength` for a non-positive or non-finite length.
    pub fn new(name: impl Into<String>, year_length: f64) -> Result<Self, CalendarError> {
        Ok(Self {
            name:          name.into(),
            year_length:   YearLength::new(year_length)?,
            calendar_year: false,
        })
    }

    /// Whether this body's year is the Gregorian calendar year.
    pub const fn is_calendar_year(&self) -> bool {
        self.calendar_year
    }
}

/// The built-in solar system table, in orbital order.
pub fn solar_system() -> Vec<Body> {
    SOLAR_SYSTEM
        .iter()
        .map(|&(name, days)| Body {
            name:          name.to_owned(),
            year_length:   YearLength::new_unchecked(days),
            calendar_year: name == EARTH,
        })
        .collect()
}

/// One row of the ages table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BodyReport {
    pub name:        String,
    pub year_length: YearLength,
    pub ages:        AgeReport,
    /// Earth days in one local "birthweek".
    pub week_length: f64,
    /// For the calendar year, the year of the next calendar-day birthday.
    pub calendar_birthday_year: Option<i32>,
}

/// Ages and anniversaries for `birth` on every body in `bodies`, in order.
///
/// # Errors
/// Propagates the first `CalendarError` from any projection.
pub fn body_reports(
    birth: CalendarDate,
    today: CalendarDate,
    bodies: &[Body],
) -> Result<Vec<BodyReport>, CalendarError> {
    bodies
        .iter()
        .map(|body| {
            let ages = AgeReport::new(birth, today, body.year_length)?;
            debug!(body = %body.name, age = ages.age, "computed age");
            Ok(BodyReport {
                name: body.name.clone(),
                year_length: body.year_length,
                ages,
                week_length: body.year_length.week_length(),
                calendar_birthday_year: body
                    .is_calendar_year()
                    .then(|| next_calendar_birthday(birth, today)),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u8, day: u8) -> CalendarDate {
        CalendarDate::new(year, month, day).unwrap()
    }

    #[test]
    fn test_solar_system_table() {
        let bodies = solar_system();
        assert_eq!(bodies.len(), 10);
        assert_eq!(bodies[0].name, "Mercury");
        assert_eq!(bodies[9].name, "Pluto");

        let earth: Vec<_> = bodies.iter().filter(|b| b.is_calendar_year()).collect();
        assert_eq!(earth.len(), 1);
        assert_eq!(earth[0].name, EARTH);

        for pair in bodies.windows(2) {
            assert!(pair[0].year_length < pair[1].year_length);
        }
    }

    #[test]
    fn test_body_new() {
        let body = Body::new("Eris", 203_830.0).unwrap();
        assert_eq!(body.name, "Eris");
        assert!(!body.is_calendar_year());
        assert!(Body::new("Nowhere", 0.0).is_err());

        // A Gregorian-length year alone does not make a calendar body
        let twin = Body::new("Counter-Earth", 365.2425).unwrap();
        assert_eq!(twin.year_length, YearLength::GREGORIAN);
        assert!(!twin.is_calendar_year());
    }

    #[test]
    fn test_body_deserialize() {
        let body: Body = serde_json::from_str(r#"{"name": "Eris", "year_length": 203830.0}"#).unwrap();
        assert_eq!(body.year_length.get(), 203_830.0);
        assert!(!body.is_calendar_year());

        let body: Body = serde_json::from_str(
            r#"{"name": "Home", "year_length": 365.2425, "calendar_year": true}"#,
        )
        .unwrap();
        assert!(body.is_calendar_year());

        let result: Result<Body, _> = serde_json::from_str(r#"{"name": "Eris", "year_length": -1.0}"#);
        assert!(result.is_err());

        let result: Result<Body, _> =
            serde_json::from_str(r#"{"name": "Eris", "year_length": 1.0, "moons": 1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_body_reports() {
        let birth = date(2000, 1, 1);
        let today = date(2024, 1, 11);
        let reports = body_reports(birth, today, &solar_system()).unwrap();
        assert_eq!(reports.len(), 10);

        for report in &reports {
            assert_eq!(report.ages.elapsed_days, 8776, "{}", report.name);
            assert!(report.ages.next_anniversary >= today, "{}", report.name);
            assert!(report.ages.next_half_anniversary >= today, "{}", report.name);
        }

        let earth = reports.iter().find(|r| r.name == EARTH).unwrap();
        assert_eq!(earth.calendar_birthday_year, Some(2025));
        assert!((earth.week_length - 7.0).abs() < 0.001);

        let mercury = &reports[0];
        assert_eq!(mercury.calendar_birthday_year, None);
        assert!((mercury.ages.age - 8776.0 / 87.97).abs() < 1e-9);
    }

    #[test]
    fn test_body_reports_empty() {
        let reports = body_reports(date(2000, 1, 1), date(2024, 1, 11), &[]).unwrap();
        assert!(reports.is_empty());
    }
}
