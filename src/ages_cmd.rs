use std::fmt::Write as _;

use anyhow::{Context, Result};
use planetary_age::{body_reports, BodyReport, CalendarDate};
use tracing::info;

use crate::cli::AgesArgs;
use crate::config::AgeConfig;

const LABEL_WIDTH: usize = 35;
const COLUMN_WIDTH: usize = 10;

/// Print the ages table for one birth date.
pub fn run(args: &AgesArgs, today: CalendarDate) -> Result<()> {
    let config = AgeConfig::load(args.config.as_deref())?;
    let bodies = config.bodies();
    info!(birthday = %args.birthday, %today, bodies = bodies.len(), "computing ages");

    let reports = body_reports(args.birthday, today, &bodies)
        .with_context(|| format!("failed to compute ages for {}", args.birthday))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        print!("{}", render_table(args.birthday, &reports));
    }
    Ok(())
}

/// One row per quantity, one column per body.
pub fn render_table(birth: CalendarDate, reports: &[BodyReport]) -> String {
    let mut out = String::from("\n");
    push_row(&mut out, "World:", reports.iter().map(|r| r.name.clone()));
    push_row(
        &mut out,
        "Year length (Earth days):",
        reports.iter().map(|r| round_to(r.year_length.get(), 4)),
    );
    push_row(
        &mut out,
        "Current age (local years):",
        reports.iter().map(|r| round_to(r.ages.age, 4)),
    );
    push_row(
        &mut out,
        "Next birthday:",
        reports.iter().map(|r| match r.calendar_birthday_year {
            Some(year) => format!("{}/{}/{year}", birth.month(), birth.day()),
            None => short_date(r.ages.next_anniversary),
        }),
    );
    push_row(
        &mut out,
        "Next half-birthday:",
        reports.iter().map(|r| short_date(r.ages.next_half_anniversary)),
    );
    push_row(
        &mut out,
        "Length of birthweek (Earth days):",
        reports.iter().map(|r| {
            // Long weeks read better without the decimal
            if r.week_length >= 10.0 {
                format!("{:.0}", r.week_length)
            } else {
                round_to(r.week_length, 1)
            }
        }),
    );
    out
}

fn push_row(out: &mut String, label: &str, cells: impl Iterator<Item = String>) {
    let _ = write!(out, "{label:<LABEL_WIDTH$}");
    for cell in cells {
        let _ = write!(out, " {cell:<COLUMN_WIDTH$}");
    }
    out.push('\n');
}

fn short_date(date: CalendarDate) -> String {
    let (month, day, year) = date.to_mdy();
    format!("{month}/{day}/{year}")
}

/// Rounds to at most `places` decimals, dropping trailing zeros.
fn round_to(value: f64, places: usize) -> String {
    let fixed = format!("{value:.places$}");
    if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.').to_owned()
    } else {
        fixed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use planetary_age::solar_system;

    #[test]
    fn round_to_trims() {
        assert_eq!(round_to(365.2425, 4), "365.2425");
        assert_eq!(round_to(224.70, 4), "224.7");
        assert_eq!(round_to(60189.0, 4), "60189");
        assert_eq!(round_to(1.686_3, 1), "1.7");
    }

    #[test]
    fn table_has_a_column_per_body() {
        let birth: CalendarDate = "01/01/2000".parse().unwrap();
        let today: CalendarDate = "01/11/2024".parse().unwrap();
        let reports = body_reports(birth, today, &solar_system()).unwrap();
        let table = render_table(birth, &reports);

        let lines: Vec<&str> = table.lines().filter(|l| !l.is_empty()).collect();
        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with("World:"));
        assert!(lines[0].contains("Mercury"));
        assert!(lines[0].contains("Pluto"));
        // Earth shows the calendar birthday
        assert!(lines[3].contains("1/1/2025"));
    }
}
