use planetary_age::{
    body_reports, elapsed_days, next_anniversary, next_calendar_birthday, next_half_anniversary,
    solar_system, sweep, CalendarDate, CalendarError, YearLength,
};

fn date(s: &str) -> CalendarDate {
    s.parse().unwrap()
}

#[test]
fn millennium_baby() {
    let birth = date("01/01/2000");
    let today = date("01/11/2024");
    assert_eq!(elapsed_days(birth, today), 8776);

    let reports = body_reports(birth, today, &solar_system()).unwrap();
    assert_eq!(reports.len(), 10);
    for report in &reports {
        assert_eq!(report.ages.elapsed_days, 8776, "{}", report.name);
        assert!(report.ages.next_anniversary >= today, "{}", report.name);
        assert!(report.ages.next_half_anniversary > today, "{}", report.name);
    }

    let earth = reports.iter().find(|r| r.name == "Earth").unwrap();
    assert_eq!(earth.calendar_birthday_year, Some(2025));
    assert!(reports
        .iter()
        .filter(|r| r.name != "Earth")
        .all(|r| r.calendar_birthday_year.is_none()));
}

#[test]
fn anniversaries_stay_in_order() {
    let today = date("06/15/2024");
    let mars = YearLength::new(686.98).unwrap();
    for days in (0..20_000).step_by(97) {
        let age = mars.age(days);
        let whole = next_anniversary(age, mars, today).unwrap();
        let half = next_half_anniversary(age, mars, today).unwrap();
        assert!(whole >= today, "days {days}");
        assert!(half >= today, "days {days}");
        // Projections are at most one local year (plus a half) ahead
        assert!(elapsed_days(today, whole) <= 687, "days {days}");
        assert!(elapsed_days(today, half) <= 1031, "days {days}");
    }
}

#[test]
fn whole_age_is_today() {
    let today = date("03/01/2024");
    let year = YearLength::GREGORIAN;
    assert_eq!(next_anniversary(0.0, year, today).unwrap(), today);
    assert_eq!(next_anniversary(24.0, year, today).unwrap(), today);
}

#[test]
fn non_finite_age_rejected() {
    let today = date("03/01/2024");
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
fn leap_day_calendar_birthday() {
    let birth = date("02/29/2000");
    assert_eq!(next_calendar_birthday(birth, date("02/28/2025")), 2025);
    assert_eq!(next_calendar_birthday(birth, date("03/01/2025")), 2026);
    assert_eq!(next_calendar_birthday(birth, date("02/29/2024")), 2024);
}

#[test]
fn drift_sweep_centres_on_true_value() {
    let summary = sweep(date("01/01/2024"), 10, 400, YearLength::GREGORIAN).unwrap();
    assert_eq!(summary.samples.len(), 400);
    let mean = summary.mean().unwrap();
    assert!((mean - 10.0).abs() < 1.0, "mean {mean}");
    assert!(summary.max_deviation().unwrap() < 2.0);
}
