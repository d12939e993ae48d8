//! Integration tests for `Date`, week numbering, and Easter.
//!
//! `chrono` serves as an independent oracle for day arithmetic and the
//! ISO-8601 week.

use chrono::{Datelike, NaiveDate};
use proptest::prelude::*;

use dc_time::date::{days_in_month, is_leap_year};
use dc_time::{civil_week, easter_sunday, iso_week, Date, DateRange, Weekday};

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn naive(d: Date) -> NaiveDate {
    let (y, m, day) = d.ymd();
    NaiveDate::from_ymd_opt(y as i32, m as u32, day as u32).unwrap()
}

// ─── Fixed reference dates ────────────────────────────────────────────────────

#[test]
fn reference_attributes() {
    let epoch = date(1970, 1, 1);
    assert_eq!(epoch.unix_days(), 0);
    assert_eq!(epoch.serial(), 25_569);

    let sunday = date(2025, 1, 5);
    assert_eq!(sunday.weekday(), Weekday::Sunday);
    assert_eq!(sunday.weekday().number_from_sunday(), 1);
    assert_eq!(sunday.weekday().name_pt(), "Domingo");

    assert_eq!(date(2024, 1, 1).weekday().name_pt(), "Segunda-feira");
    assert_eq!(date(2024, 12, 31).day_of_year(), 366);
}

#[test]
fn easter_reference_years() {
    for (y, m, d) in [(2024, 3, 31), (2025, 4, 20), (2026, 4, 5)] {
        assert_eq!(easter_sunday(y), date(y, m, d));
    }
}

#[test]
fn leap_years() {
    assert!(is_leap_year(2000));
    assert!(is_leap_year(2024));
    assert!(!is_leap_year(1900));
    assert!(!is_leap_year(2100));
    assert_eq!(days_in_month(2024, 2), 29);
    assert_eq!(days_in_month(2023, 2), 28);
}

#[test]
fn serde_uses_iso_strings() {
    let d = date(2024, 7, 9);
    let json = serde_json::to_string(&d).unwrap();
    assert_eq!(json, "\"2024-07-09\"");
    let back: Date = serde_json::from_str(&json).unwrap();
    assert_eq!(back, d);
    assert!(serde_json::from_str::<Date>("\"2024-13-01\"").is_err());
}

#[test]
fn week_numbers_for_a_whole_decade() {
    let range = DateRange::new(date(2015, 1, 1), date(2030, 12, 31)).unwrap();
    for d in range {
        let n = naive(d);
        let iso = iso_week(d);
        assert_eq!(iso.week as u32, n.iso_week().week(), "{d}");
        assert_eq!(iso.year, n.iso_week().year(), "{d}");

        let percent_u: u8 = n.format("%U").to_string().parse().unwrap();
        let jan1_is_sunday = d.start_of_year().weekday() == Weekday::Sunday;
        let expected = if jan1_is_sunday { percent_u } else { percent_u + 1 };
        assert_eq!(civil_week(d), expected, "{d}");
    }
}

// ─── Properties ───────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn serial_roundtrip(serial in Date::MIN.serial()..=Date::MAX.serial()) {
        let d = Date::from_serial(serial).unwrap();
        let (y, m, day) = d.ymd();
        prop_assert_eq!(Date::from_ymd(y, m, day).unwrap(), d);
        prop_assert_eq!(Date::from_int_key(d.int_key()).unwrap(), d);
        prop_assert_eq!(d.to_string().parse::<Date>().unwrap(), d);
    }

    #[test]
    fn agrees_with_chrono(serial in Date::MIN.serial()..=Date::MAX.serial()) {
        let d = Date::from_serial(serial).unwrap();
        let n = naive(d);
        let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();
        prop_assert_eq!(i64::from(d.unix_days()), (n - epoch).num_days());
        prop_assert_eq!(d.weekday().number_from_monday() as u32, n.weekday().number_from_monday());
        prop_assert_eq!(d.day_of_year() as u32, n.ordinal());
    }

    #[test]
    fn week_bounds(serial in Date::MIN.serial()..=Date::MAX.serial()) {
        let d = Date::from_serial(serial).unwrap();
        let civil = civil_week(d);
        prop_assert!((1..=54).contains(&civil));
        let iso = iso_week(d);
        prop_assert!((1..=53).contains(&iso.week));
        prop_assert!((iso.year - d.year() as i32).abs() <= 1);
    }
}
