//! End-to-end checks on generated date-dimension tables.

use proptest::prelude::*;

use dc_core::Error;
use dc_dimension::{generate, DateDimensionBuilder, COLUMNS};
use dc_holidays::HolidayConfig;
use dc_time::Date;

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn national(start: Date, end: Date) -> dc_dimension::DateDimension {
    generate::<&str>(start, end, &HolidayConfig::default(), &[]).unwrap()
}

#[test]
fn row_counts() {
    assert_eq!(national(date(2024, 1, 1), date(2024, 1, 10)).len(), 10);
    assert_eq!(national(date(2024, 1, 1), date(2024, 12, 31)).len(), 366);
    assert_eq!(national(date(2023, 1, 1), date(2023, 12, 31)).len(), 365);
}

#[test]
fn weekday_names_and_numbers() {
    let t = national(date(2024, 1, 1), date(2025, 1, 31));
    let mon = t.get(date(2024, 1, 1)).unwrap();
    assert_eq!(mon.weekday_name, "Segunda-feira");
    assert_eq!(mon.weekday_number, 2);
    assert!(!mon.is_weekend);

    let sun = t.get(date(2025, 1, 5)).unwrap();
    assert_eq!(sun.weekday_number, 1);
    assert_eq!(sun.weekday_name, "Domingo");
    assert!(sun.is_weekend);

    let sat = t.get(date(2025, 1, 4)).unwrap();
    assert_eq!(sat.weekday_number, 7);
    assert_eq!(sat.weekday_name, "Sábado");
    assert!(sat.is_weekend);
}

#[test]
fn civil_and_iso_weeks_differ_at_year_end() {
    let t = national(date(2025, 12, 29), date(2025, 12, 31));
    let row = t.get(date(2025, 12, 29)).unwrap();
    assert_eq!(row.week_number, 53);
    assert_eq!(row.iso_week_number, 1);
}

#[test]
fn epoch_columns() {
    let t = national(date(1970, 1, 1), date(1970, 1, 2));
    let row = &t.rows()[0];
    assert_eq!(row.unix_epoch_days, 0);
    assert_eq!(row.spreadsheet_epoch_days, 25569);
    assert_eq!(t.rows()[1].unix_epoch_days, 1);
}

#[test]
fn day_of_year_in_leap_year() {
    let t = national(date(2024, 12, 31), date(2024, 12, 31));
    assert_eq!(t.rows()[0].day_of_year, 366);
}

#[test]
fn christmas_is_national_holiday() {
    let t = national(date(2024, 12, 1), date(2024, 12, 31));
    let row = t.get(date(2024, 12, 25)).unwrap();
    assert_eq!(row.national_holiday_name, Some("Natal"));
    assert!(row.is_holiday);
    assert!(!t.get(date(2024, 12, 24)).unwrap().is_holiday);
}

#[test]
fn optional_observances_follow_config() {
    let cfg = HolidayConfig {
        christmas_eve: true,
        carnival: false,
        ..HolidayConfig::default()
    };
    let t = generate::<&str>(date(2024, 1, 1), date(2024, 12, 31), &cfg, &[]).unwrap();
    assert_eq!(
        t.get(date(2024, 12, 24)).unwrap().national_holiday_name,
        Some("Véspera de Natal")
    );
    assert!(!t.get(date(2024, 2, 12)).unwrap().is_holiday);
    assert_eq!(
        t.get(date(2024, 5, 30)).unwrap().national_holiday_name,
        Some("Corpus Christi")
    );
}

#[test]
fn sao_paulo_constitutionalist_revolution() {
    let sp = generate(
        date(2024, 7, 1),
        date(2024, 7, 31),
        &HolidayConfig::default(),
        &["São Paulo"],
    )
    .unwrap();
    let row = sp.get(date(2024, 7, 9)).unwrap();
    assert_eq!(row.regional_holiday_name.as_deref(), Some("Revolução Constitucionalista"));
    assert_eq!(row.region_name.as_deref(), Some("São Paulo"));
    assert_eq!(row.national_holiday_name, None);
    assert!(row.is_holiday);

    let rj = generate(
        date(2024, 7, 1),
        date(2024, 7, 31),
        &HolidayConfig::default(),
        &["Rio de Janeiro"],
    )
    .unwrap();
    let row = rj.get(date(2024, 7, 9)).unwrap();
    assert_eq!(row.regional_holiday_name, None);
    assert_eq!(row.region_name, None);
    assert!(!row.is_holiday);
}

#[test]
fn unknown_region_is_ignored() {
    let t = generate(
        date(2024, 7, 1),
        date(2024, 7, 31),
        &HolidayConfig::default(),
        &["Atlântida"],
    )
    .unwrap();
    assert!(t.regions().is_empty());
    assert!(t.iter().all(|r| r.regional_holiday_name.is_none()));
}

#[test]
fn validation_errors() {
    let err = generate::<&str>(date(2024, 1, 2), date(2024, 1, 1), &HolidayConfig::default(), &[])
        .unwrap_err();
    assert!(matches!(err, Error::Validation(_)));

    let err = DateDimensionBuilder::new(date(2000, 1, 1), date(2030, 1, 1))
        .max_years(10)
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        Error::Validation("O intervalo máximo permitido é de 10 anos.".into())
    );
}

#[test]
fn json_records_use_column_names_in_order() {
    let t = national(date(2024, 12, 25), date(2024, 12, 25));
    let json = serde_json::to_string(&t).unwrap();
    let mut last = 0;
    for column in COLUMNS {
        let at = json
            .find(&format!("\"{}\":", column.name))
            .unwrap_or_else(|| panic!("missing {}", column.name));
        assert!(at >= last, "{} out of order", column.name);
        last = at;
    }
    assert!(json.contains("\"Feriado\":\"Natal\""));
    assert!(json.contains("\"Estado\":null"));
}

proptest! {
    #[test]
    fn one_ascending_row_per_day(
        y in 1990u16..2040,
        m in 1u8..=12,
        d in 1u8..=28,
        span in 0i32..800,
    ) {
        let start = date(y, m, d);
        let end = start + span;
        let t = national(start, end);
        prop_assert_eq!(t.len(), span as usize + 1);
        prop_assert_eq!(t.rows()[0].date, start);
        prop_assert!(t.rows().windows(2).all(|w| w[1].date == w[0].date + 1));
        for row in t.iter() {
            let (yy, mm, dd) = row.date.ymd();
            prop_assert_eq!(
                row.date_integer_key,
                u32::from(yy) * 10_000 + u32::from(mm) * 100 + u32::from(dd)
            );
            prop_assert_eq!(
                row.is_holiday,
                row.national_holiday_name.is_some() || row.regional_holiday_name.is_some()
            );
            prop_assert!((1..=54).contains(&row.week_number));
            prop_assert!((1..=53).contains(&row.iso_week_number));
        }
    }
}
