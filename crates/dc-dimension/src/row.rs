//! `DateDimensionRow` — the attributes of one calendar day.
//!
//! Field order is column order.  Serialization uses the Portuguese column
//! names of [`COLUMNS`], so a serialized row is already a table record.

use serde::Serialize;

use dc_time::{civil_week, iso_week, Date};

/// Storage class of a column, used by typed exporters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnKind {
    /// Calendar date.
    Date,
    /// Signed integer.
    Integer,
    /// Free text.
    Text,
    /// `true` / `false`.
    Boolean,
}

/// Name and type of one output column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Column {
    /// Column header.
    pub name: &'static str,
    /// Storage class.
    pub kind: ColumnKind,
    /// Whether the column may hold nulls.
    pub nullable: bool,
}

const fn col(name: &'static str, kind: ColumnKind) -> Column {
    Column {
        name,
        kind,
        nullable: false,
    }
}

const fn nullable(name: &'static str) -> Column {
    Column {
        name,
        kind: ColumnKind::Text,
        nullable: true,
    }
}

/// Output columns, in table order.
pub const COLUMNS: [Column; 21] = [
    col("Data", ColumnKind::Date),
    col("Ano", ColumnKind::Integer),
    col("Mes", ColumnKind::Integer),
    col("Dia", ColumnKind::Integer),
    col("DiaSemana", ColumnKind::Integer),
    col("NomeDiaSemana", ColumnKind::Text),
    col("NomeMes", ColumnKind::Text),
    col("AnoMes", ColumnKind::Text),
    col("Trimestre", ColumnKind::Integer),
    col("Semestre", ColumnKind::Integer),
    col("SemanaAno", ColumnKind::Integer),
    col("SemanaAnoISO", ColumnKind::Integer),
    col("EhFimDeSemana", ColumnKind::Boolean),
    col("DataInt", ColumnKind::Integer),
    col("DiaDoAno", ColumnKind::Integer),
    col("DataUnixPosix", ColumnKind::Integer),
    col("DataEpoch", ColumnKind::Integer),
    nullable("Feriado"),
    nullable("Feriado Estadual"),
    nullable("Estado"),
    col("EhFeriado", ColumnKind::Boolean),
];

/// One cell of a row, borrowed from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell<'a> {
    /// A calendar date.
    Date(Date),
    /// An integer value.
    Int(i64),
    /// A text value.
    Text(&'a str),
    /// A boolean flag.
    Bool(bool),
    /// Missing value.
    Null,
}

impl<'a> From<Option<&'a str>> for Cell<'a> {
    fn from(v: Option<&'a str>) -> Self {
        v.map_or(Cell::Null, Cell::Text)
    }
}

/// One row of the date dimension.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DateDimensionRow {
    /// The day itself.
    #[serde(rename = "Data")]
    pub date: Date,
    /// Calendar year.
    #[serde(rename = "Ano")]
    pub year: u16,
    /// Month, 1..=12.
    #[serde(rename = "Mes")]
    pub month: u8,
    /// Day of month, 1..=31.
    #[serde(rename = "Dia")]
    pub day: u8,
    /// Day of week, Sunday = 1 .. Saturday = 7.
    #[serde(rename = "DiaSemana")]
    pub weekday_number: u8,
    /// Portuguese weekday name, e.g. `"Segunda-feira"`.
    #[serde(rename = "NomeDiaSemana")]
    pub weekday_name: &'static str,
    /// Portuguese month name, e.g. `"Março"`.
    #[serde(rename = "NomeMes")]
    pub month_name: &'static str,
    /// `YYYY-MM`.
    #[serde(rename = "AnoMes")]
    pub year_month: String,
    /// Quarter, 1..=4.
    #[serde(rename = "Trimestre")]
    pub quarter: u8,
    /// Half-year, 1..=2.
    #[serde(rename = "Semestre")]
    pub half_year: u8,
    /// Sunday-anchored week of year, 1..=54.
    #[serde(rename = "SemanaAno")]
    pub week_number: u8,
    /// ISO-8601 week of year, 1..=53.
    #[serde(rename = "SemanaAnoISO")]
    pub iso_week_number: u8,
    /// Saturday or Sunday.
    #[serde(rename = "EhFimDeSemana")]
    pub is_weekend: bool,
    /// `YYYYMMDD` as an integer.
    #[serde(rename = "DataInt")]
    pub date_integer_key: u32,
    /// Day of year, 1..=366.
    #[serde(rename = "DiaDoAno")]
    pub day_of_year: u16,
    /// Days since 1970-01-01.
    #[serde(rename = "DataUnixPosix")]
    pub unix_epoch_days: i32,
    /// Days since 1899-12-30.
    #[serde(rename = "DataEpoch")]
    pub spreadsheet_epoch_days: i32,
    /// National holiday observed on this day.
    #[serde(rename = "Feriado")]
    pub national_holiday_name: Option<&'static str>,
    /// State holidays observed on this day, joined with `" / "`.
    #[serde(rename = "Feriado Estadual")]
    pub regional_holiday_name: Option<String>,
    /// States observing them, joined with `", "`.
    #[serde(rename = "Estado")]
    pub region_name: Option<String>,
    /// Any holiday observed on this day.
    #[serde(rename = "EhFeriado")]
    pub is_holiday: bool,
}

impl DateDimensionRow {
    /// Calendar attributes of `date`, with no holidays attached.
    pub fn new(date: Date) -> Self {
        let (year, month, day) = date.ymd();
        let weekday = date.weekday();
        let month_of_year = date.month_of_year();
        Self {
            date,
            year,
            month,
            day,
            weekday_number: weekday.number_from_sunday(),
            weekday_name: weekday.name_pt(),
            month_name: month_of_year.name_pt(),
            year_month: date.year_month(),
            quarter: month_of_year.quarter(),
            half_year: month_of_year.half_year(),
            week_number: civil_week(date),
            iso_week_number: iso_week(date).week,
            is_weekend: weekday.is_weekend(),
            date_integer_key: date.int_key(),
            day_of_year: date.day_of_year(),
            unix_epoch_days: date.unix_days(),
            spreadsheet_epoch_days: date.serial(),
            national_holiday_name: None,
            regional_holiday_name: None,
            region_name: None,
            is_holiday: false,
        }
    }

    /// Attach holiday names and recompute `is_holiday`.
    pub fn with_holidays(
        mut self,
        national: Option<&'static str>,
        regional: Option<String>,
        region: Option<String>,
    ) -> Self {
        self.is_holiday = national.is_some() || regional.is_some();
        self.national_holiday_name = national;
        self.regional_holiday_name = regional;
        self.region_name = region;
        self
    }

    /// The row's values in [`COLUMNS`] order.
    pub fn cells(&self) -> [Cell<'_>; 21] {
        [
            Cell::Date(self.date),
            Cell::Int(self.year.into()),
            Cell::Int(self.month.into()),
            Cell::Int(self.day.into()),
            Cell::Int(self.weekday_number.into()),
            Cell::Text(self.weekday_name),
            Cell::Text(self.month_name),
            Cell::Text(&self.year_month),
            Cell::Int(self.quarter.into()),
            Cell::Int(self.half_year.into()),
            Cell::Int(self.week_number.into()),
            Cell::Int(self.iso_week_number.into()),
            Cell::Bool(self.is_weekend),
            Cell::Int(self.date_integer_key.into()),
            Cell::Int(self.day_of_year.into()),
            Cell::Int(self.unix_epoch_days.into()),
            Cell::Int(self.spreadsheet_epoch_days.into()),
            self.national_holiday_name.into(),
            self.regional_holiday_name.as_deref().into(),
            self.region_name.as_deref().into(),
            Cell::Bool(self.is_holiday),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn calendar_attributes() {
        let r = DateDimensionRow::new(date(2024, 3, 15));
        assert_eq!((r.year, r.month, r.day), (2024, 3, 15));
        assert_eq!(r.weekday_number, 6);
        assert_eq!(r.weekday_name, "Sexta-feira");
        assert_eq!(r.month_name, "Março");
        assert_eq!(r.year_month, "2024-03");
        assert_eq!((r.quarter, r.half_year), (1, 1));
        assert_eq!(r.date_integer_key, 20240315);
        assert_eq!(r.day_of_year, 75);
        assert!(!r.is_weekend);
        assert!(!r.is_holiday);
    }

    #[test]
    fn holidays_set_flag() {
        let r = DateDimensionRow::new(date(2024, 7, 9));
        let r = r.with_holidays(None, Some("Revolução Constitucionalista".into()), Some("São Paulo".into()));
        assert!(r.is_holiday);
        assert_eq!(r.national_holiday_name, None);
        let r = r.with_holidays(None, None, None);
        assert!(!r.is_holiday);
    }

    #[test]
    fn cells_follow_column_kinds() {
        let r = DateDimensionRow::new(date(2025, 1, 5));
        for (cell, column) in r.cells().iter().zip(COLUMNS.iter()) {
            let ok = match (cell, column.kind) {
                (Cell::Date(_), ColumnKind::Date)
                | (Cell::Int(_), ColumnKind::Integer)
                | (Cell::Text(_), ColumnKind::Text)
                | (Cell::Bool(_), ColumnKind::Boolean) => true,
                (Cell::Null, _) => column.nullable,
                _ => false,
            };
            assert!(ok, "{} has {cell:?}", column.name);
        }
    }

    #[test]
    fn serialized_keys_are_column_names() {
        let r = DateDimensionRow::new(date(2025, 1, 5));
        let value = serde_json::to_value(&r).unwrap();
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        let mut expected: Vec<&str> = COLUMNS.iter().map(|c| c.name).collect();
        let mut keys = keys;
        keys.sort_unstable();
        expected.sort_unstable();
        assert_eq!(keys, expected);
        assert_eq!(value["Data"], "2025-01-05");
        assert_eq!(value["Feriado"], serde_json::Value::Null);
    }
}
