//! `DateDimensionBuilder` — range validation and the holiday join.

use std::collections::HashMap;

use dc_core::errors::Result;
use dc_core::Settings;
use dc_holidays::regional::region_holidays;
use dc_holidays::{national_holidays, resolve_regions, HolidayConfig, Region};
use dc_time::{Date, DateRange};

use crate::row::DateDimensionRow;
use crate::table::DateDimension;

/// Builder for [`DateDimension`].
///
/// ```
/// use dc_dimension::DateDimensionBuilder;
/// use dc_time::Date;
///
/// let table = DateDimensionBuilder::new(
///     Date::from_ymd(2024, 1, 1).unwrap(),
///     Date::from_ymd(2024, 12, 31).unwrap(),
/// )
/// .regions(&["SP"])
/// .build()
/// .unwrap();
/// assert_eq!(table.len(), 366);
/// ```
#[derive(Debug, Clone)]
pub struct DateDimensionBuilder {
    start: Date,
    end: Date,
    config: HolidayConfig,
    regions: Vec<String>,
    max_years: u32,
}

impl DateDimensionBuilder {
    /// Begin building a table over `[start, end]`.
    ///
    /// Uses the default holiday configuration, no regions, and the
    /// process-wide maximum span.
    pub fn new(start: Date, end: Date) -> Self {
        Self {
            start,
            end,
            config: HolidayConfig::default(),
            regions: Vec::new(),
            max_years: Settings::instance().max_years,
        }
    }

    /// Set which optional national observances are included.
    pub fn holiday_config(mut self, config: HolidayConfig) -> Self {
        self.config = config;
        self
    }

    /// Select regions by name or UF code; `"Todos"` selects all of them.
    pub fn regions<S: AsRef<str>>(mut self, regions: &[S]) -> Self {
        self.regions = regions.iter().map(|r| r.as_ref().to_string()).collect();
        self
    }

    /// Override the maximum span in years.
    pub fn max_years(mut self, max_years: u32) -> Self {
        self.max_years = max_years;
        self
    }

    /// Validate the range and build the table.
    pub fn build(self) -> Result<DateDimension> {
        let range = DateRange::bounded(self.start, self.end, self.max_years)?;
        let regions = resolve_regions(&self.regions);
        let lookup = HolidayLookup::new(&range, &self.config, &regions);

        let rows: Vec<DateDimensionRow> = range
            .iter()
            .map(|date| {
                let (regional, region) = lookup.regional(date);
                DateDimensionRow::new(date).with_holidays(lookup.national(date), regional, region)
            })
            .collect();

        log::info!("Tabela gerada com {} linhas.", rows.len());
        Ok(DateDimension::new(rows, range, self.config, regions))
    }
}

/// Generate the date dimension for `[start, end]`.
///
/// The span is capped by `Settings::instance().max_years`.
pub fn generate<S: AsRef<str>>(
    start: Date,
    end: Date,
    config: &HolidayConfig,
    regions: &[S],
) -> Result<DateDimension> {
    DateDimensionBuilder::new(start, end)
        .holiday_config(*config)
        .regions(regions)
        .build()
}

#[derive(Debug, Default)]
struct RegionalEntry {
    names: Vec<&'static str>,
    regions: Vec<&'static str>,
}

/// Per-date holiday lookups over the years a range touches.
#[derive(Debug)]
struct HolidayLookup {
    national: HashMap<Date, &'static str>,
    regional: HashMap<Date, RegionalEntry>,
}

impl HolidayLookup {
    fn new(range: &DateRange, config: &HolidayConfig, regions: &[&'static Region]) -> Self {
        let mut national = HashMap::new();
        let mut regional: HashMap<Date, RegionalEntry> = HashMap::new();
        for year in range.years() {
            // First name in catalog order wins.
            for h in national_holidays(year, config) {
                national.entry(h.date).or_insert(h.name);
            }
            for h in region_holidays(year, regions) {
                let entry = regional.entry(h.date).or_default();
                if !entry.names.contains(&h.name) {
                    entry.names.push(h.name);
                }
                if let Some(region) = h.region {
                    if !entry.regions.contains(&region) {
                        entry.regions.push(region);
                    }
                }
            }
        }
        Self { national, regional }
    }

    fn national(&self, date: Date) -> Option<&'static str> {
        self.national.get(&date).copied()
    }

    fn regional(&self, date: Date) -> (Option<String>, Option<String>) {
        match self.regional.get(&date) {
            Some(e) => (Some(e.names.join(" / ")), Some(e.regions.join(", "))),
            None => (None, None),
        }
    }
}
