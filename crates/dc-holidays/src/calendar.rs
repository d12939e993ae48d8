//! `BrazilCalendar` — holidays observed under one holiday configuration.
//!
//! A calendar combines the national holidays selected by a
//! [`HolidayConfig`] with the holidays of any number of regions.

use dc_time::Date;

use crate::config::HolidayConfig;
use crate::national::national_holidays;
use crate::occurrence::HolidayOccurrence;
use crate::regional::{region_holidays, resolve_regions, Region};

/// National holidays plus the holidays of a region selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrazilCalendar {
    config: HolidayConfig,
    regions: Vec<&'static Region>,
}

impl Default for BrazilCalendar {
    fn default() -> Self {
        Self::national(HolidayConfig::default())
    }
}

impl BrazilCalendar {
    /// National holidays only.
    pub fn national(config: HolidayConfig) -> Self {
        Self {
            config,
            regions: Vec::new(),
        }
    }

    /// National holidays plus those of the selected regions.
    ///
    /// Unknown region identifiers are ignored.
    pub fn with_regions<S: AsRef<str>>(config: HolidayConfig, regions: &[S]) -> Self {
        Self {
            config,
            regions: resolve_regions(regions),
        }
    }

    /// Human-readable name, e.g. `"Brasil (SP, RJ)"`.
    pub fn name(&self) -> String {
        if self.regions.is_empty() {
            "Brasil".to_string()
        } else {
            let codes: Vec<&str> = self.regions.iter().map(|r| r.code).collect();
            format!("Brasil ({})", codes.join(", "))
        }
    }

    /// Holiday configuration in use.
    pub fn config(&self) -> &HolidayConfig {
        &self.config
    }

    /// Regions in use.
    pub fn regions(&self) -> &[&'static Region] {
        &self.regions
    }

    /// All holidays observed in `year`, national first, each group by date.
    pub fn holidays_in_year(&self, year: u16) -> Vec<HolidayOccurrence> {
        let mut out = national_holidays(year, &self.config);
        let mut regional = region_holidays(year, &self.regions);
        regional.sort_by_key(|h| h.date);
        out.extend(regional);
        out
    }

    /// Holidays observed on `date`, national first.
    pub fn holidays_on(&self, date: Date) -> Vec<HolidayOccurrence> {
        self.holidays_in_year(date.year())
            .into_iter()
            .filter(|h| h.date == date)
            .collect()
    }

    /// Return `true` if at least one holiday falls on `date`.
    ///
    /// Plain weekends are not holidays.
    pub fn is_holiday(&self, date: Date) -> bool {
        !self.holidays_on(date).is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn national_holidays_are_holidays() {
        let cal = BrazilCalendar::default();
        assert!(cal.is_holiday(date(2023, 1, 1)));
        assert!(cal.is_holiday(date(2023, 2, 20))); // Carnival Monday
        assert!(cal.is_holiday(date(2023, 2, 21))); // Carnival Tuesday
        assert!(cal.is_holiday(date(2023, 4, 7))); // Good Friday
        assert!(cal.is_holiday(date(2023, 9, 7)));
        assert!(!cal.is_holiday(date(2023, 6, 15)));
        // 2023-09-02 is a Saturday
        assert!(!cal.is_holiday(date(2023, 9, 2)));
    }

    #[test]
    fn regional_holidays_only_with_region() {
        let national = BrazilCalendar::default();
        let sp = BrazilCalendar::with_regions(HolidayConfig::default(), &["SP"]);
        assert!(!national.is_holiday(date(2024, 7, 9)));
        let on = sp.holidays_on(date(2024, 7, 9));
        assert_eq!(on.len(), 1);
        assert_eq!(on[0].name, "Revolução Constitucionalista");
        assert_eq!(on[0].region, Some("São Paulo"));
        assert_eq!(sp.name(), "Brasil (SP)");
        assert_eq!(national.name(), "Brasil");
    }

    #[test]
    fn holidays_on_lists_national_before_regional() {
        let cal = BrazilCalendar::with_regions(HolidayConfig::default(), &["DF", "MG"]);
        let names: Vec<&str> = cal
            .holidays_on(date(2024, 4, 21))
            .iter()
            .map(|h| h.name)
            .collect();
        assert_eq!(names[0], "Tiradentes");
        assert_eq!(names.len(), 3);
        assert!(cal.holidays_on(date(2024, 4, 22)).is_empty());
    }

    #[test]
    fn holidays_in_year_at_calendar_bounds() {
        let cal = BrazilCalendar::with_regions(HolidayConfig::all(), &["Todos"]);
        for year in [1, 9999] {
            let hs = cal.holidays_in_year(year);
            assert!(!hs.is_empty());
            assert!(hs.iter().all(|h| h.date.year() == year));
        }
    }
}
