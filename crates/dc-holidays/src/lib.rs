//! # dc-holidays
//!
//! Brazilian holiday catalog: the national holidays (mandatory federal
//! holidays plus configurable optional observances), the static table of
//! state holidays, and a calendar that lists both for a region selection.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

use dc_time::DateRange;

// ── Modules ───────────────────────────────────────────────────────────────────

/// `BrazilCalendar` — holidays observed under one holiday configuration.
pub mod calendar;

/// `HolidayConfig` — optional national observances.
pub mod config;

/// National holiday catalog.
pub mod national;

/// `HolidayOccurrence` — one holiday on one date.
pub mod occurrence;

/// State holiday table and region selection.
pub mod regional;

/// `HolidayRule` — fixed-date and Easter-relative rules.
pub mod rule;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::BrazilCalendar;
pub use config::HolidayConfig;
pub use national::national_holidays;
pub use occurrence::HolidayOccurrence;
pub use regional::{find_region, regional_holidays, resolve_regions, Region, ALL_REGIONS, REGIONS};
pub use rule::{HolidayDate, HolidayRule};

/// Every national and regional holiday falling inside `range`, sorted by
/// date; national entries come first on a shared date.
pub fn holidays_in_range<S: AsRef<str>>(
    range: &DateRange,
    config: &HolidayConfig,
    regions: &[S],
) -> Vec<HolidayOccurrence> {
    let selected = resolve_regions(regions);
    let mut out: Vec<HolidayOccurrence> = range
        .years()
        .flat_map(|year| {
            national_holidays(year, config)
                .into_iter()
                .chain(regional::region_holidays(year, &selected))
        })
        .filter(|h| range.contains(h.date))
        .collect();
    out.sort_by_key(|h| (h.date, h.region.is_some()));
    out
}
