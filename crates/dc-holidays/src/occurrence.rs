//! `HolidayOccurrence` — one observance on one concrete date.

use dc_time::Date;
use serde::Serialize;

/// A holiday observed on a specific date.
///
/// National occurrences carry no region; regional ones carry the full name
/// of the state (e.g. `"São Paulo"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct HolidayOccurrence {
    /// Date of the observance.
    pub date: Date,
    /// Portuguese name of the holiday.
    pub name: &'static str,
    /// Region the holiday belongs to, `None` for national holidays.
    pub region: Option<&'static str>,
}

impl HolidayOccurrence {
    /// A national occurrence.
    pub fn national(date: Date, name: &'static str) -> Self {
        Self {
            date,
            name,
            region: None,
        }
    }

    /// An occurrence belonging to `region`.
    pub fn regional(date: Date, name: &'static str, region: &'static str) -> Self {
        Self {
            date,
            name,
            region: Some(region),
        }
    }

    /// Return `true` for national occurrences.
    pub fn is_national(&self) -> bool {
        self.region.is_none()
    }
}

impl std::fmt::Display for HolidayOccurrence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.region {
            Some(region) => write!(f, "{} {} ({region})", self.date, self.name),
            None => write!(f, "{} {}", self.date, self.name),
        }
    }
}
