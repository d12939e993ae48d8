//! `DateDimension` — the generated, immutable table.

use serde::{Serialize, Serializer};

use dc_holidays::{HolidayConfig, Region};
use dc_time::{Date, DateRange};

use crate::row::DateDimensionRow;

/// An ordered date-dimension table: one row per day of its range.
///
/// Produced by [`crate::DateDimensionBuilder`]; read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateDimension {
    rows: Vec<DateDimensionRow>,
    range: DateRange,
    config: HolidayConfig,
    regions: Vec<&'static Region>,
}

impl DateDimension {
    pub(crate) fn new(
        rows: Vec<DateDimensionRow>,
        range: DateRange,
        config: HolidayConfig,
        regions: Vec<&'static Region>,
    ) -> Self {
        debug_assert_eq!(rows.len(), range.len());
        Self {
            rows,
            range,
            config,
            regions,
        }
    }

    /// All rows, ascending by date.
    pub fn rows(&self) -> &[DateDimensionRow] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Return `true` if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The row for `date`, if inside the range.
    pub fn get(&self, date: Date) -> Option<&DateDimensionRow> {
        if !self.range.contains(date) {
            return None;
        }
        self.rows.get(self.range.start().days_between(date) as usize)
    }

    /// Iterate over the rows.
    pub fn iter(&self) -> std::slice::Iter<'_, DateDimensionRow> {
        self.rows.iter()
    }

    /// The first `n` rows (fewer if the table is shorter).
    pub fn head(&self, n: usize) -> &[DateDimensionRow] {
        &self.rows[..n.min(self.rows.len())]
    }

    /// Rows flagged as holidays.
    pub fn holidays(&self) -> impl Iterator<Item = &DateDimensionRow> {
        self.rows.iter().filter(|r| r.is_holiday)
    }

    /// The covered range.
    pub fn range(&self) -> DateRange {
        self.range
    }

    /// Holiday configuration used.
    pub fn config(&self) -> &HolidayConfig {
        &self.config
    }

    /// Regions whose holidays were joined in.
    pub fn regions(&self) -> &[&'static Region] {
        &self.regions
    }
}

impl<'a> IntoIterator for &'a DateDimension {
    type Item = &'a DateDimensionRow;
    type IntoIter = std::slice::Iter<'a, DateDimensionRow>;
    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Serializes as the sequence of its rows.
impl Serialize for DateDimension {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.rows.serialize(serializer)
    }
}
