//! `DateRange` — an inclusive, validated span of calendar days.

use dc_core::ensure;
use dc_core::errors::Result;

use crate::date::Date;

/// An inclusive range of calendar days, `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    start: Date,
    end: Date,
}

impl DateRange {
    /// Create a range, rejecting `start > end`.
    pub fn new(start: Date, end: Date) -> Result<Self> {
        ensure!(
            start <= end,
            "A data inicial deve ser menor ou igual à data final."
        );
        Ok(Self { start, end })
    }

    /// Create a range whose span does not exceed `max_years`.
    ///
    /// The span is measured in days and compared against `max_years * 366`,
    /// which leaves room for leap days.
    pub fn bounded(start: Date, end: Date, max_years: u32) -> Result<Self> {
        let range = Self::new(start, end)?;
        ensure!(
            i64::from(start.days_between(end)) <= i64::from(max_years) * 366,
            "O intervalo máximo permitido é de {max_years} anos."
        );
        Ok(range)
    }

    /// First day of the range.
    pub fn start(&self) -> Date {
        self.start
    }

    /// Last day of the range.
    pub fn end(&self) -> Date {
        self.end
    }

    /// Number of days in the range (never zero).
    pub fn len(&self) -> usize {
        (self.start.days_between(self.end) + 1) as usize
    }

    /// Always `false`; a range holds at least one day.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Return `true` if `date` lies within the range.
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }

    /// Calendar years touched by the range, ascending.
    pub fn years(&self) -> std::ops::RangeInclusive<u16> {
        self.start.year()..=self.end.year()
    }

    /// Iterate over every day, ascending.
    pub fn iter(&self) -> Days {
        Days {
            next: Some(self.start),
            end: self.end,
        }
    }
}

impl IntoIterator for DateRange {
    type Item = Date;
    type IntoIter = Days;
    fn into_iter(self) -> Days {
        self.iter()
    }
}

impl IntoIterator for &DateRange {
    type Item = Date;
    type IntoIter = Days;
    fn into_iter(self) -> Days {
        self.iter()
    }
}

/// Iterator over the days of a [`DateRange`].
#[derive(Debug, Clone)]
pub struct Days {
    next: Option<Date>,
    end: Date,
}

impl Iterator for Days {
    type Item = Date;

    fn next(&mut self) -> Option<Date> {
        let current = self.next?;
        self.next = if current < self.end {
            current.succ()
        } else {
            None
        };
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self
            .next
            .map_or(0, |d| (d.days_between(self.end) + 1) as usize);
        (n, Some(n))
    }
}

impl ExactSizeIterator for Days {}

impl std::iter::FusedIterator for Days {}

#[cfg(test)]
mod tests {
    use super::*;
    use dc_core::Error;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn single_day() {
        let r = DateRange::new(date(2025, 1, 5), date(2025, 1, 5)).unwrap();
        assert_eq!(r.len(), 1);
        assert_eq!(r.iter().collect::<Vec<_>>(), vec![date(2025, 1, 5)]);
    }

    #[test]
    fn leap_year_has_366_days() {
        let r = DateRange::new(date(2024, 1, 1), date(2024, 12, 31)).unwrap();
        assert_eq!(r.len(), 366);
        assert_eq!(r.iter().count(), 366);
        assert_eq!(r.years(), 2024..=2024);
    }

    #[test]
    fn start_after_end_is_rejected() {
        let err = DateRange::new(date(2024, 1, 2), date(2024, 1, 1)).unwrap_err();
        assert_eq!(
            err,
            Error::Validation("A data inicial deve ser menor ou igual à data final.".into())
        );
    }

    #[test]
    fn span_cap() {
        let start = date(2020, 1, 1);
        assert!(DateRange::bounded(start, start + 3660, 10).is_ok());
        let err = DateRange::bounded(start, start + 3661, 10).unwrap_err();
        assert_eq!(
            err,
            Error::Validation("O intervalo máximo permitido é de 10 anos.".into())
        );
    }

    #[test]
    fn iterator_stops_at_max_date() {
        let r = DateRange::new(Date::MAX - 2, Date::MAX).unwrap();
        assert_eq!(r.iter().count(), 3);
        assert_eq!(r.iter().last(), Some(Date::MAX));
    }
}
