//! `HolidayRule` — how a holiday's date is found in a given year.

use dc_time::Date;

/// Where a holiday falls within its year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HolidayDate {
    /// Same month and day every year.
    Fixed {
        /// Month (1–12).
        month: u8,
        /// Day of the month.
        day: u8,
    },
    /// A fixed number of days from Easter Sunday (negative = before).
    EasterOffset(i32),
}

/// A named holiday rule, optionally observed only from a given year on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HolidayRule {
    /// Portuguese name of the holiday.
    pub name: &'static str,
    /// Date rule.
    pub date: HolidayDate,
    /// First year in which the holiday is observed.
    pub since: Option<u16>,
}

impl HolidayRule {
    /// A holiday on `day`/`month` every year.
    pub const fn fixed(name: &'static str, month: u8, day: u8) -> Self {
        Self {
            name,
            date: HolidayDate::Fixed { month, day },
            since: None,
        }
    }

    /// A holiday `offset` days from Easter Sunday.
    pub const fn easter(name: &'static str, offset: i32) -> Self {
        Self {
            name,
            date: HolidayDate::EasterOffset(offset),
            since: None,
        }
    }

    /// Restrict the rule to `year` and later.
    pub const fn since(mut self, year: u16) -> Self {
        self.since = Some(year);
        self
    }

    /// Return `true` if the rule is observed in `year`.
    pub fn is_active(&self, year: u16) -> bool {
        self.since.map_or(true, |first| year >= first)
    }

    /// Resolve the rule in `year`, given that year's Easter Sunday.
    ///
    /// Returns `None` when the rule is not yet active or the fixed date does
    /// not exist in that year.
    pub fn resolve(&self, year: u16, easter: Date) -> Option<Date> {
        if !self.is_active(year) {
            return None;
        }
        match self.date {
            HolidayDate::Fixed { month, day } => Date::from_ymd(year, month, day).ok(),
            HolidayDate::EasterOffset(offset) => easter.add_days(offset).ok(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dc_time::easter_sunday;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn fixed_rule() {
        let r = HolidayRule::fixed("Natal", 12, 25);
        assert_eq!(r.resolve(2024, easter_sunday(2024)), Some(date(2024, 12, 25)));
    }

    #[test]
    fn easter_rule() {
        let r = HolidayRule::easter("Paixão de Cristo", -2);
        assert_eq!(r.resolve(2025, easter_sunday(2025)), Some(date(2025, 4, 18)));
    }

    #[test]
    fn inactive_before_first_year() {
        let r = HolidayRule::fixed("Revolução Constitucionalista", 7, 9).since(1997);
        assert!(!r.is_active(1996));
        assert_eq!(r.resolve(1996, easter_sunday(1996)), None);
        assert_eq!(r.resolve(1997, easter_sunday(1997)), Some(date(1997, 7, 9)));
    }
}
