//! Week-of-year numbering.
//!
//! Two independent counters are provided and they legitimately disagree
//! around the turn of the year:
//!
//! * [`civil_week`]: Sunday-anchored.  Week 1 is the week containing
//!   January 1 and a new week starts on every Sunday, so a year has 53 or
//!   54 (partial) weeks.
//! * [`iso_week`]: ISO-8601.  Weeks start on Monday and week 1 is the week
//!   containing the year's first Thursday; the last days of December may
//!   belong to week 1 of the following ISO year.
//!
//! For example, Monday 2025-12-29 is civil week 53 of 2025 and ISO week 1
//! of 2026.

use crate::date::Date;

/// Sunday-anchored week number (1–54) of `date` within its calendar year.
pub fn civil_week(date: Date) -> u8 {
    let jan1 = date.start_of_year().weekday().number_from_sunday() as u16 - 1;
    let doy0 = date.day_of_year() - 1;
    ((doy0 + jan1) / 7 + 1) as u8
}

/// An ISO-8601 week: the week-numbering year and the week within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IsoWeek {
    /// ISO week-numbering year (may differ from the calendar year).
    pub year: i32,
    /// Week number (1–53).
    pub week: u8,
}

impl std::fmt::Display for IsoWeek {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-W{:02}", self.year, self.week)
    }
}

/// ISO-8601 week of `date`.
pub fn iso_week(date: Date) -> IsoWeek {
    let year = date.year() as i32;
    let doy = date.day_of_year() as i32;
    let wd = date.weekday().number_from_monday() as i32;
    let week = (doy - wd + 10) / 7;
    if week < 1 {
        IsoWeek {
            year: year - 1,
            week: iso_weeks_in_year(year - 1),
        }
    } else if week > iso_weeks_in_year(year) as i32 {
        IsoWeek {
            year: year + 1,
            week: 1,
        }
    } else {
        IsoWeek {
            year,
            week: week as u8,
        }
    }
}

/// Number of ISO weeks (52 or 53) in the ISO year `year`.
///
/// A year has 53 weeks when it starts on a Thursday, or when it is a leap
/// year starting on a Wednesday.
pub fn iso_weeks_in_year(year: i32) -> u8 {
    // Weekday of December 31 (0 = Sunday) of `y`.
    let p = |y: i32| (y + y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400)).rem_euclid(7);
    if p(year) == 4 || p(year - 1) == 3 {
        53
    } else {
        52
    }
}
