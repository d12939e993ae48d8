//! `Date` type.
//!
//! Dates are stored as a serial number of days counted from the spreadsheet
//! epoch, **December 30, 1899** (serial 0).  This is the day count used by
//! common spreadsheet software, so 1970-01-01 is serial 25 569 and dates
//! before the epoch have negative serials.
//!
//! # Range
//! Any proleptic-Gregorian date from 0001-01-01 to 9999-12-31.

use std::str::FromStr;

use dc_core::errors::{Error, Result};

use crate::month::Month;
use crate::weekday::Weekday;

/// A calendar date represented as a spreadsheet serial number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

/// Serial of 1970-01-01, the Unix epoch.
pub const UNIX_EPOCH_SERIAL: i32 = 25_569;

// ── Constants ─────────────────────────────────────────────────────────────────

impl Date {
    /// Minimum valid date: January 1, 0001.
    pub const MIN: Date = Date(serial_from_ymd(1, 1, 1));

    /// Maximum valid date: December 31, 9999.
    pub const MAX: Date = Date(serial_from_ymd(9999, 12, 31));

    /// The spreadsheet epoch, December 30, 1899.
    pub const SPREADSHEET_EPOCH: Date = Date(0);

    /// The Unix epoch, January 1, 1970.
    pub const UNIX_EPOCH: Date = Date(UNIX_EPOCH_SERIAL);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a spreadsheet serial number.
    pub fn from_serial(serial: i32) -> Result<Self> {
        let d = Date(serial);
        if d < Self::MIN || d > Self::MAX {
            return Err(Error::Date(format!(
                "serial {serial} outside [{}, {}]",
                Self::MIN.0,
                Self::MAX.0
            )));
        }
        Ok(d)
    }

    /// Create a date from year (1–9999), month (1–12), and day-of-month.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        if !(1..=9999).contains(&year) {
            return Err(Error::Date(format!("year {year} out of range [1, 9999]")));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year:04}-{month:02}"
            )));
        }
        Ok(Date(serial_from_ymd(year as i32, month as u32, day as u32)))
    }

    /// Create a date from its decimal `YYYYMMDD` key (e.g. `20240709`).
    pub fn from_int_key(key: u32) -> Result<Self> {
        let year = key / 10_000;
        let month = (key / 100) % 100;
        let day = key % 100;
        if year > 9999 {
            return Err(Error::Date(format!("integer key {key} is not a YYYYMMDD date")));
        }
        Self::from_ymd(year as u16, month as u8, day as u8)
    }

    /// Create a date from components already known to be valid.
    pub(crate) fn from_ymd_unchecked(year: u16, month: u8, day: u8) -> Self {
        debug_assert!(Self::from_ymd(year, month, day).is_ok());
        Date(serial_from_ymd(year as i32, month as u32, day as u32))
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the spreadsheet serial number (days since 1899-12-30).
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return the number of days since 1970-01-01 (negative before it).
    pub fn unix_days(&self) -> i32 {
        self.0 - UNIX_EPOCH_SERIAL
    }

    /// Return `(year, month, day)`.
    pub fn ymd(&self) -> (u16, u8, u8) {
        ymd_from_serial(self.0)
    }

    /// Return the year (1–9999).
    pub fn year(&self) -> u16 {
        self.ymd().0
    }

    /// Return the month number (1–12).
    pub fn month(&self) -> u8 {
        self.ymd().1
    }

    /// Return the month as an enum.
    pub fn month_of_year(&self) -> Month {
        Month::ALL[self.month() as usize - 1]
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        self.ymd().2
    }

    /// Return the 1-based ordinal day of the year (1–366).
    pub fn day_of_year(&self) -> u16 {
        let y = self.year();
        (self.0 - serial_from_ymd(y as i32, 1, 1) + 1) as u16
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // 1970-01-01 was a Thursday (4 counting from Monday = 1).
        Weekday::from_monday_offset((self.unix_days() + 3).rem_euclid(7) as u8)
    }

    /// Return the decimal `YYYYMMDD` key, e.g. `20240709`.
    pub fn int_key(&self) -> u32 {
        let (y, m, d) = self.ymd();
        y as u32 * 10_000 + m as u32 * 100 + d as u32
    }

    /// Return the `YYYY-MM` label of the month containing this date.
    pub fn year_month(&self) -> String {
        let (y, m, _) = self.ymd();
        format!("{y:04}-{m:02}")
    }

    /// Return January 1 of this date's year.
    pub fn start_of_year(&self) -> Self {
        Date(serial_from_ymd(self.year() as i32, 1, 1))
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days.  Returns an error if the result is out of range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        self.0
            .checked_add(n)
            .ok_or_else(|| Error::Date("date arithmetic overflow".into()))
            .and_then(Self::from_serial)
    }

    /// Return the next calendar day, or `None` at [`Date::MAX`].
    pub fn succ(self) -> Option<Self> {
        (self < Self::MAX).then(|| Date(self.0 + 1))
    }

    /// Return the number of calendar days between `self` and `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: Date) -> i32 {
        other.0 - self.0
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

/// Panics if the result leaves the supported range, like integer overflow.
impl std::ops::Add<i32> for Date {
    type Output = Self;
    fn add(self, rhs: i32) -> Self {
        self.add_days(rhs).expect("date addition overflow")
    }
}

/// Panics if the result leaves the supported range, like integer overflow.
impl std::ops::Sub<i32> for Date {
    type Output = Self;
    fn sub(self, rhs: i32) -> Self {
        self.add_days(-rhs).expect("date subtraction underflow")
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

// ── Display / parsing ─────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = self.ymd();
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({self})")
    }
}

impl FromStr for Date {
    type Err = Error;

    /// Parse `YYYY-MM-DD` (ISO) or `DD/MM/YYYY` (Brazilian).
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let bad = || Error::Date(format!("cannot parse {s:?} as YYYY-MM-DD or DD/MM/YYYY"));
        let parts: Vec<&str> = if s.contains('-') {
            s.split('-').collect()
        } else {
            s.split('/').rev().collect()
        };
        let [y, m, d] = parts.as_slice() else {
            return Err(bad());
        };
        if y.len() != 4 || m.len() != 2 || d.len() != 2 {
            return Err(bad());
        }
        let field = |p: &str| {
            if p.bytes().all(|b| b.is_ascii_digit()) {
                p.parse::<u16>().map_err(|_| bad())
            } else {
                Err(bad())
            }
        };
        Self::from_ymd(field(*y)?, field(*m)? as u8, field(*d)? as u8)
    }
}

impl serde::Serialize for Date {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for Date {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(feature = "chrono")]
impl From<Date> for chrono::NaiveDate {
    fn from(d: Date) -> Self {
        let (y, m, day) = d.ymd();
        chrono::NaiveDate::from_ymd_opt(y as i32, m as u32, day as u32)
            .expect("every Date is a valid NaiveDate")
    }
}

#[cfg(feature = "chrono")]
impl TryFrom<chrono::NaiveDate> for Date {
    type Error = Error;
    fn try_from(d: chrono::NaiveDate) -> Result<Self> {
        use chrono::Datelike;
        u16::try_from(d.year())
            .map_err(|_| Error::Date(format!("year {} out of range [1, 9999]", d.year())))
            .and_then(|y| Date::from_ymd(y, d.month() as u8, d.day() as u8))
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => unreachable!(),
    }
}

/// Convert (year, month, day) to a spreadsheet serial number.
///
/// Counts days in 400-year eras of 146 097 days, with the year starting on
/// March 1 so that the leap day is the last day of the shifted year.
const fn serial_from_ymd(year: i32, month: u32, day: u32) -> i32 {
    let y = if month <= 2 { year - 1 } else { year };
    let era = (if y >= 0 { y } else { y - 399 }) / 400;
    let yoe = (y - era * 400) as u32;
    let mp = (month + 9) % 12;
    let doy = (153 * mp + 2) / 5 + day - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe as i32 - 719_468 + UNIX_EPOCH_SERIAL
}

/// Decompose a serial number into (year, month, day).
fn ymd_from_serial(serial: i32) -> (u16, u8, u8) {
    let z = serial - UNIX_EPOCH_SERIAL + 719_468;
    let era = (if z >= 0 { z } else { z - 146_096 }) / 146_097;
    let doe = (z - era * 146_097) as u32;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    let y = yoe as i32 + era * 400 + i32::from(m <= 2);
    (y as u16, m as u8, d as u8)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
