//! # dc-time
//!
//! Calendar primitives for the date dimension: the serial `Date` type,
//! Portuguese-labelled `Weekday` and `Month`, civil and ISO week numbering,
//! the Easter calculator, and inclusive date ranges.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Date` type.
pub mod date;

/// Easter Sunday computation.
pub mod easter;

/// `Month` — month of the year.
pub mod month;

/// `DateRange` — inclusive, validated span of days.
pub mod range;

/// Civil (Sunday-anchored) and ISO-8601 week numbering.
pub mod week;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use date::Date;
pub use easter::easter_sunday;
pub use month::Month;
pub use range::{DateRange, Days};
pub use week::{civil_week, iso_week, IsoWeek};
pub use weekday::Weekday;
