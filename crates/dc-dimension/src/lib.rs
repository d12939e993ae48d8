//! # dc-dimension
//!
//! The date-dimension builder: one row per day of a validated range, with
//! calendar attributes and the national and state holidays joined in.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `DateDimensionBuilder` and `generate`.
pub mod builder;

/// `DateDimensionRow`, column metadata and cells.
pub mod row;

/// `DateDimension` — the generated table.
pub mod table;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use builder::{generate, DateDimensionBuilder};
pub use row::{Cell, Column, ColumnKind, DateDimensionRow, COLUMNS};
pub use table::DateDimension;
