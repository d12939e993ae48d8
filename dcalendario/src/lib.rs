//! # dcalendario
//!
//! Generator for Brazilian date-dimension tables ("dCalendario"): one row per
//! day with calendar attributes, national holidays and optional state
//! holidays, exportable as CSV, XLSX, JSON or a SQL script.
//!
//! This crate is a **façade** that re-exports the workspace crates.
//! Application code should depend on this crate rather than the individual
//! `dc-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use dcalendario::dimension::generate;
//! use dcalendario::export::{export, ExportFormat, ExportOptions};
//! use dcalendario::holidays::HolidayConfig;
//! use dcalendario::time::Date;
//!
//! let start = Date::from_ymd(2024, 1, 1).unwrap();
//! let end = Date::from_ymd(2024, 12, 31).unwrap();
//! let table = generate(start, end, &HolidayConfig::default(), &["SP"]).unwrap();
//! assert_eq!(table.len(), 366);
//!
//! let csv = export(&table, ExportFormat::Csv, &ExportOptions::default()).unwrap();
//! assert_eq!(csv.file_name("dCalendario"), "dCalendario.csv");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error definitions, configuration defaults and settings.
pub use dc_core as core;

/// Dates, weekdays, months, week numbering, Easter and date ranges.
pub use dc_time as time;

/// National and state holiday catalog.
pub use dc_holidays as holidays;

/// Date-dimension builder and table.
pub use dc_dimension as dimension;

/// CSV, XLSX, JSON and SQL exporters.
pub use dc_export as export;

pub use dc_core::{Error, Result};
