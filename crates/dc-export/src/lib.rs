//! # dc-export
//!
//! Serializes a [`DateDimension`] into one of the supported download
//! formats: delimited text, an XLSX workbook, JSON records, or a SQL script.
//!
//! ```
//! use dc_dimension::DateDimensionBuilder;
//! use dc_export::{export, ExportOptions};
//! use dc_time::Date;
//!
//! let d = Date::from_ymd(2024, 12, 25).unwrap();
//! let table = DateDimensionBuilder::new(d, d).build().unwrap();
//! let out = export(&table, "csv".parse().unwrap(), &ExportOptions::default()).unwrap();
//! assert_eq!(out.mime, "text/csv");
//! assert_eq!(out.file_name("dCalendario"), "dCalendario.csv");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

use dc_core::errors::Result;
use dc_dimension::DateDimension;

// ── Modules ───────────────────────────────────────────────────────────────────

/// Delimited-text exporter.
pub mod delimited;

/// `ExportFormat` — format identifiers, MIME types and extensions.
pub mod format;

/// JSON records exporter.
pub mod json;

/// `ExportOptions`.
pub mod options;

/// SQL script exporter.
pub mod sql;

/// XLSX workbook exporter.
pub mod xlsx;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use format::ExportFormat;
pub use options::ExportOptions;

/// An encoded table, ready to be written or downloaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    /// Encoded payload.
    pub bytes: Vec<u8>,
    /// MIME type of the payload.
    pub mime: &'static str,
    /// File extension, without the dot.
    pub extension: &'static str,
}

impl Export {
    /// `"{stem}.{extension}"`.
    pub fn file_name(&self, stem: &str) -> String {
        format!("{stem}.{}", self.extension)
    }
}

/// Encode `table` in `format`.
pub fn export(table: &DateDimension, format: ExportFormat, options: &ExportOptions) -> Result<Export> {
    let bytes = match format {
        ExportFormat::Csv => delimited::to_csv(table, options.csv_delimiter)?,
        ExportFormat::Xlsx => xlsx::to_xlsx(table, &options.table_name)?,
        ExportFormat::Json => json::to_json(table)?,
        ExportFormat::Sql => sql::to_sql(table, &options.table_name)?,
    };
    log::info!(
        "exported {} rows as {format} ({} bytes)",
        table.len(),
        bytes.len()
    );
    Ok(Export {
        bytes,
        mime: format.mime(),
        extension: format.extension(),
    })
}

/// Encode `table` in the format named by `format`, case-insensitively.
///
/// Unknown names fail with `Error::UnknownFormat` before anything is encoded.
pub fn export_named(table: &DateDimension, format: &str, options: &ExportOptions) -> Result<Export> {
    export(table, format.parse()?, options)
}
