//! JSON records exporter.

use dc_core::errors::{Error, Result};
use dc_dimension::DateDimension;

/// Encode `table` as a pretty-printed array of records.
///
/// Keys are the column names, dates are `YYYY-MM-DD`, missing holiday
/// fields are `null`, and non-ASCII text is written as UTF-8.
pub fn to_json(table: &DateDimension) -> Result<Vec<u8>> {
    serde_json::to_vec_pretty(table).map_err(|e| Error::Export(format!("JSON error: {e}")))
}
