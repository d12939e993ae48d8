//! Delimited-text exporter.

use dc_core::errors::{Error, Result};
use dc_dimension::{Cell, DateDimension, COLUMNS};

fn csv_error(e: impl std::fmt::Display) -> Error {
    Error::Export(format!("CSV error: {e}"))
}

fn field(cell: Cell<'_>) -> String {
    match cell {
        Cell::Date(d) => d.to_string(),
        Cell::Int(n) => n.to_string(),
        Cell::Text(s) => s.to_string(),
        Cell::Bool(b) => b.to_string(),
        Cell::Null => String::new(),
    }
}

/// Encode `table` as UTF-8 delimited text with a header row.
pub fn to_csv(table: &DateDimension, delimiter: u8) -> Result<Vec<u8>> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(Vec::new());

    wtr.write_record(COLUMNS.iter().map(|c| c.name))
        .map_err(csv_error)?;
    for row in table {
        wtr.write_record(row.cells().into_iter().map(field))
            .map_err(csv_error)?;
    }

    wtr.into_inner().map_err(csv_error)
}
