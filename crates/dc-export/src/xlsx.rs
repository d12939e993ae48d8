//! Workbook exporter.

use rust_xlsxwriter::{Format, Workbook};

use dc_core::errors::{Error, Result};
use dc_dimension::{Cell, DateDimension, COLUMNS};

fn xlsx_error(e: impl std::fmt::Display) -> Error {
    Error::Export(format!("Failed to create Excel: {e}"))
}

/// Encode `table` as a single-sheet workbook named `sheet_name`.
///
/// The header row is bold and frozen; `Data` cells hold the spreadsheet
/// serial formatted as `yyyy-mm-dd`, and missing values are left blank.
pub fn to_xlsx(table: &DateDimension, sheet_name: &str) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();
    let date = Format::new().set_num_format("yyyy-mm-dd");

    let sheet = workbook.add_worksheet();
    sheet.set_name(sheet_name).map_err(xlsx_error)?;

    for (col, column) in COLUMNS.iter().enumerate() {
        sheet
            .write_with_format(0, col as u16, column.name, &header)
            .map_err(xlsx_error)?;
    }

    for (i, row) in table.iter().enumerate() {
        let r = i as u32 + 1;
        for (col, cell) in row.cells().into_iter().enumerate() {
            let c = col as u16;
            match cell {
                Cell::Date(d) => {
                    sheet
                        .write_with_format(r, c, f64::from(d.serial()), &date)
                        .map_err(xlsx_error)?;
                }
                Cell::Int(n) => {
                    sheet.write(r, c, n as f64).map_err(xlsx_error)?;
                }
                Cell::Text(s) => {
                    sheet.write(r, c, s).map_err(xlsx_error)?;
                }
                Cell::Bool(b) => {
                    sheet.write(r, c, b).map_err(xlsx_error)?;
                }
                Cell::Null => {}
            }
        }
    }

    sheet.set_freeze_panes(1, 0).map_err(xlsx_error)?;
    sheet.autofit();

    workbook.save_to_buffer().map_err(xlsx_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dc_dimension::DateDimensionBuilder;
    use dc_time::Date;

    #[test]
    fn produces_zip_container() {
        let start = Date::from_ymd(2024, 1, 1).unwrap();
        let end = Date::from_ymd(2024, 1, 31).unwrap();
        let table = DateDimensionBuilder::new(start, end).build().unwrap();
        let bytes = to_xlsx(&table, "dCalendario").unwrap();
        assert!(bytes.starts_with(b"PK"));
    }

    #[test]
    fn invalid_sheet_name_is_an_export_error() {
        let d = Date::from_ymd(2024, 1, 1).unwrap();
        let table = DateDimensionBuilder::new(d, d).build().unwrap();
        assert!(matches!(to_xlsx(&table, "a[b]"), Err(Error::Export(_))));
    }
}
