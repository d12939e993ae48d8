//! Default values for the dcalendario configuration.
//!
//! Every value here can be overridden by an environment variable of the same
//! name (see [`crate::settings::Settings::from_env`]).  Only primitive types
//! live in this module.

/// Maximum span of a generated table, in years.  A range is rejected when
/// it covers more than `DCAL_MAX_YEARS * 366` days.
pub static DCAL_MAX_YEARS: u32 = 10;

/// Default first day of the generated table.
pub static DCAL_DEFAULT_START: &str = "2020-01-01";

/// Default last day of the generated table.
pub static DCAL_DEFAULT_END: &str = "2025-12-31";

/// Default CSV column separator.
pub static DCAL_CSV_DELIMITER: u8 = b';';

/// Default output stem; also the SQL table name and the worksheet name.
pub static DCAL_TABLE_NAME: &str = "dCalendario";

/// Number of rows the CLI prints as a preview after generation.
pub static DCAL_PREVIEW_ROWS: usize = 20;
