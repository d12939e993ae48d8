use std::path::PathBuf;

use log::info;

use dc_core::errors::{Error, Result};
use dc_core::settings::parse_delimiter;
use dc_core::Settings;
use dc_dimension::{DateDimension, DateDimensionBuilder, DateDimensionRow};
use dc_export::{export, ExportFormat, ExportOptions};
use dc_time::Date;

use super::selection::SelectionArgs;

/// Generate a date-dimension table and write it to disk
#[derive(clap::Args, Debug)]
#[command(about, long_about = None)]
pub struct GenerateArgs {
    /// First day, YYYY-MM-DD or DD/MM/YYYY. Defaults to DCAL_DEFAULT_START
    #[arg(long, short)]
    pub start: Option<Date>,

    /// Last day, YYYY-MM-DD or DD/MM/YYYY. Defaults to DCAL_DEFAULT_END
    #[arg(long, short)]
    pub end: Option<Date>,

    /// Output format: csv, xlsx, json or sql
    #[arg(long, short, default_value = "csv")]
    pub format: ExportFormat,

    /// CSV delimiter; "tab" for tabs. Defaults to DCAL_CSV_DELIMITER
    #[arg(long, short)]
    pub delimiter: Option<String>,

    /// File stem, SQL table name and sheet name. Defaults to DCAL_TABLE_NAME
    #[arg(long, short)]
    pub name: Option<String>,

    /// Directory the file is written to
    #[arg(long, short, default_value = ".")]
    pub output_dir: PathBuf,

    /// Maximum span in years. Defaults to DCAL_MAX_YEARS
    #[arg(long)]
    pub max_years: Option<u32>,

    /// Rows to print before writing. Defaults to DCAL_PREVIEW_ROWS
    #[arg(long)]
    pub preview: Option<usize>,

    #[command(flatten)]
    pub selection: SelectionArgs,
}

impl GenerateArgs {
    fn date_or(value: Option<Date>, fallback: &str) -> Result<Date> {
        match value {
            Some(d) => Ok(d),
            None => fallback.parse(),
        }
    }

    /// Build the table described by these arguments.
    pub fn table(&self, settings: &Settings) -> Result<DateDimension> {
        let start = Self::date_or(self.start, &settings.default_start)?;
        let end = Self::date_or(self.end, &settings.default_end)?;
        DateDimensionBuilder::new(start, end)
            .holiday_config(self.selection.holiday_config())
            .regions(&self.selection.regions())
            .max_years(self.max_years.unwrap_or(settings.max_years))
            .build()
    }

    /// Export options described by these arguments.
    pub fn options(&self, settings: &Settings) -> Result<ExportOptions> {
        let mut options = ExportOptions::from_settings(settings);
        if let Some(d) = &self.delimiter {
            options = options.with_delimiter(parse_delimiter(d)?);
        }
        if let Some(name) = &self.name {
            options = options.with_table_name(name.trim());
        }
        Ok(options)
    }
}

/// One preview line: date, short weekday and month names, week and holidays.
pub fn preview_line(row: &DateDimensionRow) -> String {
    format!(
        "{:<10}  {:<3}  {:<3}  {:>6}  {:<28}  {}",
        row.date.to_string(),
        row.date.weekday().short_name_pt(),
        row.date.month_of_year().short_name_pt(),
        row.week_number,
        row.national_holiday_name.unwrap_or(""),
        row.regional_holiday_name.as_deref().unwrap_or("")
    )
}

fn print_preview(table: &DateDimension, n: usize) {
    if n == 0 {
        return;
    }
    println!(
        "{:<10}  {:<3}  {:<3}  {:>6}  {:<28}  {}",
        "Data", "Dia", "Mês", "Semana", "Feriado", "Feriado Estadual"
    );
    for row in table.head(n) {
        println!("{}", preview_line(row));
    }
}

/// Run the `generate` subcommand; returns the path written.
pub fn handle_generate(args: GenerateArgs) -> Result<PathBuf> {
    let settings = Settings::instance();
    let table = args.table(settings)?;
    let options = args.options(settings)?;

    print_preview(&table, args.preview.unwrap_or(settings.preview_rows));

    let out = export(&table, args.format, &options)?;
    std::fs::create_dir_all(&args.output_dir)
        .map_err(|e| Error::Runtime(format!("cannot create {}: {e}", args.output_dir.display())))?;
    let path = args.output_dir.join(out.file_name(&options.table_name));
    std::fs::write(&path, &out.bytes)
        .map_err(|e| Error::Runtime(format!("cannot write {}: {e}", path.display())))?;

    info!("{} ({}) written to {}", out.file_name(&options.table_name), out.mime, path.display());
    Ok(path)
}
