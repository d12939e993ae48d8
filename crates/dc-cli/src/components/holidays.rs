use dc_core::errors::Result;
use dc_holidays::{BrazilCalendar, HolidayOccurrence};

use super::selection::SelectionArgs;

/// List the national and state holidays of one year
#[derive(clap::Args, Debug)]
#[command(about, long_about = None)]
pub struct HolidaysArgs {
    /// Calendar year
    #[arg(value_parser = clap::value_parser!(u16).range(1..=9999))]
    pub year: u16,

    #[command(flatten)]
    pub selection: SelectionArgs,
}

/// The year's holidays, national first, in date order within each group.
pub fn list_holidays(args: &HolidaysArgs) -> Vec<HolidayOccurrence> {
    let calendar =
        BrazilCalendar::with_regions(args.selection.holiday_config(), &args.selection.regions());
    calendar.holidays_in_year(args.year)
}

pub fn handle_holidays(args: HolidaysArgs) -> Result<()> {
    for h in list_holidays(&args) {
        let weekday = h.date.weekday().name_pt();
        match h.region {
            Some(region) => println!("{}  {:<13}  {}  [{region}]", h.date, weekday, h.name),
            None => println!("{}  {:<13}  {}", h.date, weekday, h.name),
        }
    }
    Ok(())
}
