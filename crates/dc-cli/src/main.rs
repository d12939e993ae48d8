use clap::{Parser, Subcommand};
use dotenv::dotenv;
use log::error;

use dc_core::errors::Result;

mod components;

use components::generate::{handle_generate, GenerateArgs};
use components::holidays::{handle_holidays, HolidaysArgs};
use components::regions::handle_regions;

/// Brazilian date-dimension (dCalendario) generator
#[derive(Parser, Debug)]
#[command(name = "dcalendario", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a date-dimension table and write it to disk
    Generate(GenerateArgs),
    /// List the national and state holidays of one year
    Holidays(HolidaysArgs),
    /// List the known states and their holidays
    Regions,
}

fn main() {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(e) = _main(Cli::parse()) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn _main(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Generate(args) => handle_generate(args).map(|_| ()),
        Command::Holidays(args) => handle_holidays(args),
        Command::Regions => {
            handle_regions();
            Ok(())
        }
    }
}
