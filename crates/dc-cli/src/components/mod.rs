pub mod generate;
pub mod holidays;
pub mod regions;
pub mod selection;
