use dc_holidays::{HolidayConfig, ALL_REGIONS};

/// Holiday and region selection shared by the subcommands.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct SelectionArgs {
    /// State to include, by name or UF code. Repeatable
    #[arg(long = "region", short = 'r')]
    pub regions: Vec<String>,

    /// Include every state
    #[arg(long, default_value_t = false)]
    pub all_regions: bool,

    /// Leave out Carnival Monday and Tuesday
    #[arg(long, default_value_t = false)]
    pub no_carnival: bool,

    /// Leave out Corpus Christi
    #[arg(long, default_value_t = false)]
    pub no_corpus_christi: bool,

    /// Include Ash Wednesday
    #[arg(long, default_value_t = false)]
    pub ash_wednesday: bool,

    /// Include Christmas Eve
    #[arg(long, default_value_t = false)]
    pub christmas_eve: bool,

    /// Include New Year's Eve
    #[arg(long, default_value_t = false)]
    pub new_years_eve: bool,
}

impl SelectionArgs {
    pub fn holiday_config(&self) -> HolidayConfig {
        HolidayConfig {
            carnival: !self.no_carnival,
            ash_wednesday: self.ash_wednesday,
            corpus_christi: !self.no_corpus_christi,
            christmas_eve: self.christmas_eve,
            new_years_eve: self.new_years_eve,
        }
    }

    pub fn regions(&self) -> Vec<String> {
        if self.all_regions {
            vec![ALL_REGIONS.to_string()]
        } else {
            self.regions.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_selection_matches_default_config() {
        let args = SelectionArgs::default();
        assert_eq!(args.holiday_config(), HolidayConfig::default());
        assert!(args.regions().is_empty());
    }

    #[test]
    fn all_regions_overrides_list() {
        let args = SelectionArgs {
            regions: vec!["SP".into()],
            all_regions: true,
            ..Default::default()
        };
        assert_eq!(args.regions(), ["Todos"]);
    }
}
