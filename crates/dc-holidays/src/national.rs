//! Brazilian national holidays.
//!
//! The federal holidays below are always observed:
//! * Ano Novo (Jan 1)
//! * Paixão de Cristo, Good Friday (Easter − 2)
//! * Domingo de Páscoa (Easter)
//! * Tiradentes (Apr 21)
//! * Dia do Trabalho (May 1)
//! * Independência do Brasil (Sep 7)
//! * Nossa Sra. Aparecida (Oct 12)
//! * Finados (Nov 2)
//! * Proclamação da República (Nov 15)
//! * Natal (Dec 25)
//!
//! Carnival, Ash Wednesday, Corpus Christi, Christmas Eve and New Year's Eve
//! are optional and selected through [`HolidayConfig`].

use dc_time::easter_sunday;

use crate::config::HolidayConfig;
use crate::occurrence::HolidayOccurrence;
use crate::rule::HolidayRule;

/// Fixed-date federal holidays.
pub static FIXED: &[HolidayRule] = &[
    HolidayRule::fixed("Ano Novo", 1, 1),
    HolidayRule::fixed("Tiradentes", 4, 21),
    HolidayRule::fixed("Dia do Trabalho", 5, 1),
    HolidayRule::fixed("Independência do Brasil", 9, 7),
    HolidayRule::fixed("Nossa Sra. Aparecida", 10, 12),
    HolidayRule::fixed("Finados", 11, 2),
    HolidayRule::fixed("Proclamação da República", 11, 15),
    HolidayRule::fixed("Natal", 12, 25),
];

/// Easter-relative holidays that are always observed.
pub static MOVABLE: &[HolidayRule] = &[
    HolidayRule::easter("Paixão de Cristo", -2),
    HolidayRule::easter("Domingo de Páscoa", 0),
];

static CARNIVAL: &[HolidayRule] = &[
    HolidayRule::easter("Carnaval (segunda-feira)", -48),
    HolidayRule::easter("Carnaval (terça-feira)", -47),
];
static ASH_WEDNESDAY: &[HolidayRule] = &[HolidayRule::easter("Quarta-feira de Cinzas", -46)];
static CORPUS_CHRISTI: &[HolidayRule] = &[HolidayRule::easter("Corpus Christi", 60)];
static CHRISTMAS_EVE: &[HolidayRule] = &[HolidayRule::fixed("Véspera de Natal", 12, 24)];
static NEW_YEARS_EVE: &[HolidayRule] = &[HolidayRule::fixed("Véspera de Ano Novo", 12, 31)];

/// The optional rule groups enabled by `config`.
fn optional_rules(config: &HolidayConfig) -> impl Iterator<Item = &'static HolidayRule> {
    [
        (config.carnival, CARNIVAL),
        (config.ash_wednesday, ASH_WEDNESDAY),
        (config.corpus_christi, CORPUS_CHRISTI),
        (config.christmas_eve, CHRISTMAS_EVE),
        (config.new_years_eve, NEW_YEARS_EVE),
    ]
    .into_iter()
    .filter(|(on, _)| *on)
    .flat_map(|(_, rules)| rules.iter())
}

/// National holidays observed in `year` under `config`, sorted by date.
///
/// On a shared date the fixed-date holiday is listed first (e.g. Tiradentes
/// before a Good Friday falling on April 21).
pub fn national_holidays(year: u16, config: &HolidayConfig) -> Vec<HolidayOccurrence> {
    let easter = easter_sunday(year);
    let mut out: Vec<HolidayOccurrence> = FIXED
        .iter()
        .chain(MOVABLE)
        .chain(optional_rules(config))
        .filter_map(|rule| {
            rule.resolve(year, easter)
                .map(|date| HolidayOccurrence::national(date, rule.name))
        })
        .collect();
    // Stable: catalog order is kept among same-date entries.
    out.sort_by_key(|h| h.date);
    log::debug!("{} national holidays in {year}", out.len());
    out
}
