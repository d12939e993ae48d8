//! `HolidayConfig` — which optional national observances to include.

use serde::{Deserialize, Serialize};

/// Flags selecting the optional national observances.
///
/// The mandatory federal holidays are always included; these flags only
/// toggle the optional ones.  When deserialized, the original Portuguese
/// keys are used and any missing key takes its [`Default`] value.
///
/// ```
/// use dc_holidays::HolidayConfig;
/// let cfg: HolidayConfig = serde_json::from_str(r#"{"incluir_carnaval": false}"#).unwrap();
/// assert!(!cfg.carnival);
/// assert!(cfg.corpus_christi);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct HolidayConfig {
    /// Carnival Monday and Tuesday (Easter − 48 and − 47 days).
    #[serde(rename = "incluir_carnaval")]
    pub carnival: bool,
    /// Ash Wednesday (Easter − 46 days).
    #[serde(rename = "incluir_cinzas")]
    pub ash_wednesday: bool,
    /// Corpus Christi (Easter + 60 days).
    #[serde(rename = "incluir_corpus_christi")]
    pub corpus_christi: bool,
    /// Christmas Eve (December 24).
    #[serde(rename = "incluir_vespera_natal")]
    pub christmas_eve: bool,
    /// New Year's Eve (December 31).
    #[serde(rename = "incluir_vespera_ano_novo")]
    pub new_years_eve: bool,
}

impl Default for HolidayConfig {
    /// Carnival and Corpus Christi on, everything else off.
    fn default() -> Self {
        Self {
            carnival: true,
            ash_wednesday: false,
            corpus_christi: true,
            christmas_eve: false,
            new_years_eve: false,
        }
    }
}

impl HolidayConfig {
    /// Only the mandatory federal holidays.
    pub fn mandatory_only() -> Self {
        Self {
            carnival: false,
            ash_wednesday: false,
            corpus_christi: false,
            christmas_eve: false,
            new_years_eve: false,
        }
    }

    /// Every optional observance switched on.
    pub fn all() -> Self {
        Self {
            carnival: true,
            ash_wednesday: true,
            corpus_christi: true,
            christmas_eve: true,
            new_years_eve: true,
        }
    }
}
