//! Process-wide settings.
//!
//! [`Settings`] collects the defaults of [`crate::config`] after applying
//! environment overrides.  The resolved instance is a process-wide singleton
//! held in a `std::sync::OnceLock`; it is never mutated after initialisation,
//! so concurrent readers need no locking.

use std::sync::OnceLock;

use crate::config;
use crate::errors::{Error, Result};

/// Resolved configuration values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Maximum range span in years.
    pub max_years: u32,
    /// Default start date, `YYYY-MM-DD`.
    pub default_start: String,
    /// Default end date, `YYYY-MM-DD`.
    pub default_end: String,
    /// CSV delimiter byte.
    pub csv_delimiter: u8,
    /// Output stem / SQL table name / worksheet name.
    pub table_name: String,
    /// Rows printed by the CLI preview.
    pub preview_rows: usize,
}

static INSTANCE: OnceLock<Settings> = OnceLock::new();

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_years: config::DCAL_MAX_YEARS,
            default_start: config::DCAL_DEFAULT_START.to_string(),
            default_end: config::DCAL_DEFAULT_END.to_string(),
            csv_delimiter: config::DCAL_CSV_DELIMITER,
            table_name: config::DCAL_TABLE_NAME.to_string(),
            preview_rows: config::DCAL_PREVIEW_ROWS,
        }
    }
}

impl Settings {
    /// Return a reference to the global singleton.
    ///
    /// The first call resolves the settings from the environment.  Invalid
    /// overrides are logged and replaced by the built-in defaults.
    pub fn instance() -> &'static Settings {
        INSTANCE.get_or_init(|| {
            Settings::from_env().unwrap_or_else(|e| {
                log::warn!("ignoring environment overrides: {e}");
                Settings::default()
            })
        })
    }

    /// Resolve settings from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve settings from an arbitrary key lookup.
    ///
    /// Keys are the names of the statics in [`crate::config`].  Missing keys
    /// keep their default; present but malformed values are an error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut s = Settings::default();

        if let Some(v) = lookup("DCAL_MAX_YEARS") {
            s.max_years = v.trim().parse().map_err(|_| {
                Error::InvalidArgument(format!("DCAL_MAX_YEARS must be a positive integer, got {v:?}"))
            })?;
            if s.max_years == 0 {
                return Err(Error::InvalidArgument("DCAL_MAX_YEARS must be at least 1".into()));
            }
        }
        if let Some(v) = lookup("DCAL_DEFAULT_START") {
            s.default_start = v.trim().to_string();
        }
        if let Some(v) = lookup("DCAL_DEFAULT_END") {
            s.default_end = v.trim().to_string();
        }
        if let Some(v) = lookup("DCAL_CSV_DELIMITER") {
            s.csv_delimiter = parse_delimiter(&v)?;
        }
        if let Some(v) = lookup("DCAL_TABLE_NAME") {
            let v = v.trim();
            if v.is_empty() {
                return Err(Error::InvalidArgument("DCAL_TABLE_NAME must not be empty".into()));
            }
            s.table_name = v.to_string();
        }
        if let Some(v) = lookup("DCAL_PREVIEW_ROWS") {
            s.preview_rows = v.trim().parse().map_err(|_| {
                Error::InvalidArgument(format!("DCAL_PREVIEW_ROWS must be an integer, got {v:?}"))
            })?;
        }
        Ok(s)
    }
}

/// Parse a single-byte column delimiter.
///
/// `"\t"` and `"tab"` are accepted as spellings of the tab character.
pub fn parse_delimiter(raw: &str) -> Result<u8> {
    match raw {
        "\\t" | "tab" | "\t" => return Ok(b'\t'),
        _ => {}
    }
    match raw.as_bytes() {
        [b] if b.is_ascii() && !b.is_ascii_alphanumeric() && *b != b'\n' && *b != b'"' => Ok(*b),
        _ => Err(Error::InvalidArgument(format!(
            "delimiter must be a single ASCII punctuation or whitespace character, got {raw:?}"
        ))),
    }
}
