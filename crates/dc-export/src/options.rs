//! `ExportOptions` — knobs shared by the exporters.

use dc_core::{config, Settings};

/// Options applied by the exporters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    /// CSV column separator.
    pub csv_delimiter: u8,
    /// SQL table name and worksheet name.
    pub table_name: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            csv_delimiter: config::DCAL_CSV_DELIMITER,
            table_name: config::DCAL_TABLE_NAME.to_string(),
        }
    }
}

impl ExportOptions {
    /// Options taken from resolved settings.
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            csv_delimiter: settings.csv_delimiter,
            table_name: settings.table_name.clone(),
        }
    }

    /// Set the CSV delimiter.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.csv_delimiter = delimiter;
        self
    }

    /// Set the table name.
    pub fn with_table_name(mut self, name: impl Into<String>) -> Self {
        self.table_name = name.into();
        self
    }
}

/// `[A-Za-z_][A-Za-z0-9_]*`
pub fn is_identifier(s: &str) -> bool {
    let mut bytes = s.bytes();
    match bytes.next() {
        Some(b) if b.is_ascii_alphabetic() || b == b'_' => {}
        _ => return false,
    }
    bytes.all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let o = ExportOptions::default();
        assert_eq!(o.csv_delimiter, b';');
        assert_eq!(o.table_name, "dCalendario");
    }

    #[test]
    fn identifiers() {
        assert!(is_identifier("dCalendario"));
        assert!(is_identifier("_dim_data2"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("2dim"));
        assert!(!is_identifier("dim data"));
        assert!(!is_identifier("dim;DROP"));
    }
}
