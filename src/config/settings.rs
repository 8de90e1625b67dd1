//! User settings for the expense tracker
//!
//! Stored as config.json next to the expense data. Every field has a default,
//! so a missing or partial file is fine.

use serde::{Deserialize, Serialize};

use super::paths::TrackerPaths;
use crate::error::ExpenseError;

/// Newest settings layout this build understands
pub const CURRENT_SCHEMA_VERSION: u32 = 1;

/// User settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when printing amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Copy a corrupted expenses.json aside before it can be overwritten
    #[serde(default = "default_preserve_corrupt")]
    pub preserve_corrupt_files: bool,
}

fn default_schema_version() -> u32 {
    CURRENT_SCHEMA_VERSION
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_preserve_corrupt() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            preserve_corrupt_files: default_preserve_corrupt(),
        }
    }
}

impl Settings {
    /// Load settings from disk, writing the defaults if the file doesn't exist
    pub fn load_or_create(paths: &TrackerPaths) -> Result<Self, ExpenseError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            let settings = Settings::default();
            settings.save(paths)?;
            return Ok(settings);
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| ExpenseError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| ExpenseError::Config(format!("Failed to parse settings file: {}", e)))?;

        if settings.schema_version > CURRENT_SCHEMA_VERSION {
            return Err(ExpenseError::Config(format!(
                "Settings schema version {} is newer than supported version {}",
                settings.schema_version, CURRENT_SCHEMA_VERSION
            )));
        }

        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TrackerPaths) -> Result<(), ExpenseError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ExpenseError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| ExpenseError::Io(format!("Failed to write settings file: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.schema_version, 1);
        assert_eq!(settings.currency_symbol, "$");
        assert!(settings.preserve_corrupt_files);
    }

    #[test]
    fn test_missing_file_writes_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_data_dir(temp_dir.path().join("data"));

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.currency_symbol, "$");
        assert!(paths.settings_file().exists());

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(paths.settings_file()).unwrap()).unwrap();
        assert_eq!(written["schema_version"], 1);
        assert_eq!(written["preserve_corrupt_files"], true);
    }

    #[test]
    fn test_newer_schema_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_data_dir(temp_dir.path());
        std::fs::write(paths.settings_file(), r#"{"schema_version": 2}"#).unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, ExpenseError::Config(_)));
        assert!(err.to_string().contains("schema version 2"));
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_data_dir(temp_dir.path());

        let settings = Settings {
            currency_symbol: "€".to_string(),
            preserve_corrupt_files: false,
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "€");
        assert!(!loaded.preserve_corrupt_files);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_data_dir(temp_dir.path());
        std::fs::write(paths.settings_file(), r#"{"currency_symbol": "£"}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "£");
        assert!(loaded.preserve_corrupt_files);
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_data_dir(temp_dir.path());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, ExpenseError::Config(_)));
    }
}
