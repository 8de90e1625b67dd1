//! Path management for the expense tracker
//!
//! ## Path Resolution Order
//!
//! 1. `--data-dir` flag or `EXPENSE_TRACKER_DATA_DIR` environment variable
//! 2. Platform data directory (`~/.local/share/expense-tracker` and equivalents)
//! 3. `./data` relative to the working directory

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::ExpenseError;

/// Environment variable that overrides the data directory
pub const DATA_DIR_ENV: &str = "EXPENSE_TRACKER_DATA_DIR";

/// Manages all paths used by the expense tracker
#[derive(Debug, Clone)]
pub struct TrackerPaths {
    /// Directory holding expenses.json, expenses.csv and config.json
    data_dir: PathBuf,
}

impl TrackerPaths {
    /// Resolve paths from an explicit override or the platform default
    pub fn resolve(data_dir: Option<PathBuf>) -> Self {
        let data_dir = data_dir.unwrap_or_else(default_data_dir);
        Self { data_dir }
    }

    /// Create TrackerPaths with a custom data directory (useful for testing)
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Get the data directory
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Get the path to expenses.json
    pub fn expenses_file(&self) -> PathBuf {
        self.data_dir.join("expenses.json")
    }

    /// Get the path to the CSV export
    pub fn export_file(&self) -> PathBuf {
        self.data_dir.join("expenses.csv")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.data_dir.join("config.json")
    }

    /// Ensure the data directory exists. Idempotent.
    pub fn ensure_directories(&self) -> Result<(), ExpenseError> {
        std::fs::create_dir_all(&self.data_dir)
            .map_err(|e| ExpenseError::Io(format!("Failed to create data directory: {}", e)))
    }
}

fn default_data_dir() -> PathBuf {
    ProjectDirs::from("", "", "expense-tracker")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("data"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_data_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_data_dir(temp_dir.path());

        assert_eq!(paths.data_dir(), temp_dir.path());
        assert_eq!(paths.expenses_file(), temp_dir.path().join("expenses.json"));
        assert_eq!(paths.export_file(), temp_dir.path().join("expenses.csv"));
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
    }

    #[test]
    fn test_resolve_prefers_override() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::resolve(Some(temp_dir.path().to_path_buf()));
        assert_eq!(paths.data_dir(), temp_dir.path());
    }

    #[test]
    fn test_ensure_directories_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_data_dir(temp_dir.path().join("nested").join("data"));

        paths.ensure_directories().unwrap();
        paths.ensure_directories().unwrap();

        assert!(paths.data_dir().exists());
    }
}
