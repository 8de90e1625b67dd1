//! Expense repository for JSON storage
//!
//! Manages loading and saving the expense collection to expenses.json. The
//! whole collection is read on every load and rewritten on every save.

use std::fmt;
use std::fs;
use std::path::PathBuf;

use chrono::Local;
use log::{debug, warn};

use crate::config::{Settings, TrackerPaths};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;

use super::file_io::{read_json, write_json_atomic};

/// A backing file that exists but could not be parsed
#[derive(Debug, Clone)]
pub struct Corruption {
    /// The damaged file
    pub path: PathBuf,
    /// Parser message
    pub reason: String,
}

impl fmt::Display for Corruption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string());
        write!(f, "Error: {} is corrupted. Initializing with an empty list.", name)
    }
}

/// Result of loading the collection, including whether the file was corrupted
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    pub expenses: Vec<Expense>,
    pub corruption: Option<Corruption>,
}

/// Repository for the expense collection
pub struct ExpenseStore {
    paths: TrackerPaths,
    preserve_corrupt_files: bool,
}

impl ExpenseStore {
    /// Create a new store, creating the data directory if needed
    pub fn new(paths: TrackerPaths, settings: &Settings) -> ExpenseResult<Self> {
        paths.ensure_directories()?;

        Ok(Self {
            paths,
            preserve_corrupt_files: settings.preserve_corrupt_files,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &TrackerPaths {
        &self.paths
    }

    /// Load the collection, describing any corruption instead of failing
    ///
    /// A missing file is an empty collection. A file that cannot be parsed is
    /// also an empty collection, with `corruption` set. A file that cannot be
    /// read at all is an error.
    pub fn load_checked(&self) -> ExpenseResult<LoadReport> {
        let path = self.paths.expenses_file();

        match read_json::<Vec<Expense>, _>(&path) {
            Ok(expenses) => {
                debug!("loaded {} expenses from {}", expenses.len(), path.display());
                Ok(LoadReport {
                    expenses,
                    corruption: None,
                })
            }
            Err(ExpenseError::Json(reason)) => {
                warn!("{}", reason);
                Ok(LoadReport {
                    expenses: Vec::new(),
                    corruption: Some(Corruption { path, reason }),
                })
            }
            Err(e) => Err(e),
        }
    }

    /// Load the collection; a corrupted file loads as empty
    pub fn load(&self) -> ExpenseResult<Vec<Expense>> {
        Ok(self.load_checked()?.expenses)
    }

    /// Overwrite the backing file with the full collection
    ///
    /// If the current file is corrupted and preservation is enabled, it is
    /// copied aside first.
    pub fn save(&self, expenses: &[Expense]) -> ExpenseResult<()> {
        if self.preserve_corrupt_files {
            self.preserve_if_corrupt()?;
        }

        write_json_atomic(self.paths.expenses_file(), expenses)?;
        debug!("saved {} expenses", expenses.len());
        Ok(())
    }

    /// Copy a corrupted backing file aside
    fn preserve_if_corrupt(&self) -> ExpenseResult<()> {
        let path = self.paths.expenses_file();

        match read_json::<Vec<Expense>, _>(&path) {
            Ok(_) => Ok(()),
            Err(ExpenseError::Json(_)) => {
                let backup = path.with_extension(format!(
                    "json.corrupt-{}",
                    Local::now().format("%Y%m%d-%H%M%S")
                ));
                fs::copy(&path, &backup).map_err(|e| {
                    ExpenseError::Storage(format!(
                        "Failed to preserve corrupted file {}: {}",
                        path.display(),
                        e
                    ))
                })?;
                warn!(
                    "corrupted {} preserved as {}",
                    path.display(),
                    backup.display()
                );
                Ok(())
            }
            Err(e) => Err(e),
        }
    }
}
