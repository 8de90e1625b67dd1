//! Expense Tracker - Terminal-based personal expense tracking
//!
//! This library provides the core functionality for the `expenses` binary:
//! recording expenses in a JSON file, editing them by position, and
//! reporting totals, monthly spending and budget checks.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data directory resolution and user settings
//! - `error`: Custom error types
//! - `models`: The expense record and calendar months
//! - `storage`: JSON file storage layer
//! - `services`: Create, update and delete by position
//! - `reports`: Totals, monthly summaries and budget checks
//! - `export`: CSV export
//! - `display`: Terminal formatting
//! - `cli`: Subcommands and the interactive menu
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::config::{Settings, TrackerPaths};
//! use expense_tracker::reports::TotalReport;
//! use expense_tracker::storage::ExpenseStore;
//!
//! let paths = TrackerPaths::with_data_dir("data");
//! let store = ExpenseStore::new(paths, &Settings::default())?;
//! let total = TotalReport::generate(&store)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
