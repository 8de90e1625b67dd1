//! Export module for the expense tracker
//!
//! CSV export of the full expense collection (spreadsheet-compatible).

pub mod csv;

pub use self::csv::{export_expenses_csv, export_to_file, ExportOutcome};
