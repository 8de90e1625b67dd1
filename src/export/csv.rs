//! CSV Export functionality
//!
//! Writes the expense collection as `description,amount,category,date` rows.

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use log::info;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;
use crate::storage::ExpenseStore;

/// What an export run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The collection was empty, so nothing was written
    NothingToExport,
    /// `count` rows were written to `path`
    Written { path: PathBuf, count: usize },
}

/// Write all expenses, with a header row, in collection order
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: W) -> ExpenseResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for expense in expenses {
        csv_writer
            .serialize(expense)
            .map_err(|e| ExpenseError::Export(e.to_string()))?;
    }

    // serialize() only emits the header alongside the first record
    if expenses.is_empty() {
        csv_writer
            .write_record(["description", "amount", "category", "date"])
            .map_err(|e| ExpenseError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| ExpenseError::Export(e.to_string()))
}

/// Export the stored collection to the data directory's CSV file
pub fn export_to_file(store: &ExpenseStore) -> ExpenseResult<ExportOutcome> {
    let expenses = store.load()?;
    if expenses.is_empty() {
        return Ok(ExportOutcome::NothingToExport);
    }

    let path = store.paths().export_file();
    let file = File::create(&path).map_err(|e| ExpenseError::Export(e.to_string()))?;
    export_expenses_csv(&expenses, file)?;

    info!("exported {} expenses to {}", expenses.len(), path.display());
    Ok(ExportOutcome::Written {
        path,
        count: expenses.len(),
    })
}
