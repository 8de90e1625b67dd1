//! Monthly Report
//!
//! Filters the collection down to one calendar month and totals it. Callers
//! in this crate always ask about the current year.

use log::warn;

use crate::error::ExpenseResult;
use crate::models::{Expense, MonthOfYear, MonthlyPeriod};
use crate::storage::ExpenseStore;

use super::summary::sum_amounts;

/// Expenses recorded in `period`, in stored order
///
/// Entries whose timestamp cannot be parsed are skipped.
pub fn filter_by_month(expenses: &[Expense], period: MonthlyPeriod) -> Vec<Expense> {
    expenses
        .iter()
        .filter(|e| match e.is_in_month(period.year, period.month) {
            Some(matches) => matches,
            None => {
                warn!("skipping expense '{}' with unreadable date '{}'", e.description, e.date);
                false
            }
        })
        .cloned()
        .collect()
}

/// Spending for a single month
#[derive(Debug, Clone)]
pub struct MonthlyReport {
    /// The month covered
    pub period: MonthlyPeriod,
    /// Matching expenses
    pub expenses: Vec<Expense>,
    /// Sum of matching amounts
    pub total: f64,
}

impl MonthlyReport {
    /// Generate a report for `period` from the stored collection
    pub fn generate(store: &ExpenseStore, period: MonthlyPeriod) -> ExpenseResult<Self> {
        Ok(Self::from_expenses(&store.load()?, period))
    }

    /// Generate a report for a month of the current year from raw input
    ///
    /// The month is validated before the store is touched.
    pub fn for_current_year(store: &ExpenseStore, month_input: &str) -> ExpenseResult<Self> {
        let month: MonthOfYear = month_input.parse()?;
        Self::generate(store, MonthlyPeriod::in_current_year(month))
    }

    /// Build a report over an in-memory collection
    pub fn from_expenses(expenses: &[Expense], period: MonthlyPeriod) -> Self {
        let expenses = filter_by_month(expenses, period);
        let total = sum_amounts(&expenses);
        Self {
            period,
            expenses,
            total,
        }
    }

    /// Check if no expenses fell in the month
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}
