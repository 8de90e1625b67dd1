//! Total spending across every recorded expense

use crate::error::ExpenseResult;
use crate::models::Expense;
use crate::storage::ExpenseStore;

/// Overall total, with an empty collection kept distinct from a zero sum
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TotalReport {
    /// Nothing has been recorded
    NoExpenses,
    /// Sum over `count` expenses
    Total { count: usize, total: f64 },
}

impl TotalReport {
    /// Generate the total from the stored collection
    pub fn generate(store: &ExpenseStore) -> ExpenseResult<Self> {
        Ok(Self::from_expenses(&store.load()?))
    }

    /// Compute the total over a slice of expenses
    pub fn from_expenses(expenses: &[Expense]) -> Self {
        if expenses.is_empty() {
            Self::NoExpenses
        } else {
            Self::Total {
                count: expenses.len(),
                total: sum_amounts(expenses),
            }
        }
    }

    /// The total, or `None` when there are no expenses
    pub fn total(&self) -> Option<f64> {
        match self {
            Self::NoExpenses => None,
            Self::Total { total, .. } => Some(*total),
        }
    }
}

/// Sum of `amount` over the given expenses
pub fn sum_amounts(expenses: &[Expense]) -> f64 {
    expenses.iter().map(|e| e.amount).sum()
}
