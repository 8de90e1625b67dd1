//! Monthly budget check
//!
//! Compares one month's spending against a budget figure.

use std::fmt;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{MonthOfYear, MonthlyPeriod};
use crate::storage::ExpenseStore;

use super::monthly::MonthlyReport;

/// Outcome of a budget check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetStatus {
    /// Spent more than the budget
    Exceeded,
    /// Spent no more than the budget (equality included)
    WithinBudget,
}

impl BudgetStatus {
    /// Classify spending against a budget
    pub fn evaluate(budget: f64, spent: f64) -> Self {
        if spent > budget {
            Self::Exceeded
        } else {
            Self::WithinBudget
        }
    }
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exceeded => write!(f, "exceeded"),
            Self::WithinBudget => write!(f, "within budget"),
        }
    }
}

/// Budget versus actual spending for one month
#[derive(Debug, Clone)]
pub struct BudgetCheck {
    pub period: MonthlyPeriod,
    pub budget: f64,
    pub spent: f64,
    pub status: BudgetStatus,
}

impl BudgetCheck {
    /// Check `budget` against spending in `period`
    pub fn generate(store: &ExpenseStore, budget: f64, period: MonthlyPeriod) -> ExpenseResult<Self> {
        let report = MonthlyReport::generate(store, period)?;
        Ok(Self::from_spent(period, budget, report.total))
    }

    /// Check raw budget and month input against the current year
    ///
    /// Both values are validated before the store is touched.
    pub fn for_current_year(
        store: &ExpenseStore,
        budget_input: &str,
        month_input: &str,
    ) -> ExpenseResult<Self> {
        let month: MonthOfYear = month_input.parse()?;
        let budget = parse_budget(budget_input)?;
        Self::generate(store, budget, MonthlyPeriod::in_current_year(month))
    }

    /// Build a check from an already computed total
    pub fn from_spent(period: MonthlyPeriod, budget: f64, spent: f64) -> Self {
        Self {
            period,
            budget,
            spent,
            status: BudgetStatus::evaluate(budget, spent),
        }
    }
}

/// Parse user input as a budget figure
pub fn parse_budget(input: &str) -> ExpenseResult<f64> {
    let trimmed = input.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
        _ => Err(ExpenseError::InvalidBudget(trimmed.to_string())),
    }
}
