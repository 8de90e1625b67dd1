//! Expense service
//!
//! CRUD operations over the expense collection. Every call reloads the
//! collection from the store; mutating calls write the whole collection back.
//! Expenses are addressed by 0-based position.

use log::info;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{parse_amount, Expense};
use crate::storage::ExpenseStore;

/// Service for expense management
pub struct ExpenseService<'a> {
    store: &'a ExpenseStore,
}

/// Input for creating a new expense
#[derive(Debug, Clone)]
pub struct CreateExpenseInput {
    pub description: String,
    pub amount: f64,
    pub category: String,
}

/// Field changes for an existing expense
///
/// `None` and empty strings both leave the field untouched. The amount is
/// kept as raw input so a bad value can abort the whole update.
#[derive(Debug, Clone, Default)]
pub struct ExpenseUpdate {
    pub description: Option<String>,
    pub amount: Option<String>,
    pub category: Option<String>,
}

impl ExpenseUpdate {
    /// Create an empty update
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a new description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set a new amount
    pub fn amount(mut self, amount: impl Into<String>) -> Self {
        self.amount = Some(amount.into());
        self
    }

    /// Set a new category
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

/// Treat blank input as "not provided"
fn provided(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(store: &'a ExpenseStore) -> Self {
        Self { store }
    }

    /// Record a new expense stamped with the current local time
    pub fn add(&self, input: CreateExpenseInput) -> ExpenseResult<Expense> {
        let expense = Expense::new(
            input.description.trim(),
            input.amount,
            input.category.trim(),
        );
        self.add_expense(expense)
    }

    /// Append an already-built expense
    pub fn add_expense(&self, expense: Expense) -> ExpenseResult<Expense> {
        expense
            .validate()
            .map_err(|e| ExpenseError::Validation(e.to_string()))?;

        let mut expenses = self.store.load()?;
        expenses.push(expense.clone());
        self.store.save(&expenses)?;

        info!("added expense #{}: {}", expenses.len(), expense);
        Ok(expense)
    }

    /// Update the expense at `index`
    ///
    /// Either every provided field is applied or nothing is.
    pub fn update(&self, index: usize, update: ExpenseUpdate) -> ExpenseResult<Expense> {
        let mut expenses = self.store.load()?;
        let len = expenses.len();

        let expense = expenses
            .get_mut(index)
            .ok_or_else(|| ExpenseError::invalid_index(index, len))?;

        // Parse before touching anything
        let amount = provided(update.amount)
            .map(|raw| parse_amount(&raw))
            .transpose()?;

        if let Some(description) = provided(update.description) {
            expense.description = description.trim().to_string();
        }
        if let Some(amount) = amount {
            expense.amount = amount;
        }
        if let Some(category) = provided(update.category) {
            expense.category = category.trim().to_string();
        }

        let updated = expense.clone();
        self.store.save(&expenses)?;

        info!("updated expense #{}: {}", index + 1, updated);
        Ok(updated)
    }

    /// Remove the expense at `index`, returning it
    pub fn delete(&self, index: usize) -> ExpenseResult<Expense> {
        let mut expenses = self.store.load()?;
        let len = expenses.len();

        if index >= len {
            return Err(ExpenseError::invalid_index(index, len));
        }

        let removed = expenses.remove(index);
        self.store.save(&expenses)?;

        info!("deleted expense #{}: {}", index + 1, removed);
        Ok(removed)
    }

    /// All expenses in stored order
    pub fn list(&self) -> ExpenseResult<Vec<Expense>> {
        self.store.load()
    }

    /// Number of stored expenses
    pub fn count(&self) -> ExpenseResult<usize> {
        Ok(self.store.load()?.len())
    }
}
