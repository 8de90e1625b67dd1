//! Expense model
//!
//! An expense is a description, an amount, a category label and the local
//! timestamp it was recorded at. Expenses have no identifier of their own; they
//! are addressed by position in the collection.

use chrono::{Datelike, Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::month::MonthOfYear;
use crate::error::{ExpenseError, ExpenseResult};

/// Timestamp format used for the `date` field
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// What the money was spent on
    pub description: String,

    /// Amount spent
    pub amount: f64,

    /// Free-form category label
    pub category: String,

    /// Creation timestamp (`YYYY-MM-DD HH:MM:SS`, local time)
    ///
    /// Kept as the stored string so that loading and saving never rewrites it.
    pub date: String,
}

impl Expense {
    /// Create a new expense stamped with the current local time
    pub fn new(description: impl Into<String>, amount: f64, category: impl Into<String>) -> Self {
        Self::with_timestamp(description, amount, category, Local::now().naive_local())
    }

    /// Create an expense with an explicit timestamp
    pub fn with_timestamp(
        description: impl Into<String>,
        amount: f64,
        category: impl Into<String>,
        timestamp: NaiveDateTime,
    ) -> Self {
        Self {
            description: description.into(),
            amount,
            category: category.into(),
            date: timestamp.format(DATE_FORMAT).to_string(),
        }
    }

    /// Parse the stored timestamp, if it is well formed
    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.date, DATE_FORMAT).ok()
    }

    /// The calendar day part of the timestamp, falling back to the raw string
    pub fn day(&self) -> String {
        match self.timestamp() {
            Some(ts) => ts.format("%Y-%m-%d").to_string(),
            None => self.date.clone(),
        }
    }

    /// Check whether this expense was recorded in the given year and month
    ///
    /// Returns `None` when the timestamp cannot be parsed.
    pub fn is_in_month(&self, year: i32, month: MonthOfYear) -> Option<bool> {
        self.timestamp()
            .map(|ts| ts.year() == year && ts.month() == month.number())
    }

    /// Validate the expense fields
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.description.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyDescription);
        }

        if self.category.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyCategory);
        }

        if !self.amount.is_finite() {
            return Err(ExpenseValidationError::NonFiniteAmount(self.amount));
        }

        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {:.2} - {}",
            self.description, self.amount, self.category
        )
    }
}

/// Parse user input as an expense amount
///
/// Accepts anything that reads as a finite decimal number after trimming.
pub fn parse_amount(input: &str) -> ExpenseResult<f64> {
    let trimmed = input.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ExpenseError::InvalidAmount(trimmed.to_string())),
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq)]
pub enum ExpenseValidationError {
    EmptyDescription,
    EmptyCategory,
    NonFiniteAmount(f64),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "Description is required"),
            Self::EmptyCategory => write!(f, "Category is required"),
            Self::NonFiniteAmount(amount) => {
                write!(f, "Amount must be a finite number, got {}", amount)
            }
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
