//! Core data models for the expense tracker

pub mod expense;
pub mod month;

pub use expense::{parse_amount, Expense, ExpenseValidationError, DATE_FORMAT};
pub use month::{MonthOfYear, MonthlyPeriod};
