//! Display formatting for terminal output

pub mod expense;

pub use expense::{
    format_budget_check, format_expense_row, format_expense_table, format_monthly_report,
    format_total,
};
