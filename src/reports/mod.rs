//! Reports module for the expense tracker
//!
//! Provides the overall total, monthly spending and monthly budget checks.

pub mod budget;
pub mod monthly;
pub mod summary;

pub use budget::{parse_budget, BudgetCheck, BudgetStatus};
pub use monthly::{filter_by_month, MonthlyReport};
pub use summary::{sum_amounts, TotalReport};
