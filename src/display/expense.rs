//! Expense display formatting
//!
//! Plain-text tables and summaries for terminal output.

use crate::models::Expense;
use crate::reports::{BudgetCheck, BudgetStatus, MonthlyReport, TotalReport};

const RULE_WIDTH: usize = 60;

fn rule() -> String {
    "-".repeat(RULE_WIDTH)
}

/// Format a single expense row (without index column)
pub fn format_expense_row(expense: &Expense) -> String {
    format!(
        "{}{:<10.2}{}{}",
        truncate(&expense.description, 20),
        expense.amount,
        truncate(&expense.category, 15),
        expense.day()
    )
}

/// Format the whole collection with 1-based positions
pub fn format_expense_table(expenses: &[Expense]) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str("All Expenses:\n");
    output.push_str(&rule());
    output.push('\n');
    output.push_str(&format!(
        "{:<6}{:<20}{:<10}{:<15}{}\n",
        "Index", "Description", "Amount", "Category", "Date"
    ));
    output.push_str(&rule());
    output.push('\n');

    for (i, expense) in expenses.iter().enumerate() {
        output.push_str(&format!("{:<6}{}\n", i + 1, format_expense_row(expense)));
    }

    output.push_str(&rule());
    output.push('\n');
    output
}

/// Format the overall total
pub fn format_total(report: &TotalReport, currency: &str) -> String {
    match report {
        TotalReport::NoExpenses => "No expenses to summarize.\n".to_string(),
        TotalReport::Total { count, total } => format!(
            "Total Expenses: {}{:.2} ({} {})\n",
            currency,
            total,
            count,
            if *count == 1 { "expense" } else { "expenses" }
        ),
    }
}

/// Format a monthly report with its line items
pub fn format_monthly_report(report: &MonthlyReport, currency: &str) -> String {
    if report.is_empty() {
        return format!(
            "No expenses found for month {}.\n",
            report.period.month.number()
        );
    }

    let mut output = String::new();
    output.push_str(&format!(
        "Total Expenses for {}: {}{:.2}\n\n",
        report.period, currency, report.total
    ));
    output.push_str(&format!(
        "{:<20}{:<10}{:<15}{}\n",
        "Description", "Amount", "Category", "Date"
    ));
    output.push_str(&rule());
    output.push('\n');

    for expense in &report.expenses {
        output.push_str(&format_expense_row(expense));
        output.push('\n');
    }

    output.push_str(&rule());
    output.push('\n');
    output
}

/// Format the outcome of a budget check
pub fn format_budget_check(check: &BudgetCheck, currency: &str) -> String {
    let headline = match check.status {
        BudgetStatus::Exceeded => {
            format!("Warning: You've exceeded your budget for {}!", check.period)
        }
        BudgetStatus::WithinBudget => {
            format!("You are within your budget for {}.", check.period)
        }
    };

    format!(
        "{}\n   Budget: {}{:.2}\n   Total Spent: {}{:.2}\n",
        headline, currency, check.budget, currency, check.spent
    )
}

/// Pad or truncate a string to exactly `max_len` characters
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        format!("{:width$}", s, width = max_len)
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MonthOfYear, MonthlyPeriod};
    use chrono::NaiveDate;

    fn coffee() -> Expense {
        let ts = NaiveDate::from_ymd_opt(2025, 6, 15)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        Expense::with_timestamp("Coffee", 3.5, "Food", ts)
    }

    fn june() -> MonthlyPeriod {
        MonthlyPeriod::new(2025, MonthOfYear::new(6).unwrap())
    }

    #[test]
    fn test_table_has_one_based_index() {
        let formatted = format_expense_table(&[coffee(), coffee()]);
        assert!(formatted.contains("Index"));
        assert!(formatted.contains("1     Coffee"));
        assert!(formatted.contains("2     Coffee"));
        assert!(formatted.contains("3.50"));
        assert!(formatted.contains("2025-06-15"));
        assert!(!formatted.contains("08:00:00"));
    }

    #[test]
    fn test_empty_table() {
        assert!(format_expense_table(&[]).contains("No expenses found"));
    }

    #[test]
    fn test_total() {
        let none = format_total(&TotalReport::NoExpenses, "$");
        assert!(none.contains("No expenses to summarize"));
        assert!(!none.contains("0.00"));

        let some = format_total(&TotalReport::Total { count: 2, total: 5.5 }, "$");
        assert!(some.contains("Total Expenses: $5.50"));
    }

    #[test]
    fn test_monthly_report() {
        let report = MonthlyReport::from_expenses(&[coffee()], june());
        let formatted = format_monthly_report(&report, "€");
        assert!(formatted.contains("Total Expenses for June 2025: €3.50"));
        assert!(formatted.contains("Coffee"));

        let empty = MonthlyReport::from_expenses(&[], june());
        assert!(format_monthly_report(&empty, "$").contains("No expenses found for month 6"));
    }

    #[test]
    fn test_budget_check() {
        let over = BudgetCheck::from_spent(june(), 50.0, 100.0);
        let formatted = format_budget_check(&over, "$");
        assert!(formatted.contains("exceeded your budget for June 2025"));
        assert!(formatted.contains("Budget: $50.00"));
        assert!(formatted.contains("Total Spent: $100.00"));

        let within = BudgetCheck::from_spent(june(), 150.0, 100.0);
        assert!(format_budget_check(&within, "$").contains("within your budget"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Short", 10).trim(), "Short");
        let result = truncate("A very long string", 10);
        assert_eq!(result.chars().count(), 10);
        assert!(result.ends_with("..."));
        assert_eq!(truncate("Café au lait avec sucre", 10), "Café au...");
    }
}
