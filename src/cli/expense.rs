//! Expense CLI commands
//!
//! Non-interactive counterparts of the menu actions. Indices on the command
//! line are 1-based, as shown by `list`.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_budget_check, format_expense_table, format_monthly_report, format_total};
use crate::error::{ExpenseError, ExpenseResult};
use crate::export::{export_to_file, ExportOutcome};
use crate::models::parse_amount;
use crate::reports::{BudgetCheck, MonthlyReport, TotalReport};
use crate::services::{CreateExpenseInput, ExpenseService, ExpenseUpdate};
use crate::storage::ExpenseStore;

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Add a new expense
    Add {
        /// What the money was spent on
        description: String,
        /// Amount (e.g., "3.50")
        amount: String,
        /// Category label
        category: String,
    },
    /// Update an expense; omitted fields keep their value
    Update {
        /// Position shown by `list` (1-based)
        index: usize,
        /// New description
        #[arg(short, long)]
        description: Option<String>,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Delete an expense
    Delete {
        /// Position shown by `list` (1-based)
        index: usize,
    },
    /// List all expenses
    #[command(alias = "ls")]
    List,
    /// Show the total of all expenses
    Summary,
    /// Show spending for a month of the current year
    Month {
        /// Month number (1-12)
        month: String,
    },
    /// Compare a month's spending against a budget
    Budget {
        /// Month number (1-12)
        month: String,
        /// Budget for the month
        budget: String,
    },
    /// Export all expenses to expenses.csv in the data directory
    Export,
}

/// Convert a 1-based position to a 0-based index
pub fn position_to_index(position: usize, len: usize) -> ExpenseResult<usize> {
    position
        .checked_sub(1)
        .ok_or(ExpenseError::InvalidIndex { position, len })
}

/// Handle an expense command
pub fn handle_expense_command(
    store: &ExpenseStore,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> ExpenseResult<()> {
    let service = ExpenseService::new(store);
    let currency = settings.currency_symbol.as_str();

    match cmd {
        ExpenseCommands::Add {
            description,
            amount,
            category,
        } => {
            let amount = parse_amount(&amount)?;
            let expense = service.add(CreateExpenseInput {
                description,
                amount,
                category,
            })?;

            println!("Added expense:");
            println!("  Description: {}", expense.description);
            println!("  Amount:      {}{:.2}", currency, expense.amount);
            println!("  Category:    {}", expense.category);
            println!("  Date:        {}", expense.date);
        }

        ExpenseCommands::Update {
            index,
            description,
            amount,
            category,
        } => {
            let index = position_to_index(index, service.count()?)?;
            let update = ExpenseUpdate {
                description,
                amount,
                category,
            };
            let expense = service.update(index, update)?;

            println!("Updated expense #{}: {}", index + 1, expense);
        }

        ExpenseCommands::Delete { index } => {
            let index = position_to_index(index, service.count()?)?;
            let removed = service.delete(index)?;

            println!("Deleted expense: {}", removed);
        }

        ExpenseCommands::List => {
            print!("{}", format_expense_table(&service.list()?));
        }

        ExpenseCommands::Summary => {
            print!("{}", format_total(&TotalReport::generate(store)?, currency));
        }

        ExpenseCommands::Month { month } => {
            let report = MonthlyReport::for_current_year(store, &month)?;
            print!("{}", format_monthly_report(&report, currency));
        }

        ExpenseCommands::Budget { month, budget } => {
            let check = BudgetCheck::for_current_year(store, &budget, &month)?;
            print!("{}", format_budget_check(&check, currency));
        }

        ExpenseCommands::Export => match export_to_file(store)? {
            ExportOutcome::NothingToExport => println!("No expenses to export."),
            ExportOutcome::Written { path, count } => {
                println!("Exported {} expenses to: {}", count, path.display());
            }
        },
    }

    Ok(())
}
