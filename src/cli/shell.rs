//! Interactive menu
//!
//! A numbered menu loop over the expense operations. Input and output are
//! generic so the loop can be driven from tests. Input mistakes and export
//! failures are reported and the menu continues; storage failures end the
//! session with an error.

use std::io::{BufRead, Write};

use log::debug;

use crate::config::Settings;
use crate::display::{format_budget_check, format_expense_table, format_monthly_report, format_total};
use crate::error::{ExpenseError, ExpenseResult};
use crate::export::{export_to_file, ExportOutcome};
use crate::models::parse_amount;
use crate::reports::{BudgetCheck, MonthlyReport, TotalReport};
use crate::services::{CreateExpenseInput, ExpenseService, ExpenseUpdate};
use crate::storage::ExpenseStore;

use super::expense::position_to_index;

/// Menu actions, numbered as shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Add,
    Update,
    Delete,
    ViewAll,
    Summary,
    MonthlySummary,
    Budget,
    Export,
    Exit,
}

impl MenuAction {
    /// All actions in menu order
    pub const ALL: [MenuAction; 9] = [
        Self::Add,
        Self::Update,
        Self::Delete,
        Self::ViewAll,
        Self::Summary,
        Self::MonthlySummary,
        Self::Budget,
        Self::Export,
        Self::Exit,
    ];

    /// Parse a menu choice such as "3"
    pub fn from_choice(choice: &str) -> Option<Self> {
        let n: usize = choice.trim().parse().ok()?;
        n.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }

    /// Menu label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Add => "Add Expense",
            Self::Update => "Update Expense",
            Self::Delete => "Delete Expense",
            Self::ViewAll => "View All Expenses",
            Self::Summary => "View Summary of Expenses",
            Self::MonthlySummary => "View Summary by Month",
            Self::Budget => "Set Monthly Budget and Check",
            Self::Export => "Export Expenses to CSV",
            Self::Exit => "Exit",
        }
    }
}

/// Interactive session over a store
pub struct Shell<'a, R, W> {
    store: &'a ExpenseStore,
    currency: String,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    /// Create a new session
    pub fn new(store: &'a ExpenseStore, settings: &Settings, input: R, output: W) -> Self {
        Self {
            store,
            currency: settings.currency_symbol.clone(),
            input,
            output,
        }
    }

    /// Run the menu until Exit or end of input
    pub fn run(&mut self) -> ExpenseResult<()> {
        loop {
            self.print_menu()?;

            let Some(choice) = self.prompt("Enter your choice (1-9): ")? else {
                writeln!(self.output)?;
                return Ok(());
            };

            let Some(action) = MenuAction::from_choice(&choice) else {
                writeln!(
                    self.output,
                    "\nInvalid choice. Please enter a number between 1 and 9.\n"
                )?;
                continue;
            };

            debug!("menu action: {:?}", action);
            if action == MenuAction::Exit {
                writeln!(self.output, "\nGoodbye! Thank you for using Expense Tracker.\n")?;
                return Ok(());
            }

            self.report_corruption()?;
            let result = self.dispatch(action);
            self.report(result)?;
        }
    }

    fn print_menu(&mut self) -> ExpenseResult<()> {
        writeln!(self.output, "\nExpense Tracker")?;
        for (i, action) in MenuAction::ALL.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, action.label())?;
        }
        Ok(())
    }

    /// Tell the user when the backing file could not be parsed
    fn report_corruption(&mut self) -> ExpenseResult<()> {
        if let Some(corruption) = self.store.load_checked()?.corruption {
            writeln!(self.output, "\n{}", corruption)?;
        }
        Ok(())
    }

    /// Print recoverable errors; pass storage failures up
    fn report(&mut self, result: ExpenseResult<()>) -> ExpenseResult<()> {
        match result {
            Ok(()) => Ok(()),
            Err(e) if e.is_input_error() || matches!(e, ExpenseError::Export(_)) => {
                writeln!(self.output, "\nError: {}\n", e)?;
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    /// Write a prompt and read one trimmed line; `None` at end of input
    fn prompt(&mut self, label: &str) -> ExpenseResult<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Like `prompt`, treating end of input as a blank answer
    fn ask(&mut self, label: &str) -> ExpenseResult<String> {
        Ok(self.prompt(label)?.unwrap_or_default())
    }

    fn dispatch(&mut self, action: MenuAction) -> ExpenseResult<()> {
        match action {
            MenuAction::Add => self.add(),
            MenuAction::Update => self.update(),
            MenuAction::Delete => self.delete(),
            MenuAction::ViewAll => self.view_all(),
            MenuAction::Summary => self.summary(),
            MenuAction::MonthlySummary => self.monthly_summary(),
            MenuAction::Budget => self.budget(),
            MenuAction::Export => self.export(),
            MenuAction::Exit => Ok(()),
        }
    }

    fn add(&mut self) -> ExpenseResult<()> {
        writeln!(self.output, "\nAdd a New Expense")?;
        let description = self.ask("Enter description: ")?;
        let amount = self.ask("Enter amount: ")?;
        let category = self.ask("Enter category: ")?;

        if description.is_empty() || amount.is_empty() || category.is_empty() {
            writeln!(self.output, "\nAll fields are required. Please try again.\n")?;
            return Ok(());
        }

        let amount = parse_amount(&amount)?;
        let expense = ExpenseService::new(self.store).add(CreateExpenseInput {
            description,
            amount,
            category,
        })?;

        writeln!(
            self.output,
            "\nAdded expense: {}, Amount: {:.2}, Category: {}\n",
            expense.description, expense.amount, expense.category
        )?;
        Ok(())
    }

    /// Show the list and ask for a 1-based position
    ///
    /// Returns `None` when there is nothing to pick or the answer was not a
    /// number (both already reported).
    fn pick_index(&mut self, verb: &str) -> ExpenseResult<Option<usize>> {
        let expenses = ExpenseService::new(self.store).list()?;
        write!(self.output, "\n{}", format_expense_table(&expenses))?;

        if expenses.is_empty() {
            writeln!(self.output, "\nNo expenses available to {}.\n", verb)?;
            return Ok(None);
        }

        let answer = self.ask(&format!("Enter the index of the expense to {}: ", verb))?;
        if answer.is_empty() || !answer.chars().all(|c| c.is_ascii_digit()) {
            writeln!(self.output, "\nInvalid input. Please enter a numerical index.\n")?;
            return Ok(None);
        }

        let position: usize = answer
            .parse()
            .map_err(|_| ExpenseError::invalid_index(usize::MAX, expenses.len()))?;
        position_to_index(position, expenses.len()).map(Some)
    }

    fn update(&mut self) -> ExpenseResult<()> {
        writeln!(self.output, "\nUpdate an Expense")?;
        let Some(index) = self.pick_index("update")? else {
            return Ok(());
        };

        let update = ExpenseUpdate {
            description: Some(self.ask("Enter new description (leave blank to keep current): ")?),
            amount: Some(self.ask("Enter new amount (leave blank to keep current): ")?),
            category: Some(self.ask("Enter new category (leave blank to keep current): ")?),
        };
        ExpenseService::new(self.store).update(index, update)?;

        writeln!(self.output, "\nExpense at index {} updated.\n", index + 1)?;
        Ok(())
    }

    fn delete(&mut self) -> ExpenseResult<()> {
        writeln!(self.output, "\nDelete an Expense")?;
        let Some(index) = self.pick_index("delete")? else {
            return Ok(());
        };

        let confirm = self.ask(&format!(
            "Are you sure you want to delete expense #{}? (y/n): ",
            index + 1
        ))?;
        if !confirm.eq_ignore_ascii_case("y") {
            writeln!(self.output, "\nDeletion cancelled.\n")?;
            return Ok(());
        }

        let removed = ExpenseService::new(self.store).delete(index)?;
        writeln!(self.output, "\nDeleted expense: {}\n", removed)?;
        Ok(())
    }

    fn view_all(&mut self) -> ExpenseResult<()> {
        let expenses = ExpenseService::new(self.store).list()?;
        write!(self.output, "\n{}", format_expense_table(&expenses))?;
        Ok(())
    }

    fn summary(&mut self) -> ExpenseResult<()> {
        let report = TotalReport::generate(self.store)?;
        write!(self.output, "\n{}", format_total(&report, &self.currency))?;
        Ok(())
    }

    fn monthly_summary(&mut self) -> ExpenseResult<()> {
        writeln!(self.output, "\nView Summary by Month")?;
        let month = self.ask("Enter month (1-12): ")?;

        let report = MonthlyReport::for_current_year(self.store, &month)?;
        write!(self.output, "\n{}", format_monthly_report(&report, &self.currency))?;
        Ok(())
    }

    fn budget(&mut self) -> ExpenseResult<()> {
        writeln!(self.output, "\nSet Monthly Budget and Check")?;
        let month = self.ask("Enter month (1-12): ")?;
        let budget = self.ask("Enter your budget for the month: ")?;

        let check = BudgetCheck::for_current_year(self.store, &budget, &month)?;
        write!(self.output, "\n{}", format_budget_check(&check, &self.currency))?;
        Ok(())
    }

    fn export(&mut self) -> ExpenseResult<()> {
        match export_to_file(self.store)? {
            ExportOutcome::NothingToExport => {
                writeln!(self.output, "\nNo expenses to export.\n")?;
            }
            ExportOutcome::Written { path, .. } => {
                writeln!(self.output, "\nExpenses exported to {}\n", path.display())?;
            }
        }
        Ok(())
    }
}
