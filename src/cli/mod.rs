//! CLI command handlers
//!
//! This module contains the clap subcommands and the interactive menu,
//! bridging user input with the service and report layers.

pub mod expense;
pub mod shell;

pub use expense::{handle_expense_command, position_to_index, ExpenseCommands};
pub use shell::{MenuAction, Shell};
