use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_tracker::cli::{handle_expense_command, ExpenseCommands, Shell};
use expense_tracker::config::{paths::DATA_DIR_ENV, Settings, TrackerPaths};
use expense_tracker::storage::ExpenseStore;

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Terminal-based personal expense tracker",
    long_about = "Records, edits and summarizes personal expenses stored in a \
                  JSON file. Run without a command for the interactive menu."
)]
struct Cli {
    /// Directory holding expenses.json and expenses.csv
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive menu (default)
    Menu,

    #[command(flatten)]
    Expense(ExpenseCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = TrackerPaths::resolve(cli.data_dir);
    let settings = Settings::load_or_create(&paths)?;

    let store = ExpenseStore::new(paths.clone(), &settings)?;

    match cli.command {
        None | Some(Commands::Menu) => {
            let stdin = io::stdin();
            Shell::new(&store, &settings, stdin.lock(), io::stdout()).run()?;
        }
        Some(Commands::Expense(cmd)) => {
            if let Some(corruption) = store.load_checked()?.corruption {
                eprintln!("{}", corruption);
            }
            handle_expense_command(&store, &settings, cmd)?;
        }
        Some(Commands::Config) => {
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Data directory: {}", paths.data_dir().display());
            println!("Expenses file:  {}", paths.expenses_file().display());
            println!("CSV export:     {}", paths.export_file().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Schema version:         {}", settings.schema_version);
            println!("  Currency symbol:        {}", settings.currency_symbol);
            println!("  Preserve corrupt files: {}", settings.preserve_corrupt_files);
        }
    }

    Ok(())
}
