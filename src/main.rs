use anyhow::Result;
use clap::{Parser, Subcommand};

use tally_cli::cli::{
    handle_goal_command, handle_report_command, handle_transaction_command, GoalCommands,
    ReportCommands, TransactionCommands,
};
use tally_cli::config::{paths::TallyPaths, settings::Settings};
use tally_cli::menu;
use tally_cli::services::TransactionService;
use tally_cli::storage::Storage;

#[derive(Parser)]
#[command(
    name = "tally",
    version,
    about = "Terminal-based personal finance record keeper",
    long_about = "tally records income and expense transactions and savings goals, \
                  computes your running balance, summarizes monthly expenses, and \
                  charts net change over time. Run without a subcommand for the \
                  interactive menu."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive menu
    Menu,

    /// Transaction commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Savings goal commands
    #[command(subcommand)]
    Goal(GoalCommands),

    /// Report commands
    #[command(subcommand)]
    Report(ReportCommands),

    /// Show the current balance
    Balance,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = TallyPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let storage = Storage::new(paths.clone())?;

    match cli.command {
        // The menu owns persistence explicitly: state starts empty and is
        // saved/loaded only through its own options.
        None | Some(Commands::Menu) => {
            menu::run(&storage)?;
        }
        Some(Commands::Transaction(cmd)) => {
            storage.load_all()?;
            handle_transaction_command(&storage, cmd)?;
        }
        Some(Commands::Goal(cmd)) => {
            storage.load_all()?;
            handle_goal_command(&storage, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            storage.load_all()?;
            handle_report_command(&storage, cmd)?;
        }
        Some(Commands::Balance) => {
            storage.load_all()?;
            let balance = TransactionService::new(&storage).balance()?;
            println!("Current Balance: {}", balance);
        }
        Some(Commands::Config) => {
            println!("tally Configuration");
            println!("===================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Ledger file:      {}", paths.ledger_file().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
        }
    }

    Ok(())
}
