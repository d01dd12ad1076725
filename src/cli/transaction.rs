//! Transaction CLI commands
//!
//! Implements CLI commands for recording and listing transactions.

use chrono::NaiveDate;
use clap::Subcommand;

use crate::display::transaction::format_transaction_register;
use crate::error::{TallyError, TallyResult};
use crate::models::{Money, TransactionKind};
use crate::services::{CreateTransactionInput, TransactionService};
use crate::storage::Storage;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record a new transaction
    Add {
        /// Amount (e.g., "20.00" or "20")
        amount: String,
        /// A short description
        description: String,
        /// Transaction kind: income or expense
        #[arg(short, long, default_value = "expense")]
        kind: String,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// List recorded transactions
    List {
        /// Limit output to the last N transactions
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

/// Parse a YYYY-MM-DD date argument, defaulting to today
pub fn parse_date_arg(date: Option<&str>) -> TallyResult<NaiveDate> {
    match date {
        Some(date_str) => NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|_| {
            TallyError::Validation(format!(
                "Invalid date format: '{}'. Use YYYY-MM-DD",
                date_str
            ))
        }),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

/// Parse an amount argument
pub fn parse_amount_arg(amount: &str) -> TallyResult<Money> {
    Money::parse(amount).map_err(|e| {
        TallyError::Validation(format!(
            "Invalid amount format: '{}'. Use format like '20.00' or '20'. Error: {}",
            amount, e
        ))
    })
}

/// Handle a transaction command
pub fn handle_transaction_command(storage: &Storage, cmd: TransactionCommands) -> TallyResult<()> {
    let service = TransactionService::new(storage);

    match cmd {
        TransactionCommands::Add {
            amount,
            description,
            kind,
            date,
        } => {
            let amount = parse_amount_arg(&amount)?;
            let date = parse_date_arg(date.as_deref())?;
            let kind: TransactionKind = kind.parse().map_err(TallyError::Validation)?;

            let txn = service.add(CreateTransactionInput {
                date,
                amount,
                description,
                kind,
            })?;
            storage.save_all()?;

            println!(
                "{} of {} on {} added: {}",
                txn.kind,
                txn.amount,
                txn.date.format("%Y-%m-%d"),
                txn.description
            );
        }

        TransactionCommands::List { limit } => {
            let mut transactions = service.list()?;

            if let Some(limit) = limit {
                let skip = transactions.len().saturating_sub(limit);
                transactions.drain(..skip);
            }

            print!("{}", format_transaction_register(&transactions));
        }
    }

    Ok(())
}
