//! Interactive menu driver
//!
//! Renders the numbered menu, reads a choice from stdin, converts free-text
//! prompts to typed values, and calls the corresponding ledger operation.
//! State stays in memory until the user picks Save; Load replaces it
//! wholesale from the ledger file.

use std::io::{self, Write};

use crate::cli::transaction::{parse_amount_arg, parse_date_arg};
use crate::display::transaction::format_transaction_register;
use crate::error::{TallyError, TallyResult};
use crate::models::TransactionKind;
use crate::reports::{MonthlyExpenseReport, NetChangeReport};
use crate::services::{CreateTransactionInput, GoalService, TransactionService};
use crate::storage::{LoadOutcome, Storage};

/// A parsed main-menu choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddTransaction,
    ViewTransactions,
    CalculateBalance,
    SetGoal,
    MonthlyReport,
    Visualize,
    Save,
    Load,
    Exit,
}

impl std::str::FromStr for MenuChoice {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Self::AddTransaction),
            "2" => Ok(Self::ViewTransactions),
            "3" => Ok(Self::CalculateBalance),
            "4" => Ok(Self::SetGoal),
            "5" => Ok(Self::MonthlyReport),
            "6" => Ok(Self::Visualize),
            "7" => Ok(Self::Save),
            "8" => Ok(Self::Load),
            "9" => Ok(Self::Exit),
            _ => Err(()),
        }
    }
}

/// The menu text shown before each prompt
pub fn menu_text() -> String {
    [
        "",
        "Personal Finance Tracker",
        "1. Add Transaction",
        "2. View Transactions",
        "3. Calculate Balance",
        "4. Set Financial Goal",
        "5. Monthly Expense Report",
        "6. Visualize Income vs Expense",
        "7. Save Data to File",
        "8. Load Data from File",
        "9. Exit",
    ]
    .join("\n")
}

/// Run the interactive menu loop until the user exits
///
/// Operation-level failures (bad input, unknown goal) are reported and the
/// loop continues; only I/O level failures abort the loop.
pub fn run(storage: &Storage) -> TallyResult<()> {
    loop {
        println!("{}", menu_text());

        let Some(choice) = prompt("Choose an option: ")? else {
            // stdin closed
            break;
        };

        match choice.parse::<MenuChoice>() {
            Ok(MenuChoice::Exit) => break,
            Ok(choice) => {
                if let Err(err) = dispatch(storage, choice) {
                    println!("{}", err);
                }
            }
            Err(()) => println!("Invalid choice. Please try again."),
        }
    }

    Ok(())
}

/// Execute a single menu operation
fn dispatch(storage: &Storage, choice: MenuChoice) -> TallyResult<()> {
    match choice {
        MenuChoice::AddTransaction => add_transaction(storage),
        MenuChoice::ViewTransactions => view_transactions(storage),
        MenuChoice::CalculateBalance => calculate_balance(storage),
        MenuChoice::SetGoal => set_goal(storage),
        MenuChoice::MonthlyReport => monthly_report(storage),
        MenuChoice::Visualize => visualize(storage),
        MenuChoice::Save => save(storage),
        MenuChoice::Load => load(storage),
        MenuChoice::Exit => Ok(()),
    }
}

fn add_transaction(storage: &Storage) -> TallyResult<()> {
    let amount = parse_amount_arg(&required("Enter amount: ")?)?;

    let date_input = required("Enter date (YYYY-MM-DD, empty for today): ")?;
    let date = if date_input.is_empty() {
        parse_date_arg(None)?
    } else {
        parse_date_arg(Some(&date_input))?
    };

    let description = required("Enter description: ")?;
    let kind: TransactionKind = required("Enter type (income/expense): ")?
        .parse()
        .map_err(TallyError::Validation)?;

    let txn = TransactionService::new(storage).add(CreateTransactionInput {
        date,
        amount,
        description,
        kind,
    })?;

    println!(
        "{} of {} on {} added: {}",
        txn.kind,
        txn.amount,
        txn.date.format("%Y-%m-%d"),
        txn.description
    );
    Ok(())
}

fn view_transactions(storage: &Storage) -> TallyResult<()> {
    let transactions = TransactionService::new(storage).list()?;
    print!("{}", format_transaction_register(&transactions));
    Ok(())
}

fn calculate_balance(storage: &Storage) -> TallyResult<()> {
    let balance = TransactionService::new(storage).balance()?;
    println!("Current Balance: {}", balance);
    Ok(())
}

fn set_goal(storage: &Storage) -> TallyResult<()> {
    let amount = parse_amount_arg(&required("Enter goal amount: ")?)?;
    let description = required("Enter goal description: ")?;
    let target_date = parse_date_arg(Some(&required("Enter target date (YYYY-MM-DD): ")?))?;

    let goal = GoalService::new(storage).set(description, amount, target_date)?;
    println!("Goal Set: {}", goal);
    Ok(())
}

fn monthly_report(storage: &Storage) -> TallyResult<()> {
    let month: u32 = required("Enter month (MM): ")?
        .parse()
        .map_err(|_| TallyError::Validation("Invalid month. Use a number from 1 to 12".into()))?;
    let year: i32 = required("Enter year (YYYY): ")?
        .parse()
        .map_err(|_| TallyError::Validation("Invalid year. Use a number like 2024".into()))?;

    let report = MonthlyExpenseReport::generate(storage, month, year)?;
    print!("{}", report.format_terminal());
    Ok(())
}

fn visualize(storage: &Storage) -> TallyResult<()> {
    let report = NetChangeReport::generate(storage)?;
    print!("{}", report.format_terminal());
    Ok(())
}

fn save(storage: &Storage) -> TallyResult<()> {
    storage.save_all()?;
    println!("Data saved to {}", storage.paths().ledger_file().display());
    Ok(())
}

fn load(storage: &Storage) -> TallyResult<()> {
    match storage.load_all()? {
        LoadOutcome::Loaded => {
            println!("Data loaded from {}", storage.paths().ledger_file().display());
        }
        LoadOutcome::NoSavedData => {
            println!("No saved data found.");
        }
    }
    Ok(())
}

/// Prompt for a line of input; `None` means stdin was closed
fn prompt(text: &str) -> TallyResult<Option<String>> {
    print!("{}", text);
    io::stdout()
        .flush()
        .map_err(|e| TallyError::Io(e.to_string()))?;

    let mut input = String::new();
    let bytes = io::stdin()
        .read_line(&mut input)
        .map_err(|e| TallyError::Io(e.to_string()))?;

    if bytes == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}

/// Prompt for input that an operation cannot proceed without
fn required(text: &str) -> TallyResult<String> {
    prompt(text)?.ok_or_else(|| TallyError::Io("input ended".into()))
}
