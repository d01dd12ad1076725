//! Goal CLI commands
//!
//! Implements CLI commands for setting savings goals and adding savings
//! toward them.

use clap::Subcommand;

use crate::display::goal::format_goal_list;
use crate::error::TallyResult;
use crate::services::GoalService;
use crate::storage::Storage;

use super::transaction::{parse_amount_arg, parse_date_arg};

/// Goal subcommands
#[derive(Subcommand)]
pub enum GoalCommands {
    /// Set a new savings goal
    Set {
        /// A short description of the goal
        description: String,
        /// Target amount (e.g., "1000.00")
        amount: String,
        /// Target date (YYYY-MM-DD)
        date: String,
    },
    /// Add savings toward an existing goal
    #[command(name = "add-savings")]
    AddSavings {
        /// Goal description (first matching goal wins)
        description: String,
        /// Amount to add
        amount: String,
    },
    /// List all goals with their progress
    List,
}

/// Handle a goal command
pub fn handle_goal_command(storage: &Storage, cmd: GoalCommands) -> TallyResult<()> {
    let service = GoalService::new(storage);

    match cmd {
        GoalCommands::Set {
            description,
            amount,
            date,
        } => {
            let amount = parse_amount_arg(&amount)?;
            let target_date = parse_date_arg(Some(&date))?;

            let goal = service.set(description, amount, target_date)?;
            storage.save_all()?;

            println!("Goal Set: {}", goal);
        }

        GoalCommands::AddSavings {
            description,
            amount,
        } => {
            let amount = parse_amount_arg(&amount)?;

            match service.add_savings(&description, amount) {
                Ok(goal) => {
                    storage.save_all()?;
                    println!(
                        "Added {} to {}. Current savings: {}",
                        amount, goal.description, goal.current_savings
                    );
                }
                Err(err) if err.is_not_found() => {
                    println!("No goal found with description '{}'.", description);
                    println!("Use 'tally goal list' to see existing goals.");
                }
                Err(err) => return Err(err),
            }
        }

        GoalCommands::List => {
            let goals = service.list()?;
            print!("{}", format_goal_list(&goals));
        }
    }

    Ok(())
}
