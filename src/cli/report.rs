//! Report CLI commands
//!
//! Implements CLI commands for the monthly expense report and the
//! net-change chart.

use clap::Subcommand;

use crate::error::TallyResult;
use crate::reports::{MonthlyExpenseReport, NetChangeReport};
use crate::storage::Storage;

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Expenses for a specific month
    Monthly {
        /// Month (1-12)
        month: u32,
        /// Year (e.g., 2024)
        year: i32,
        /// Output as CSV instead of the terminal format
        #[arg(long)]
        csv: bool,
    },
    /// Net change over time (income vs expense)
    Chart {
        /// Output the series as CSV instead of the terminal chart
        #[arg(long)]
        csv: bool,
    },
}

/// Handle a report command
pub fn handle_report_command(storage: &Storage, cmd: ReportCommands) -> TallyResult<()> {
    match cmd {
        ReportCommands::Monthly { month, year, csv } => {
            let report = MonthlyExpenseReport::generate(storage, month, year)?;

            if csv {
                let mut stdout = std::io::stdout();
                report.export_csv(&mut stdout)?;
            } else {
                print!("{}", report.format_terminal());
            }
        }

        ReportCommands::Chart { csv } => {
            let report = NetChangeReport::generate(storage)?;

            if csv {
                let mut stdout = std::io::stdout();
                report.export_csv(&mut stdout)?;
            } else {
                print!("{}", report.format_terminal());
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::TallyPaths;
    use tempfile::TempDir;

    #[test]
    fn test_monthly_report_rejects_bad_month() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TallyPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        let result = handle_report_command(
            &storage,
            ReportCommands::Monthly {
                month: 13,
                year: 2024,
                csv: false,
            },
        );
        assert!(result.is_err());
    }
}
