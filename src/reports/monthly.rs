//! Monthly Expense Report
//!
//! Lists the expenses recorded for a given month and year together with
//! their total.

use std::io::Write;

use crate::error::{TallyError, TallyResult};
use crate::models::{Money, Transaction};
use crate::services::TransactionService;
use crate::storage::Storage;

/// A single expense line in the report
#[derive(Debug, Clone)]
pub struct ExpenseLine {
    /// Expense date
    pub date: chrono::NaiveDate,
    /// Expense amount (magnitude)
    pub amount: Money,
    /// Expense description
    pub description: String,
}

impl From<&Transaction> for ExpenseLine {
    fn from(txn: &Transaction) -> Self {
        Self {
            date: txn.date,
            amount: txn.amount,
            description: txn.description.clone(),
        }
    }
}

/// Monthly Expense Report
#[derive(Debug, Clone)]
pub struct MonthlyExpenseReport {
    /// Report month (1-12)
    pub month: u32,
    /// Report year
    pub year: i32,
    /// Expense lines in insertion order
    pub entries: Vec<ExpenseLine>,
    /// Total of all listed expenses
    pub total: Money,
}

impl MonthlyExpenseReport {
    /// Generate the report for a month and year
    pub fn generate(storage: &Storage, month: u32, year: i32) -> TallyResult<Self> {
        let service = TransactionService::new(storage);
        let expenses = service.monthly_expenses(month, year)?;

        let total = expenses.iter().map(|t| t.amount).sum();
        let entries = expenses.iter().map(ExpenseLine::from).collect();

        Ok(Self {
            month,
            year,
            entries,
            total,
        })
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "Monthly Expense Report: {}/{}\n",
            self.month, self.year
        ));
        output.push_str(&"=".repeat(60));
        output.push('\n');

        if self.entries.is_empty() {
            output.push_str("No expenses recorded for this month.\n");
        } else {
            for entry in &self.entries {
                output.push_str(&format!(
                    "Expense: {} on {} - {}\n",
                    entry.amount,
                    entry.date.format("%Y-%m-%d"),
                    entry.description
                ));
            }
        }

        output.push_str(&"-".repeat(60));
        output.push('\n');
        output.push_str(&format!(
            "Total Expense for {}/{}: {}\n",
            self.month, self.year, self.total
        ));

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> TallyResult<()> {
        writeln!(writer, "Date,Description,Amount")
            .map_err(|e| TallyError::Report(e.to_string()))?;

        for entry in &self.entries {
            writeln!(
                writer,
                "{},{},{:.2}",
                entry.date.format("%Y-%m-%d"),
                entry.description,
                entry.amount.cents() as f64 / 100.0
            )
            .map_err(|e| TallyError::Report(e.to_string()))?;
        }

        writeln!(
            writer,
            "TOTAL,,{:.2}",
            self.total.cents() as f64 / 100.0
        )
        .map_err(|e| TallyError::Report(e.to_string()))?;

        Ok(())
    }
}
