//! Net Change Report
//!
//! Visualizes income vs expense over time: one point per transaction with
//! its signed effect on the balance and the running total, rendered as a
//! terminal chart around a center axis.

use std::io::Write;

use crate::display::report::{double_separator, format_signed_bar, separator, truncate};
use crate::error::{TallyError, TallyResult};
use crate::models::Money;
use crate::storage::Storage;

/// Chart width on each side of the center axis
const HALF_WIDTH: usize = 20;

/// A single point in the net-change series
#[derive(Debug, Clone)]
pub struct NetChangePoint {
    /// Transaction date
    pub date: chrono::NaiveDate,
    /// Signed effect on the balance (income positive, expense negative)
    pub change: Money,
    /// Running balance after this transaction
    pub running_total: Money,
    /// Transaction description
    pub description: String,
}

/// Net Change Report
#[derive(Debug, Clone)]
pub struct NetChangeReport {
    /// Points in insertion order (display order matches recording order)
    pub points: Vec<NetChangePoint>,
    /// Final net change across all transactions
    pub net: Money,
}

impl NetChangeReport {
    /// Generate the report from all recorded transactions
    pub fn generate(storage: &Storage) -> TallyResult<Self> {
        let transactions = storage.ledger.transactions()?;

        let mut running = Money::zero();
        let mut points = Vec::with_capacity(transactions.len());

        for txn in &transactions {
            let change = txn.signed_amount();
            running += change;
            points.push(NetChangePoint {
                date: txn.date,
                change,
                running_total: running,
                description: txn.description.clone(),
            });
        }

        Ok(Self { points, net: running })
    }

    /// Largest absolute change in the series, used to scale the chart
    fn max_abs_change(&self) -> i64 {
        self.points
            .iter()
            .map(|p| p.change.cents().abs())
            .max()
            .unwrap_or(0)
    }

    /// Format the report as a terminal chart
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str("Income vs Expense Over Time\n");
        output.push_str(&double_separator(76));
        output.push('\n');

        if self.points.is_empty() {
            output.push_str("No transactions to visualize.\n");
            return output;
        }

        output.push_str(&format!(
            "{:<10} {:>12} {:<width$} {:>12}\n",
            "Date",
            "Change",
            "expense < | > income",
            "Running",
            width = HALF_WIDTH * 2 + 1
        ));
        output.push_str(&separator(76));
        output.push('\n');

        let max_abs = self.max_abs_change() as f64;
        for point in &self.points {
            let bar = format_signed_bar(point.change.cents() as f64, max_abs, HALF_WIDTH);
            output.push_str(&format!(
                "{} {:>12} {} {:>12}  {}\n",
                point.date.format("%Y-%m-%d"),
                point.change.to_string(),
                bar,
                point.running_total.to_string(),
                truncate(&point.description, 18)
            ));
        }

        output.push_str(&separator(76));
        output.push('\n');
        output.push_str(&format!("Net change: {}\n", self.net));

        output
    }

    /// Export the series to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> TallyResult<()> {
        writeln!(writer, "Date,Description,Change,Running Total")
            .map_err(|e| TallyError::Report(e.to_string()))?;

        for point in &self.points {
            writeln!(
                writer,
                "{},{},{:.2},{:.2}",
                point.date.format("%Y-%m-%d"),
                point.description,
                point.change.cents() as f64 / 100.0,
                point.running_total.cents() as f64 / 100.0
            )
            .map_err(|e| TallyError::Report(e.to_string()))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::TallyPaths;
    use crate::models::TransactionKind;
    use crate::services::{CreateTransactionInput, TransactionService};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = TallyPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        (temp_dir, storage)
    }

    fn add(storage: &Storage, y: i32, m: u32, d: u32, cents: i64, desc: &str, kind: TransactionKind) {
        TransactionService::new(storage)
            .add(CreateTransactionInput {
                date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
                amount: Money::from_cents(cents),
                description: desc.to_string(),
                kind,
            })
            .unwrap();
    }

    #[test]
    fn test_points_carry_signed_change_and_running_total() {
        let (_temp_dir, storage) = create_test_storage();

        add(&storage, 2024, 5, 1, 100000, "Salary", TransactionKind::Income);
        add(&storage, 2024, 5, 10, 30000, "Rent", TransactionKind::Expense);

        let report = NetChangeReport::generate(&storage).unwrap();

        assert_eq!(report.points.len(), 2);
        assert_eq!(report.points[0].change.cents(), 100000);
        assert_eq!(report.points[0].running_total.cents(), 100000);
        assert_eq!(report.points[1].change.cents(), -30000);
        assert_eq!(report.points[1].running_total.cents(), 70000);
        assert_eq!(report.net.cents(), 70000);
    }

    #[test]
    fn test_empty_report() {
        let (_temp_dir, storage) = create_test_storage();

        let report = NetChangeReport::generate(&storage).unwrap();
        assert!(report.points.is_empty());
        assert_eq!(report.net, Money::zero());

        let text = report.format_terminal();
        assert!(text.contains("No transactions to visualize."));
    }

    #[test]
    fn test_terminal_format_includes_dates_and_net() {
        let (_temp_dir, storage) = create_test_storage();

        add(&storage, 2024, 5, 1, 100000, "Salary", TransactionKind::Income);
        add(&storage, 2024, 5, 10, 30000, "Rent", TransactionKind::Expense);

        let report = NetChangeReport::generate(&storage).unwrap();
        let text = report.format_terminal();

        assert!(text.contains("2024-05-01"));
        assert!(text.contains("2024-05-10"));
        assert!(text.contains("Net change: $700.00"));
    }

    #[test]
    fn test_csv_export() {
        let (_temp_dir, storage) = create_test_storage();

        add(&storage, 2024, 5, 1, 100000, "Salary", TransactionKind::Income);

        let report = NetChangeReport::generate(&storage).unwrap();

        let mut csv_output = Vec::new();
        report.export_csv(&mut csv_output).unwrap();

        let csv_string = String::from_utf8(csv_output).unwrap();
        assert!(csv_string.contains("Date,Description,Change,Running Total"));
        assert!(csv_string.contains("2024-05-01,Salary,1000.00,1000.00"));
    }
}
