//! Transaction display formatting
//!
//! Provides utilities for formatting transactions for terminal display.

use crate::display::report::truncate;
use crate::models::{Transaction, TransactionKind};

/// Format a single transaction for display (register row)
pub fn format_transaction_row(txn: &Transaction) -> String {
    let kind_icon = match txn.kind {
        TransactionKind::Income => "+",
        TransactionKind::Expense => "-",
    };

    format!(
        "{} {} {:<24} {:>12}",
        kind_icon,
        txn.date.format("%Y-%m-%d"),
        truncate(&txn.description, 24),
        txn.amount.to_string()
    )
}

/// Format a list of transactions as a register
pub fn format_transaction_register(transactions: &[Transaction]) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:1} {:10} {:<24} {:>12}\n",
        "", "Date", "Description", "Amount"
    ));
    output.push_str(&"-".repeat(50));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(txn));
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    fn sample() -> Transaction {
        Transaction::new(
            NaiveDate::from_ymd_opt(2024, 5, 10).unwrap(),
            Money::from_cents(2000),
            "Groceries",
            TransactionKind::Expense,
        )
    }

    #[test]
    fn test_row_marks_expense() {
        let row = format_transaction_row(&sample());
        assert!(row.starts_with("- 2024-05-10"));
        assert!(row.contains("Groceries"));
        assert!(row.contains("$20.00"));
    }

    #[test]
    fn test_register_empty() {
        assert_eq!(format_transaction_register(&[]), "No transactions found.\n");
    }

    #[test]
    fn test_register_has_header_and_rows() {
        let register = format_transaction_register(&[sample()]);
        assert!(register.contains("Date"));
        assert!(register.contains("Groceries"));
    }
}
