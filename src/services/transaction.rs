//! Transaction service
//!
//! Provides business logic for recording transactions, computing the
//! running balance, and selecting a month's expenses.

use chrono::Datelike;

use crate::error::{TallyError, TallyResult};
use crate::models::{Money, Transaction, TransactionKind};
use crate::storage::Storage;

/// Service for transaction operations
pub struct TransactionService<'a> {
    storage: &'a Storage,
}

/// Input for recording a new transaction
#[derive(Debug, Clone)]
pub struct CreateTransactionInput {
    pub date: chrono::NaiveDate,
    pub amount: Money,
    pub description: String,
    pub kind: TransactionKind,
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a new transaction
    ///
    /// Amounts are recorded as given; the sign of their effect on the
    /// balance comes from the kind, not the amount.
    pub fn add(&self, input: CreateTransactionInput) -> TallyResult<Transaction> {
        let txn = Transaction::new(input.date, input.amount, input.description, input.kind);
        self.storage.ledger.append_transaction(txn.clone())?;
        Ok(txn)
    }

    /// List all transactions in insertion order
    pub fn list(&self) -> TallyResult<Vec<Transaction>> {
        self.storage.ledger.transactions()
    }

    /// Compute the current balance: sum(income) - sum(expense)
    pub fn balance(&self) -> TallyResult<Money> {
        let transactions = self.storage.ledger.transactions()?;
        Ok(transactions.iter().map(|t| t.signed_amount()).sum())
    }

    /// Expenses that fall in the given month and year, in insertion order
    pub fn monthly_expenses(&self, month: u32, year: i32) -> TallyResult<Vec<Transaction>> {
        if !(1..=12).contains(&month) {
            return Err(TallyError::Validation(format!(
                "Invalid month '{}'. Use a value from 1 to 12",
                month
            )));
        }

        let transactions = self.storage.ledger.transactions()?;
        Ok(transactions
            .into_iter()
            .filter(|t| t.is_expense() && t.date.month() == month && t.date.year() == year)
            .collect())
    }
}
