//! Transaction model
//!
//! Represents a single recorded income or expense event. Transactions are
//! immutable once created; the ledger only ever appends or replaces them
//! wholesale on reload.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::TransactionId;
use super::money::Money;

/// The kind of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money coming in
    Income,
    /// Money going out
    Expense,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

impl FromStr for TransactionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" | "in" | "i" => Ok(Self::Income),
            "expense" | "out" | "e" => Ok(Self::Expense),
            other => Err(format!(
                "Unknown transaction kind '{}'. Valid options: income, expense",
                other
            )),
        }
    }
}

/// A recorded income or expense event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Transaction date
    pub date: NaiveDate,

    /// Amount (magnitude; the kind determines the sign of its effect)
    pub amount: Money,

    /// A short description of the transaction
    #[serde(default)]
    pub description: String,

    /// Whether this is income or an expense
    pub kind: TransactionKind,

    /// When the transaction was recorded
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(
        date: NaiveDate,
        amount: Money,
        description: impl Into<String>,
        kind: TransactionKind,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            date,
            amount,
            description: description.into(),
            kind,
            created_at: Utc::now(),
        }
    }

    /// Check if this is an income transaction
    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    /// Check if this is an expense transaction
    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// The signed effect of this transaction on the balance
    ///
    /// Income counts positive, expense counts negative.
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} on {} - {}",
            self.kind,
            self.amount,
            self.date.format("%Y-%m-%d"),
            self.description
        )
    }
}
