//! Ledger repository for JSON storage
//!
//! Persists transactions and goals together as one JSON document with the
//! keys "transactions" and "goals". The whole document is read and written
//! wholesale; there is no partial update.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::TallyError;
use crate::models::{Goal, Money, Transaction};

use super::file_io::{read_json_optional, write_json_atomic};

/// Serializable ledger file contents
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct LedgerData {
    #[serde(default)]
    transactions: Vec<Transaction>,
    #[serde(default)]
    goals: Vec<Goal>,
}

/// Outcome of loading the ledger file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The file existed and in-memory state was replaced with its contents
    Loaded,
    /// No saved file was found; in-memory state was left untouched
    NoSavedData,
}

/// Repository for the ledger file
///
/// Both collections keep insertion order; display order is insertion order.
pub struct LedgerRepository {
    path: PathBuf,
    data: RwLock<LedgerData>,
}

impl LedgerRepository {
    /// Create a new ledger repository backed by the given file
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(LedgerData::default()),
        }
    }

    /// Load the ledger from disk, replacing in-memory state wholesale
    ///
    /// A missing file is a handled condition: the in-memory state is left
    /// as it was and `LoadOutcome::NoSavedData` is returned.
    pub fn load(&self) -> Result<LoadOutcome, TallyError> {
        let file_data: Option<LedgerData> = read_json_optional(&self.path)?;

        match file_data {
            Some(file_data) => {
                let mut data = self.data.write().map_err(|e| {
                    TallyError::Storage(format!("Failed to acquire write lock: {}", e))
                })?;
                *data = file_data;
                Ok(LoadOutcome::Loaded)
            }
            None => Ok(LoadOutcome::NoSavedData),
        }
    }

    /// Save the ledger to disk as a single JSON document
    pub fn save(&self) -> Result<(), TallyError> {
        let data = self
            .data
            .read()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        write_json_atomic(&self.path, &*data)
    }

    /// Append a transaction (insertion order is preserved)
    pub fn append_transaction(&self, txn: Transaction) -> Result<(), TallyError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.transactions.push(txn);
        Ok(())
    }

    /// Get all transactions in insertion order
    pub fn transactions(&self) -> Result<Vec<Transaction>, TallyError> {
        let data = self
            .data
            .read()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.transactions.clone())
    }

    /// Append a goal (insertion order is preserved)
    pub fn append_goal(&self, goal: Goal) -> Result<(), TallyError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.goals.push(goal);
        Ok(())
    }

    /// Get all goals in insertion order
    pub fn goals(&self) -> Result<Vec<Goal>, TallyError> {
        let data = self
            .data
            .read()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.goals.clone())
    }

    /// Add savings to the first goal whose description matches
    ///
    /// Returns the updated goal, or `None` when no goal matches. Goal
    /// descriptions are not unique; the first match wins.
    pub fn add_savings_to_goal(
        &self,
        description: &str,
        amount: Money,
    ) -> Result<Option<Goal>, TallyError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        match data.goals.iter_mut().find(|g| g.description == description) {
            Some(goal) => {
                goal.add_savings(amount);
                Ok(Some(goal.clone()))
            }
            None => Ok(None),
        }
    }

    /// Count transactions
    pub fn transaction_count(&self) -> Result<usize, TallyError> {
        let data = self
            .data
            .read()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.transactions.len())
    }

    /// Count goals
    pub fn goal_count(&self) -> Result<usize, TallyError> {
        let data = self
            .data
            .read()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.goals.len())
    }
}
