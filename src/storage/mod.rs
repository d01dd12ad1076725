//! Storage layer for tally
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation. All ledger state lives in one file.

pub mod file_io;
pub mod ledger;

pub use file_io::{read_json_optional, write_json_atomic};
pub use ledger::{LedgerRepository, LoadOutcome};

use crate::config::paths::TallyPaths;
use crate::error::TallyError;

/// Main storage coordinator
pub struct Storage {
    paths: TallyPaths,
    pub ledger: LedgerRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: TallyPaths) -> Result<Self, TallyError> {
        paths.ensure_directories()?;

        Ok(Self {
            ledger: LedgerRepository::new(paths.ledger_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &TallyPaths {
        &self.paths
    }

    /// Load ledger state from disk
    pub fn load_all(&self) -> Result<LoadOutcome, TallyError> {
        self.ledger.load()
    }

    /// Save ledger state to disk
    pub fn save_all(&self) -> Result<(), TallyError> {
        self.ledger.save()
    }
}
