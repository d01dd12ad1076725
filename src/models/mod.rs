//! Core data models for tally
//!
//! This module contains the data structures that make up the ledger domain:
//! transactions, savings goals, and the money type they share.

pub mod goal;
pub mod ids;
pub mod money;
pub mod transaction;

pub use goal::Goal;
pub use ids::{GoalId, TransactionId};
pub use money::Money;
pub use transaction::{Transaction, TransactionKind};
