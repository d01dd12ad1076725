//! Service layer for tally
//!
//! The service layer provides business logic on top of the storage layer:
//! recording transactions, computing the balance, and managing goals.

pub mod goal;
pub mod transaction;

pub use goal::GoalService;
pub use transaction::{CreateTransactionInput, TransactionService};
