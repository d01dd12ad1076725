//! Reports module for tally
//!
//! Provides the monthly expense summary and the net-change-over-time
//! visualization.

pub mod monthly;
pub mod net_change;

pub use monthly::{ExpenseLine, MonthlyExpenseReport};
pub use net_change::{NetChangePoint, NetChangeReport};
