//! Savings goal model
//!
//! Tracks a savings target with a deadline and the amount saved toward it
//! so far. Goals are independent of transactions; adding savings to a goal
//! does not create a ledger entry.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::GoalId;
use super::money::Money;

/// A savings goal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    /// Unique identifier
    pub id: GoalId,

    /// A short description of the goal
    pub description: String,

    /// The total amount needed for the goal
    pub amount: Money,

    /// The date by which the goal should be achieved
    pub target_date: NaiveDate,

    /// Amount saved toward the goal so far
    #[serde(default)]
    pub current_savings: Money,

    /// When the goal was created
    pub created_at: DateTime<Utc>,

    /// When savings were last added
    pub updated_at: DateTime<Utc>,
}

impl Goal {
    /// Create a new goal with zero savings
    pub fn new(description: impl Into<String>, amount: Money, target_date: NaiveDate) -> Self {
        let now = Utc::now();
        Self {
            id: GoalId::new(),
            description: description.into(),
            amount,
            target_date,
            current_savings: Money::zero(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Add savings toward this goal
    pub fn add_savings(&mut self, amount: Money) {
        self.current_savings += amount;
        self.updated_at = Utc::now();
    }

    /// Amount still needed to reach the goal (never negative)
    pub fn remaining(&self) -> Money {
        let remaining = self.amount - self.current_savings;
        if remaining.is_negative() {
            Money::zero()
        } else {
            remaining
        }
    }

    /// Progress toward the goal as a percentage (may exceed 100)
    pub fn progress_percent(&self) -> f64 {
        if self.amount.is_zero() {
            return 100.0;
        }
        (self.current_savings.cents() as f64 / self.amount.cents() as f64) * 100.0
    }

    /// Check if the goal amount has been saved
    pub fn is_reached(&self) -> bool {
        self.current_savings >= self.amount
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - Save {} by {}",
            self.description,
            self.amount,
            self.target_date.format("%Y-%m-%d")
        )
    }
}
