//! Goal service
//!
//! Provides business logic for savings goals: creating them and adding
//! savings toward an existing goal by description.

use chrono::NaiveDate;

use crate::error::{TallyError, TallyResult};
use crate::models::{Goal, Money};
use crate::storage::Storage;

/// Service for savings goal operations
pub struct GoalService<'a> {
    storage: &'a Storage,
}

impl<'a> GoalService<'a> {
    /// Create a new goal service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Set a new savings goal with zero current savings
    pub fn set(
        &self,
        description: impl Into<String>,
        amount: Money,
        target_date: NaiveDate,
    ) -> TallyResult<Goal> {
        let description = description.into();
        if description.trim().is_empty() {
            return Err(TallyError::Validation(
                "Goal description cannot be empty".into(),
            ));
        }

        let goal = Goal::new(description, amount, target_date);
        self.storage.ledger.append_goal(goal.clone())?;
        Ok(goal)
    }

    /// Add savings to the first goal matching the given description
    ///
    /// Returns the updated goal. An unknown description is an explicit
    /// not-found error; no goal is changed in that case.
    pub fn add_savings(&self, description: &str, amount: Money) -> TallyResult<Goal> {
        self.storage
            .ledger
            .add_savings_to_goal(description, amount)?
            .ok_or_else(|| TallyError::goal_not_found(description))
    }

    /// List all goals in insertion order
    pub fn list(&self) -> TallyResult<Vec<Goal>> {
        self.storage.ledger.goals()
    }
}
