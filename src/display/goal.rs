//! Goal display formatting
//!
//! Formats savings goals for terminal display, including a progress bar.

use crate::display::report::{format_bar, truncate};
use crate::models::Goal;

/// Width of the goal progress bar
const PROGRESS_WIDTH: usize = 20;

/// Format a single goal with its progress
pub fn format_goal_row(goal: &Goal) -> String {
    let bar = format_bar(
        goal.current_savings.cents() as f64,
        goal.amount.cents() as f64,
        PROGRESS_WIDTH,
    );

    let reached = if goal.is_reached() { " ✓" } else { "" };

    format!(
        "{:<24} {:>12} / {:>12}  {} {:>5.1}%  by {}{}",
        truncate(&goal.description, 24),
        goal.current_savings.to_string(),
        goal.amount.to_string(),
        bar,
        goal.progress_percent(),
        goal.target_date.format("%Y-%m-%d"),
        reached
    )
}

/// Format a list of goals
pub fn format_goal_list(goals: &[Goal]) -> String {
    if goals.is_empty() {
        return "No goals set.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<24} {:>12}   {:>12}\n",
        "Goal", "Saved", "Target"
    ));
    output.push_str(&"-".repeat(90));
    output.push('\n');

    for goal in goals {
        output.push_str(&format_goal_row(goal));
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    fn sample() -> Goal {
        let mut goal = Goal::new(
            "Vacation",
            Money::from_cents(100000),
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
        );
        goal.add_savings(Money::from_cents(50000));
        goal
    }

    #[test]
    fn test_row_shows_progress() {
        let row = format_goal_row(&sample());
        assert!(row.contains("Vacation"));
        assert!(row.contains("$500.00"));
        assert!(row.contains("$1000.00"));
        assert!(row.contains("50.0%"));
    }

    #[test]
    fn test_reached_goal_is_marked() {
        let mut goal = sample();
        goal.add_savings(Money::from_cents(50000));
        let row = format_goal_row(&goal);
        assert!(row.ends_with('✓'));
    }

    #[test]
    fn test_list_empty() {
        assert_eq!(format_goal_list(&[]), "No goals set.\n");
    }
}
