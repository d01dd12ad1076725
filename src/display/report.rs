//! Report formatting utilities for terminal output

use crate::models::Money;

/// Format a money amount with color hints for terminal display
pub fn format_money_colored(amount: Money) -> String {
    if amount.is_negative() {
        format!("\x1b[31m{}\x1b[0m", amount) // Red for negative
    } else if amount.is_positive() {
        format!("\x1b[32m{}\x1b[0m", amount) // Green for positive
    } else {
        amount.to_string()
    }
}

/// Create a simple bar representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Create a signed bar around a center axis
///
/// Negative values extend left of the axis, positive values right.
/// `half_width` is the number of cells on each side.
pub fn format_signed_bar(value: f64, max_abs: f64, half_width: usize) -> String {
    if max_abs <= 0.0 {
        return format!("{}|{}", " ".repeat(half_width), " ".repeat(half_width));
    }

    let cells = ((value.abs() / max_abs) * half_width as f64).round() as usize;
    let cells = cells.min(half_width);

    if value < 0.0 {
        format!(
            "{}{}|{}",
            " ".repeat(half_width - cells),
            "█".repeat(cells),
            " ".repeat(half_width)
        )
    } else {
        format!(
            "{}|{}{}",
            " ".repeat(half_width),
            "█".repeat(cells),
            " ".repeat(half_width - cells)
        )
    }
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Format a double separator line
pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}

/// Truncate a string to a maximum length with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bar() {
        let bar = format_bar(50.0, 100.0, 10);
        assert_eq!(bar.chars().filter(|c| *c == '█').count(), 5);
    }

    #[test]
    fn test_format_signed_bar_positive() {
        let bar = format_signed_bar(100.0, 100.0, 5);
        assert_eq!(bar, "     |█████");
    }

    #[test]
    fn test_format_signed_bar_negative() {
        let bar = format_signed_bar(-100.0, 100.0, 5);
        assert_eq!(bar, "█████|     ");
    }

    #[test]
    fn test_format_signed_bar_zero_scale() {
        let bar = format_signed_bar(10.0, 0.0, 5);
        assert_eq!(bar, "     |     ");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Hello World", 5), "He...");
        assert_eq!(truncate("Hi", 5), "Hi");
        assert_eq!(truncate("Test", 4), "Test");
    }

    #[test]
    fn test_money_colored_zero_is_plain() {
        assert_eq!(format_money_colored(Money::zero()), "$0.00");
    }
}
