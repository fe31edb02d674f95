//! Report formatting utilities for terminal output

use crate::reports::CategoryTotal;

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

/// Text rendering of the per-category totals with proportional bars
pub fn format_category_totals(totals: &[CategoryTotal], currency: &str) -> String {
    if totals.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let max = totals
        .iter()
        .map(|t| t.total.as_decimal())
        .fold(0.0, f64::max);

    let mut output = String::new();
    output.push_str(&format!("{:<20} {:>12}  {}\n", "Category", "Total", "Share"));
    output.push_str(&format!("{}\n", "─".repeat(56)));

    for total in totals {
        output.push_str(&format!(
            "{:<20} {:>12}  {}\n",
            truncate(&total.category, 20),
            total.total.format_with_symbol(currency),
            format_bar(total.total.as_decimal(), max, 20)
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_format_bar() {
        let bar = format_bar(50.0, 100.0, 10);
        assert_eq!(bar.chars().filter(|c| *c == '█').count(), 5);
        assert_eq!(format_bar(0.0, 100.0, 4), "    ");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Hello World", 5), "He...");
        assert_eq!(truncate("Hi", 5), "Hi");
        assert_eq!(truncate("Café au lait", 6), "Caf...");
    }

    #[test]
    fn test_category_totals() {
        let totals = vec![
            CategoryTotal {
                category: "Food".into(),
                total: Money::from_cents(15000),
                count: 2,
            },
            CategoryTotal {
                category: "Transport".into(),
                total: Money::from_cents(7500),
                count: 1,
            },
        ];

        let text = format_category_totals(&totals, "$");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[2].starts_with("Food"));
        assert!(lines[2].contains("$150.00"));
        assert_eq!(lines[2].chars().filter(|c| *c == '█').count(), 20);
        assert_eq!(lines[3].chars().filter(|c| *c == '█').count(), 10);
    }
}
