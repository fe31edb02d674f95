//! Totals by category and overall
//!
//! All reports here are read-only linear scans over the expense list.

use crate::models::{Expense, Money};

/// Sum of the expenses whose category matches `category`, ignoring case
///
/// An unknown category totals zero.
pub fn category_total(expenses: &[Expense], category: &str) -> Money {
    expenses
        .iter()
        .filter(|e| e.matches_category(category))
        .map(|e| e.amount)
        .sum()
}

/// Sum of every expense
pub fn overall_total(expenses: &[Expense]) -> Money {
    expenses.iter().map(|e| e.amount).sum()
}

/// Spending for one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    /// Category as first written by the user
    pub category: String,
    /// Total spending
    pub total: Money,
    /// Number of expenses
    pub count: usize,
}

/// Totals per category, in order of each category's first appearance
///
/// Categories are grouped by their exact text, so "Food" and "food" get
/// separate bars.
pub fn totals_by_category(expenses: &[Expense]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();

    for expense in expenses {
        match totals.iter_mut().find(|t| t.category == expense.category) {
            Some(entry) => {
                entry.total += expense.amount;
                entry.count += 1;
            }
            None => totals.push(CategoryTotal {
                category: expense.category.clone(),
                total: expense.amount,
                count: 1,
            }),
        }
    }

    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn expense(cents: i64, category: &str, day: u32) -> Expense {
        Expense::new(
            Money::from_cents(cents),
            category,
            NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
        )
    }

    fn scenario() -> Vec<Expense> {
        vec![
            expense(12000, "Food", 1),
            expense(4550, "Transport", 1),
            expense(3000, "Food", 2),
        ]
    }

    #[test]
    fn test_category_total() {
        let expenses = scenario();
        assert_eq!(category_total(&expenses, "food"), Money::from_cents(15000));
        assert_eq!(category_total(&expenses, "Transport"), Money::from_cents(4550));
    }

    #[test]
    fn test_category_total_case_insensitive() {
        let expenses = scenario();
        for category in ["food", "Food", "FOOD", "fOoD"] {
            assert_eq!(
                category_total(&expenses, category),
                category_total(&expenses, &category.to_uppercase())
            );
            assert_eq!(
                category_total(&expenses, category),
                category_total(&expenses, &category.to_lowercase())
            );
        }
    }

    #[test]
    fn test_unknown_category_is_zero() {
        assert!(category_total(&scenario(), "Rent").is_zero());
        assert!(category_total(&[], "Food").is_zero());
    }

    #[test]
    fn test_overall_total() {
        let expenses = scenario();
        assert_eq!(overall_total(&expenses), Money::from_cents(19550));

        let by_hand: i64 = expenses.iter().map(|e| e.amount.cents()).sum();
        assert_eq!(overall_total(&expenses).cents(), by_hand);
        assert!(overall_total(&[]).is_zero());
    }

    #[test]
    fn test_totals_of_huge_amounts_saturate() {
        let expenses = vec![
            expense(i64::MAX - 1, "Food", 1),
            expense(i64::MAX - 1, "Food", 2),
        ];
        assert_eq!(overall_total(&expenses), Money::from_cents(i64::MAX));
        assert_eq!(category_total(&expenses, "food"), Money::from_cents(i64::MAX));
        assert_eq!(totals_by_category(&expenses)[0].total, Money::from_cents(i64::MAX));
    }

    #[test]
    fn test_totals_by_category_first_occurrence_order() {
        let mut expenses = scenario();
        expenses.push(expense(500, "food", 3));
        expenses.push(expense(700, "Rent", 3));

        let totals = totals_by_category(&expenses);
        let labels: Vec<&str> = totals.iter().map(|t| t.category.as_str()).collect();
        assert_eq!(labels, vec!["Food", "Transport", "food", "Rent"]);
        assert_eq!(totals[0].total, Money::from_cents(15000));
        assert_eq!(totals[0].count, 2);
        assert_eq!(totals[2].total, Money::from_cents(500));
    }
}
