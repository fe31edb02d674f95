//! Expense display formatting
//!
//! Formats the expense list for terminal output, both as the numbered list
//! used when picking an expense and as a table.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use crate::models::Expense;

/// A single expense: `2024-01-01 - Food: $120.00`
pub fn format_expense(expense: &Expense, currency: &str) -> String {
    format!(
        "{} - {}: {}",
        expense.date,
        expense.category,
        expense.amount.format_with_symbol(currency)
    )
}

/// One line of the selection list: `1. 2024-01-01 - Food: $120.00`
pub fn format_expense_line(ordinal: usize, expense: &Expense, currency: &str) -> String {
    format!("{}. {}", ordinal, format_expense(expense, currency))
}

/// Numbered list of all expenses, ordinals starting at 1
pub fn format_expense_list(expenses: &[Expense], currency: &str) -> String {
    if expenses.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    expenses
        .iter()
        .enumerate()
        .map(|(i, e)| format_expense_line(i + 1, e, currency) + "\n")
        .collect()
}

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "#")]
    ordinal: usize,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// All expenses as a table with a total line underneath
pub fn format_expense_table(expenses: &[Expense], currency: &str) -> String {
    if expenses.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let rows = expenses.iter().enumerate().map(|(i, e)| ExpenseRow {
        ordinal: i + 1,
        date: e.date.to_string(),
        category: e.category.clone(),
        amount: e.amount.format_with_symbol(currency),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::sharp())
        .modify(Columns::single(3), Alignment::right());

    let total = crate::reports::overall_total(expenses);
    format!(
        "{}\n{} expense(s), total {}\n",
        table,
        expenses.len(),
        total.format_with_symbol(currency)
    )
}
