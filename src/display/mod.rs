//! Display formatting for terminal output

pub mod expense;
pub mod report;

pub use expense::{format_expense, format_expense_line, format_expense_list, format_expense_table};
pub use report::format_category_totals;
