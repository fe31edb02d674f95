//! CSV Export functionality
//!
//! Exports the expense list as `amount,category,date` rows.

use std::io::Write;

use crate::error::TrackerResult;
use crate::models::Expense;

/// Export all expenses to CSV, in insertion order
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: W) -> TrackerResult<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    csv_writer.write_record(["amount", "category", "date"])?;
    for expense in expenses {
        csv_writer.write_record([
            expense.amount.format_plain(),
            expense.category.clone(),
            expense.date.to_string(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}
