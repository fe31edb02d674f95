//! Export module for the expense tracker
//!
//! CSV export of the expense list for spreadsheets.

pub mod csv;

pub use self::csv::export_expenses_csv;
