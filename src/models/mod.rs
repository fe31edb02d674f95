//! Core data models for the expense tracker
//!
//! This module contains the data structures of the expense domain: money
//! amounts, expenses and the time buckets used by reports.

pub mod expense;
pub mod money;
pub mod period;

pub use expense::{Expense, ExpenseDate, ExpenseDraft, ExpenseUpdate, ExpenseValidationError};
pub use money::Money;
pub use period::{PeriodKey, TimeBucket};
