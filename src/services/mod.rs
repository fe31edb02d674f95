//! Service layer for the expense tracker
//!
//! The service layer sits between the CLI and storage. It validates user
//! input, applies it to the store and persists the result.

pub mod expense;

pub use expense::{ActionKind, ExpenseService, ModifyAction, ModifyOutcome};
