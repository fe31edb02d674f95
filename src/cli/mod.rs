//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod export;
pub mod expense;
pub mod history;
pub mod menu;
pub mod summary;

pub use export::handle_export_command;
pub use expense::{handle_expense_command, ExpenseCommands};
pub use history::handle_history_command;
pub use menu::{Menu, MenuChoice, SummaryChoice};
pub use summary::{handle_chart_command, handle_summary_command, SummaryCommands};
