//! Expense tracker - terminal-based personal expense logger
//!
//! This library provides the core functionality of the `expenses` binary:
//! logging expenses to a local JSON file, editing and deleting them by their
//! position in the list, and summarising spending by category and over time.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data directory resolution and user settings
//! - `error`: Custom error types
//! - `models`: Core data models (money, expenses, time buckets)
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer
//! - `reports`: Read-only aggregations
//! - `audit`: Audit logging system
//! - `display`: Text formatting for terminal output
//! - `tui`: The graphical bar chart
//! - `export`: CSV export
//! - `cli`: Command handlers and the interactive menu
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::config::{Settings, TrackerPaths};
//! use expense_tracker::storage::ExpenseStore;
//!
//! let paths = TrackerPaths::new(None)?;
//! let settings = Settings::load_or_create(&paths)?;
//! let store = ExpenseStore::open(&paths, &settings)?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::TrackerError;
