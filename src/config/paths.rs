//! Path management for the expense tracker
//!
//! ## Path Resolution Order
//!
//! 1. An explicit directory (the `--data-dir` flag)
//! 2. `EXPENSE_TRACKER_DIR` environment variable (if set)
//! 3. The current working directory

use std::path::{Path, PathBuf};

use crate::error::TrackerError;

/// Environment variable that overrides the data directory
pub const DATA_DIR_ENV: &str = "EXPENSE_TRACKER_DIR";

/// Name of the expense data file
pub const EXPENSES_FILE_NAME: &str = "expenses.json";

/// Manages all paths used by the expense tracker
#[derive(Debug, Clone)]
pub struct TrackerPaths {
    /// Directory holding the data file, settings and audit log
    base_dir: PathBuf,
}

impl TrackerPaths {
    /// Resolve the data directory
    ///
    /// # Errors
    ///
    /// Returns an error if no override is given and the working directory
    /// cannot be determined.
    pub fn new(explicit: Option<PathBuf>) -> Result<Self, TrackerError> {
        let base_dir = match explicit {
            Some(dir) => dir,
            None => match std::env::var(DATA_DIR_ENV) {
                Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
                _ => std::env::current_dir().map_err(|e| {
                    TrackerError::Config(format!("Could not determine working directory: {}", e))
                })?,
            },
        };

        Ok(Self { base_dir })
    }

    /// Create TrackerPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to expenses.json
    pub fn expenses_file(&self) -> PathBuf {
        self.base_dir.join(EXPENSES_FILE_NAME)
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("expense-tracker.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("expenses-audit.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), TrackerError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| TrackerError::Io(format!("Failed to create data directory: {}", e)))
    }
}
