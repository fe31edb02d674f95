//! Expense repository for JSON storage
//!
//! Holds the whole expense list in memory and rewrites expenses.json after
//! every mutation. Positions are 0-based indexes into the insertion-ordered
//! list; callers that show ordinals to the user add one.
//!
//! Audit writes happen after the data file is saved. A failed audit write
//! does not undo the change; it is kept until `take_audit_failures`.

use std::path::{Path, PathBuf};

use crate::audit::{generate_diff, AuditEntry, AuditLogger};
use crate::config::paths::TrackerPaths;
use crate::config::settings::Settings;
use crate::error::{TrackerError, TrackerResult};
use crate::models::Expense;

use super::file_io::{read_json, write_json_atomic};

/// In-memory expense list backed by a JSON file
pub struct ExpenseStore {
    path: PathBuf,
    expenses: Vec<Expense>,
    audit: Option<AuditLogger>,
    audit_failures: Vec<TrackerError>,
}

impl ExpenseStore {
    /// Create an empty store for the given data file; call `load` to read it
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            expenses: Vec::new(),
            audit: None,
            audit_failures: Vec::new(),
        }
    }

    /// Record every mutation in `logger`
    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    /// Open and load the store described by the paths and settings
    pub fn open(paths: &TrackerPaths, settings: &Settings) -> TrackerResult<Self> {
        paths.ensure_directories()?;

        let mut store = Self::new(paths.expenses_file());
        if settings.audit_enabled {
            store = store.with_audit(AuditLogger::new(paths.audit_log()));
        }
        store.load()?;
        Ok(store)
    }

    /// Load expenses from disk, replacing whatever is in memory
    ///
    /// A missing file yields an empty list.
    pub fn load(&mut self) -> TrackerResult<()> {
        self.expenses = read_json(&self.path)?;
        Ok(())
    }

    /// Save expenses to disk
    pub fn save(&self) -> TrackerResult<()> {
        write_json_atomic(&self.path, &self.expenses)
    }

    /// Path of the backing data file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All expenses in insertion order
    pub fn all(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn get(&self, index: usize) -> Option<&Expense> {
        self.expenses.get(index)
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Append an expense, returning its index
    pub fn push(&mut self, expense: Expense) -> usize {
        self.expenses.push(expense);
        self.expenses.len() - 1
    }

    /// Replace the expense at `index`, returning the previous value
    pub fn replace(&mut self, index: usize, expense: Expense) -> Option<Expense> {
        self.expenses
            .get_mut(index)
            .map(|slot| std::mem::replace(slot, expense))
    }

    /// Put an expense back at `index`, shifting later expenses up by one
    pub fn insert(&mut self, index: usize, expense: Expense) {
        let index = index.min(self.expenses.len());
        self.expenses.insert(index, expense);
    }

    /// Remove the expense at `index`; later expenses shift down by one
    pub fn remove(&mut self, index: usize) -> Option<Expense> {
        (index < self.expenses.len()).then(|| self.expenses.remove(index))
    }

    /// Audit a newly created expense at `index`
    pub fn log_create(&mut self, index: usize, expense: &Expense) {
        self.record(AuditEntry::create(index + 1, expense));
    }

    /// Audit an edit of the expense at `index`
    pub fn log_update(&mut self, index: usize, before: &Expense, after: &Expense) {
        let diff = match (serde_json::to_value(before), serde_json::to_value(after)) {
            (Ok(b), Ok(a)) => generate_diff(&b, &a),
            _ => None,
        };
        self.record(AuditEntry::update(index + 1, before, after, diff));
    }

    /// Audit the removal of the expense that was at `index`
    pub fn log_delete(&mut self, index: usize, expense: &Expense) {
        self.record(AuditEntry::delete(index + 1, expense));
    }

    /// Audit writes that failed since the last call
    pub fn take_audit_failures(&mut self) -> Vec<TrackerError> {
        std::mem::take(&mut self.audit_failures)
    }

    fn record(&mut self, entry: AuditEntry) {
        if let Some(logger) = &self.audit {
            if let Err(err) = logger.log(&entry) {
                self.audit_failures.push(err);
            }
        }
    }
}
