//! Expense service
//!
//! Business logic for logging and modifying expenses. Every mutation is
//! validated first, then applied and saved. A failed save restores the
//! in-memory list. Audit failures after a successful save are left on the
//! store for the caller to report.

use chrono::{Local, NaiveDate};

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Expense, ExpenseDraft, ExpenseUpdate};
use crate::storage::ExpenseStore;

/// Service for expense management
pub struct ExpenseService<'a> {
    store: &'a mut ExpenseStore,
}

/// What to do with a selected expense
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModifyAction {
    Delete,
    Edit(ExpenseUpdate),
    /// Unknown action letter: nothing changes
    Keep,
}

/// Which modify action the user asked for, before edit fields are collected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Delete,
    Edit,
    Other,
}

impl ActionKind {
    /// Interpret the action letter, ignoring case
    pub fn from_input(input: &str) -> Self {
        match input.trim().to_lowercase().as_str() {
            "d" => Self::Delete,
            "e" => Self::Edit,
            _ => Self::Other,
        }
    }
}

/// Result of applying a `ModifyAction`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModifyOutcome {
    Deleted(Expense),
    Updated { before: Expense, after: Expense },
    Unchanged,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(store: &'a mut ExpenseStore) -> Self {
        Self { store }
    }

    /// Validate and log a new expense dated today when no date is given
    pub fn add(&mut self, draft: ExpenseDraft) -> TrackerResult<Expense> {
        self.add_as_of(draft, Local::now().date_naive())
    }

    /// Validate and log a new expense, using `today` for a blank date
    pub fn add_as_of(&mut self, draft: ExpenseDraft, today: NaiveDate) -> TrackerResult<Expense> {
        let expense = draft.into_expense(today)?;

        let index = self.store.push(expense.clone());
        if let Err(err) = self.store.save() {
            self.store.remove(index);
            return Err(err);
        }
        self.store.log_create(index, &expense);

        Ok(expense)
    }

    /// All expenses in insertion order
    pub fn list(&self) -> &[Expense] {
        self.store.all()
    }

    /// Turn a 1-based ordinal typed by the user into an index
    pub fn select(&self, ordinal: &str) -> TrackerResult<usize> {
        let count = self.store.len();
        ordinal
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .filter(|index| *index < count)
            .ok_or_else(|| TrackerError::invalid_selection(ordinal.trim(), count))
    }

    /// Get the expense at `index`
    pub fn get(&self, index: usize) -> TrackerResult<&Expense> {
        self.store
            .get(index)
            .ok_or_else(|| TrackerError::invalid_selection((index + 1).to_string(), self.store.len()))
    }

    /// Delete the expense at `index`
    pub fn delete(&mut self, index: usize) -> TrackerResult<Expense> {
        let removed = self
            .store
            .remove(index)
            .ok_or_else(|| TrackerError::invalid_selection((index + 1).to_string(), self.store.len()))?;

        if let Err(err) = self.store.save() {
            self.store.insert(index, removed);
            return Err(err);
        }
        self.store.log_delete(index, &removed);

        Ok(removed)
    }

    /// Overwrite fields of the expense at `index`
    pub fn update(&mut self, index: usize, update: &ExpenseUpdate) -> TrackerResult<(Expense, Expense)> {
        let updated = update.apply_to(self.get(index)?)?;

        let before = self
            .store
            .replace(index, updated.clone())
            .ok_or_else(|| TrackerError::invalid_selection((index + 1).to_string(), self.store.len()))?;

        if let Err(err) = self.store.save() {
            self.store.replace(index, before);
            return Err(err);
        }
        if before != updated {
            self.store.log_update(index, &before, &updated);
        }

        Ok((before, updated))
    }

    /// Apply a modify action to the expense at `index`
    ///
    /// `Keep` still rewrites the data file, matching the other actions.
    pub fn apply(&mut self, index: usize, action: ModifyAction) -> TrackerResult<ModifyOutcome> {
        match action {
            ModifyAction::Delete => self.delete(index).map(ModifyOutcome::Deleted),
            ModifyAction::Edit(update) => self
                .update(index, &update)
                .map(|(before, after)| ModifyOutcome::Updated { before, after }),
            ModifyAction::Keep => {
                self.get(index)?;
                self.store.save()?;
                Ok(ModifyOutcome::Unchanged)
            }
        }
    }
}
