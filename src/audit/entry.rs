//! Audit entry data structures
//!
//! Defines the operation types and the shape of one audit log line.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Expense;

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Update,
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Update => write!(f, "UPDATE"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

/// A single audit log entry
///
/// Records one mutation of the expense list. `position` is the 1-based
/// ordinal of the expense at the time of the operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Type of operation performed
    pub operation: Operation,

    /// Ordinal of the affected expense
    pub position: usize,

    /// Category of the affected expense
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// The expense before the operation (for updates/deletes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    /// The expense after the operation (for creates/updates)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,

    /// Human-readable diff summary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff_summary: Option<String>,
}

impl AuditEntry {
    /// Create a new audit entry for a create operation
    pub fn create(position: usize, expense: &Expense) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Create,
            position,
            category: Some(expense.category.clone()),
            before: None,
            after: serde_json::to_value(expense).ok(),
            diff_summary: None,
        }
    }

    /// Create a new audit entry for an update operation
    pub fn update(
        position: usize,
        before: &Expense,
        after: &Expense,
        diff_summary: Option<String>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Update,
            position,
            category: Some(after.category.clone()),
            before: serde_json::to_value(before).ok(),
            after: serde_json::to_value(after).ok(),
            diff_summary,
        }
    }

    /// Create a new audit entry for a delete operation
    pub fn delete(position: usize, expense: &Expense) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Delete,
            position,
            category: Some(expense.category.clone()),
            before: serde_json::to_value(expense).ok(),
            after: None,
            diff_summary: None,
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} expense #{}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.position
        );

        if let Some(category) = &self.category {
            output.push_str(&format!(" ({})", category));
        }

        if let Some(diff) = &self.diff_summary {
            output.push_str(&format!("\n  Changes: {}", diff));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    fn food() -> Expense {
        Expense::new(
            Money::from_cents(12000),
            "Food",
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        )
    }

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::Create.to_string(), "CREATE");
        assert_eq!(Operation::Update.to_string(), "UPDATE");
        assert_eq!(Operation::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_create_entry() {
        let entry = AuditEntry::create(1, &food());

        assert_eq!(entry.operation, Operation::Create);
        assert_eq!(entry.position, 1);
        assert!(entry.before.is_none());
        assert_eq!(entry.after.unwrap()["category"], "Food");
    }

    #[test]
    fn test_delete_entry() {
        let entry = AuditEntry::delete(2, &food());

        assert_eq!(entry.operation, Operation::Delete);
        assert!(entry.before.is_some());
        assert!(entry.after.is_none());
    }

    #[test]
    fn test_human_readable() {
        let mut after = food();
        after.category = "Groceries".into();
        let entry = AuditEntry::update(
            3,
            &food(),
            &after,
            Some("category: \"Food\" -> \"Groceries\"".to_string()),
        );

        let text = entry.format_human_readable();
        assert!(text.contains("UPDATE expense #3 (Groceries)"));
        assert!(text.contains("Changes: category"));
    }

    #[test]
    fn test_serialization_skips_empty_fields() {
        let entry = AuditEntry::create(1, &food());
        let json = serde_json::to_string(&entry).unwrap();

        assert!(json.contains("\"operation\":\"create\""));
        assert!(!json.contains("\"before\""));
        assert!(!json.contains("diff_summary"));

        let parsed: AuditEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.position, 1);
    }
}
