//! Audit entry data structures
//!
//! Defines the operation types and the per-change entry format.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Expense;

use super::diff::generate_diff;

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Expense was added
    Create,
    /// Expense was edited
    Update,
    /// Expense was deleted
    Delete,
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Type of operation performed
    pub operation: Operation,

    /// 1-based ledger position of the expense at the time of the change
    pub position: usize,

    /// Expense before the operation (for updates/deletes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    /// Expense after the operation (for creates/updates)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,

    /// Human-readable diff summary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff_summary: Option<String>,
}

impl AuditEntry {
    /// Entry for an added expense
    pub fn create(position: usize, expense: &Expense) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Create,
            position,
            before: None,
            after: serde_json::to_value(expense).ok(),
            diff_summary: None,
        }
    }

    /// Entry for an edited expense, with a diff of the changed fields
    pub fn update(position: usize, before: &Expense, after: &Expense) -> Self {
        let before = serde_json::to_value(before).ok();
        let after = serde_json::to_value(after).ok();
        let diff_summary = match (&before, &after) {
            (Some(b), Some(a)) => generate_diff(b, a),
            _ => None,
        };

        Self {
            timestamp: Utc::now(),
            operation: Operation::Update,
            position,
            before,
            after,
            diff_summary,
        }
    }

    /// Entry for a deleted expense
    pub fn delete(position: usize, expense: &Expense) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Delete,
            position,
            before: serde_json::to_value(expense).ok(),
            after: None,
            diff_summary: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn food() -> Expense {
        Expense::new(50.0, "Food", "2024-01-01")
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
    fn test_update_entry_has_diff() {
        let after = Expense::new(50.0, "Transport", "2024-01-01");
        let entry = AuditEntry::update(1, &food(), &after);

        assert_eq!(entry.operation, Operation::Update);
        assert!(entry.before.is_some());
        assert!(entry.after.is_some());
        assert_eq!(
            entry.diff_summary,
            Some("category: \"Food\" -> \"Transport\"".to_string())
        );
    }

    #[test]
    fn test_delete_entry() {
        let entry = AuditEntry::delete(2, &food());

        assert_eq!(entry.operation, Operation::Delete);
        assert!(entry.before.is_some());
        assert!(entry.after.is_none());
    }

    #[test]
    fn test_serialization_round_trip() {
        let entry = AuditEntry::create(3, &food());

        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"operation\":\"create\""));

        let deserialized: AuditEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.operation, Operation::Create);
        assert_eq!(deserialized.position, 3);
    }
}
