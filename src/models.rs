// Data model for the task list

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single to-do item
///
/// The id is assigned once at creation and never changes. Position in the
/// list is not part of the task itself; it is the task's index in the owning
/// sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub created_at: i64,
}

impl Task {
    /// Create a task with a fresh id and the current timestamp.
    ///
    /// UUIDv7 ids are time-ordered, so `(created_at, id)` gives a stable
    /// insertion order even for tasks created within the same millisecond.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7().to_string(),
            title: title.into(),
            created_at: now_ms(),
        }
    }
}

/// Helper function to get current timestamp in milliseconds
pub fn now_ms() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("System time before Unix epoch")
        .as_millis() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_now_ms() {
        let ts = now_ms();
        assert!(ts > 0);
        // Should be reasonable timestamp (after year 2020)
        assert!(ts > 1_600_000_000_000);
    }

    #[test]
    fn test_new_assigns_distinct_ids() {
        let a = Task::new("one");
        let b = Task::new("two");
        assert_ne!(a.id, b.id);
        assert!(!a.id.is_empty());
        assert!(a.created_at > 0);
    }

    #[test]
    fn test_task_serialization() {
        let task = Task {
            id: "test-id".to_string(),
            title: "Buy milk".to_string(),
            created_at: 1000,
        };

        let json = serde_json::to_string(&task).unwrap();
        let deserialized: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, task);
    }
}
