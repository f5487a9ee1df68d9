//! Task domain model

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Newtype wrapper for task ids.
///
/// Ids are opaque strings. Freshly generated ids are UUIDv4, but any
/// string read back from a store file is accepted as-is, so serialization
/// is transparent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    /// Generate a fresh id, unique across arbitrarily rapid calls.
    pub fn generate() -> Self {
        TaskId(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for TaskId {
    fn from(id: String) -> Self {
        TaskId(id)
    }
}

impl From<&str> for TaskId {
    fn from(id: &str) -> Self {
        TaskId(id.to_string())
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single task
///
/// Immutable once created except for `completed`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
    pub category: String,
}

impl Task {
    /// Create a new incomplete task with a fresh id.
    pub fn new(text: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: TaskId::generate(),
            text: text.into(),
            completed: false,
            category: category.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_creation() {
        let task = Task::new("Test task", "Work");

        assert_eq!(task.text, "Test task");
        assert_eq!(task.category, "Work");
        assert!(!task.completed);
    }

    #[test]
    fn test_ids_unique_across_rapid_calls() {
        let mut ids: Vec<TaskId> = (0..100).map(|_| TaskId::generate()).collect();
        ids.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        ids.dedup();
        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let task = Task::new("Test", "Work");
        let json = serde_json::to_value(&task).unwrap();

        assert!(json["id"].is_string());
        assert_eq!(json["id"].as_str().unwrap(), task.id.as_str());
    }

    #[test]
    fn test_foreign_id_accepted() {
        let json = r#"{"id":"not-a-uuid","text":"x","completed":true,"category":"Work"}"#;
        let task: Task = serde_json::from_str(json).unwrap();

        assert_eq!(task.id, TaskId::from("not-a-uuid"));
        assert!(task.completed);
    }
}
