//! Task types: Task and Priority

use super::ids::{ColumnId, TaskId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Urgency of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A card on the board.
///
/// A task never stores its own index; position lives in the owning column's
/// `item_ids` sequence. `column_id` must always name the column that lists it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub tags: Vec<String>,
    pub column_id: ColumnId,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Whether the task carries the given tag
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> Task {
        let at = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
        Task {
            id: TaskId::from_string("t1"),
            title: "Buy milk".into(),
            description: String::new(),
            priority: Priority::Low,
            tags: vec!["errand".into()],
            column_id: ColumnId::Todo,
            created_at: at,
            updated_at: at,
        }
    }

    #[test]
    fn test_task_wire_shape() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["columnId"], "todo");
        assert_eq!(value["priority"], "low");
        assert_eq!(value["createdAt"], 1_700_000_000_123i64);
        assert_eq!(value["tags"][0], "errand");
    }

    #[test]
    fn test_task_defaults_on_read() {
        let json = r#"{
            "id": "t2",
            "title": "Sparse",
            "columnId": "completed",
            "createdAt": 0,
            "updatedAt": 0
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.priority, Priority::Medium);
        assert!(task.tags.is_empty());
        assert!(task.description.is_empty());
    }

    #[test]
    fn test_has_tag() {
        let task = sample();
        assert!(task.has_tag("errand"));
        assert!(!task.has_tag("work"));
    }
}
