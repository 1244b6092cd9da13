//! AddTask command

use crate::command::Reduce;
use crate::context::ReduceContext;
use crate::types::{Board, ColumnId, Priority, Task};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Create a task at the end of a column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddTask {
    /// Column receiving the new task
    pub column_id: ColumnId,
    /// The task title (required)
    pub title: String,
    /// Detailed task description
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub priority: Priority,
    /// Tags to apply
    #[serde(default)]
    pub tags: Vec<String>,
}

impl AddTask {
    /// Create a new AddTask command with just a column and title
    pub fn new(column_id: ColumnId, title: impl Into<String>) -> Self {
        Self {
            column_id,
            title: title.into(),
            description: String::new(),
            priority: Priority::default(),
            tags: Vec::new(),
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the priority
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Set the tags
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }
}

impl Reduce for AddTask {
    fn reduce(&self, board: &Board, ctx: &ReduceContext) -> Board {
        let id = ctx.fresh_id(board);
        let now = ctx.now();

        let task = Task {
            id: id.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            priority: self.priority,
            tags: self.tags.clone(),
            column_id: self.column_id,
            created_at: now,
            updated_at: now,
        };

        let mut next = board.clone();
        next.items_mut().insert(id.clone(), Arc::new(task));
        next.column_mut(self.column_id).item_ids.push(id.clone());

        debug!(task_id = %id, column = %self.column_id, "added task");
        next
    }
}
