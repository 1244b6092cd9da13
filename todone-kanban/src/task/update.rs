//! UpdateTask command

use crate::command::Reduce;
use crate::context::ReduceContext;
use crate::types::{Board, ColumnId, Priority, TaskId};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Merge a partial set of fields into an existing task
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTask {
    /// The task ID to update
    pub id: TaskId,
    /// New title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    /// Replace all tags
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// New column; the task moves to the end of it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_id: Option<ColumnId>,
}

impl UpdateTask {
    /// Create a new UpdateTask command
    pub fn new(id: impl Into<TaskId>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Set the tags (replaces all existing tags)
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = Some(tags);
        self
    }

    pub fn with_column(mut self, column_id: ColumnId) -> Self {
        self.column_id = Some(column_id);
        self
    }
}

impl Reduce for UpdateTask {
    fn reduce(&self, board: &Board, ctx: &ReduceContext) -> Board {
        let Some(existing) = board.task(&self.id) else {
            debug!(task_id = %self.id, "update ignored: unknown task");
            return board.clone();
        };

        let mut task = existing.clone();
        let old_column = task.column_id;

        if let Some(title) = &self.title {
            task.title = title.clone();
        }
        if let Some(description) = &self.description {
            task.description = description.clone();
        }
        if let Some(priority) = self.priority {
            task.priority = priority;
        }
        if let Some(tags) = &self.tags {
            task.tags = tags.clone();
        }
        if let Some(column) = self.column_id {
            task.column_id = column;
        }
        task.updated_at = ctx.now();

        let new_column = task.column_id;
        let mut next = board.clone();
        next.items_mut().insert(self.id.clone(), Arc::new(task));

        if new_column != old_column {
            next.column_mut(old_column)
                .item_ids
                .retain(|id| id != &self.id);
            next.column_mut(new_column).item_ids.push(self.id.clone());
            debug!(task_id = %self.id, from = %old_column, to = %new_column, "updated task and changed column");
        } else {
            debug!(task_id = %self.id, "updated task");
        }

        next
    }
}
