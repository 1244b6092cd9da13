//! DeleteTask command

use crate::command::Reduce;
use crate::context::ReduceContext;
use crate::types::{Board, TaskId};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Remove a task from the board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteTask {
    /// The task ID to delete
    pub id: TaskId,
}

impl DeleteTask {
    pub fn new(id: impl Into<TaskId>) -> Self {
        Self { id: id.into() }
    }
}

impl Reduce for DeleteTask {
    fn reduce(&self, board: &Board, _ctx: &ReduceContext) -> Board {
        let Some(task) = board.task(&self.id) else {
            debug!(task_id = %self.id, "delete ignored: unknown task");
            return board.clone();
        };
        let column = task.column_id;

        let mut next = board.clone();
        next.items_mut().remove(&self.id);
        next.column_mut(column).item_ids.retain(|id| id != &self.id);

        debug!(task_id = %self.id, %column, "deleted task");
        next
    }
}
