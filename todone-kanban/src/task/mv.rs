//! MoveTask command

use crate::command::Reduce;
use crate::context::ReduceContext;
use crate::types::{Board, ColumnId, TaskId};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Move a task into a column at a given index
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveTask {
    /// The task ID to move
    pub item_id: TaskId,
    /// Column the caller believes the task is in
    pub from_column: ColumnId,
    pub to_column: ColumnId,
    /// Target index, clamped to the destination length
    pub new_index: usize,
}

impl MoveTask {
    pub fn new(
        item_id: impl Into<TaskId>,
        from_column: ColumnId,
        to_column: ColumnId,
        new_index: usize,
    ) -> Self {
        Self {
            item_id: item_id.into(),
            from_column,
            to_column,
            new_index,
        }
    }

    /// Move a task to the end of a column
    pub fn to_end(item_id: impl Into<TaskId>, from_column: ColumnId, to_column: ColumnId) -> Self {
        Self::new(item_id, from_column, to_column, usize::MAX)
    }
}

impl Reduce for MoveTask {
    fn reduce(&self, board: &Board, ctx: &ReduceContext) -> Board {
        let Some(existing) = board.task(&self.item_id) else {
            debug!(task_id = %self.item_id, "move ignored: unknown task");
            return board.clone();
        };

        // The owning column is authoritative; removing from a column that does
        // not list the task would leave it listed twice.
        let owner = existing.column_id;
        if owner != self.from_column {
            debug!(
                task_id = %self.item_id,
                claimed = %self.from_column,
                actual = %owner,
                "move source disagrees with owning column"
            );
        }

        let mut task = existing.clone();
        task.column_id = self.to_column;
        task.updated_at = ctx.now();

        let mut next = board.clone();
        next.column_mut(owner)
            .item_ids
            .retain(|id| id != &self.item_id);

        let destination = next.column_mut(self.to_column);
        let index = self.new_index.min(destination.item_ids.len());
        destination.item_ids.insert(index, self.item_id.clone());

        next.items_mut().insert(self.item_id.clone(), Arc::new(task));

        debug!(
            task_id = %self.item_id,
            from = %owner,
            to = %self.to_column,
            index,
            "moved task"
        );
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::AddTask;

    fn setup() -> (Board, ReduceContext) {
        let ctx = ReduceContext::default();
        let mut board = Board::empty();
        for title in ["a", "b", "c"] {
            board = AddTask::new(ColumnId::Todo, title).reduce(&board, &ctx);
        }
        board = AddTask::new(ColumnId::InProgress, "x").reduce(&board, &ctx);
        (board, ctx)
    }

    fn titles(board: &Board, column: ColumnId) -> Vec<String> {
        board
            .column_tasks(column)
            .iter()
            .map(|t| t.title.clone())
            .collect()
    }

    #[test]
    fn test_move_task_to_column() {
        let (board, ctx) = setup();
        let a = board.column_ids(ColumnId::Todo)[0].clone();

        let next = MoveTask::new(a.clone(), ColumnId::Todo, ColumnId::InProgress, 0)
            .reduce(&board, &ctx);

        assert_eq!(titles(&next, ColumnId::Todo), vec!["b", "c"]);
        assert_eq!(titles(&next, ColumnId::InProgress), vec!["a", "x"]);
        assert_eq!(next.task(&a).unwrap().column_id, ColumnId::InProgress);
        next.check_consistency().unwrap();
    }

    #[test]
    fn test_move_clamps_index() {
        let (board, ctx) = setup();
        let a = board.column_ids(ColumnId::Todo)[0].clone();

        let next = MoveTask::new(a, ColumnId::Todo, ColumnId::InProgress, 99).reduce(&board, &ctx);

        assert_eq!(titles(&next, ColumnId::InProgress), vec!["x", "a"]);
    }

    #[test]
    fn test_move_within_same_column() {
        let (board, ctx) = setup();
        let c = board.column_ids(ColumnId::Todo)[2].clone();

        let next = MoveTask::new(c, ColumnId::Todo, ColumnId::Todo, 0).reduce(&board, &ctx);

        assert_eq!(titles(&next, ColumnId::Todo), vec!["c", "a", "b"]);
        next.check_consistency().unwrap();
    }

    #[test]
    fn test_move_with_wrong_source_keeps_single_listing() {
        let (board, ctx) = setup();
        let x = board.column_ids(ColumnId::InProgress)[0].clone();

        let next = MoveTask::new(x.clone(), ColumnId::Todo, ColumnId::Completed, 0)
            .reduce(&board, &ctx);

        assert!(next.column_ids(ColumnId::InProgress).is_empty());
        assert_eq!(next.column_ids(ColumnId::Completed), &[x]);
        next.check_consistency().unwrap();
    }

    #[test]
    fn test_move_unknown_task_is_noop() {
        let (board, ctx) = setup();
        let next = MoveTask::to_end("ghost", ColumnId::Todo, ColumnId::Completed).reduce(&board, &ctx);
        assert!(next.ptr_eq(&board));
    }
}
