//! ReorderColumn command

use crate::command::Reduce;
use crate::context::ReduceContext;
use crate::types::{Board, ColumnId};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Relocate one entry of a column's sequence; the entries in between shift by one
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderColumn {
    pub column_id: ColumnId,
    pub old_index: usize,
    /// Clamped to the last index of the column
    pub new_index: usize,
}

impl ReorderColumn {
    pub fn new(column_id: ColumnId, old_index: usize, new_index: usize) -> Self {
        Self {
            column_id,
            old_index,
            new_index,
        }
    }
}

impl Reduce for ReorderColumn {
    fn reduce(&self, board: &Board, _ctx: &ReduceContext) -> Board {
        let len = board.column_count(self.column_id);
        if self.old_index >= len {
            debug!(
                column = %self.column_id,
                old_index = self.old_index,
                len,
                "reorder ignored: index out of range"
            );
            return board.clone();
        }

        let new_index = self.new_index.min(len - 1);
        if new_index == self.old_index {
            return board.clone();
        }

        let mut next = board.clone();
        let ids = &mut next.column_mut(self.column_id).item_ids;
        let id = ids.remove(self.old_index);
        ids.insert(new_index, id);

        debug!(
            column = %self.column_id,
            from = self.old_index,
            to = new_index,
            "reordered column"
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
        for title in ["A", "B", "C", "D"] {
            board = AddTask::new(ColumnId::Todo, title).reduce(&board, &ctx);
        }
        (board, ctx)
    }

    fn titles(board: &Board) -> Vec<String> {
        board
            .column_tasks(ColumnId::Todo)
            .iter()
            .map(|t| t.title.clone())
            .collect()
    }

    #[test]
    fn test_reorder_forward() {
        let (board, ctx) = setup();
        let next = ReorderColumn::new(ColumnId::Todo, 0, 2).reduce(&board, &ctx);
        assert_eq!(titles(&next), vec!["B", "C", "A", "D"]);
    }

    #[test]
    fn test_reorder_backward() {
        let (board, ctx) = setup();
        let next = ReorderColumn::new(ColumnId::Todo, 3, 1).reduce(&board, &ctx);
        assert_eq!(titles(&next), vec!["A", "D", "B", "C"]);
    }

    #[test]
    fn test_reorder_same_index_is_identity() {
        let (board, ctx) = setup();
        let next = ReorderColumn::new(ColumnId::Todo, 1, 1).reduce(&board, &ctx);
        assert_eq!(next, board);
        assert!(next.ptr_eq(&board));
    }

    #[test]
    fn test_reorder_clamps_new_index() {
        let (board, ctx) = setup();
        let next = ReorderColumn::new(ColumnId::Todo, 0, 40).reduce(&board, &ctx);
        assert_eq!(titles(&next), vec!["B", "C", "D", "A"]);
    }

    #[test]
    fn test_reorder_out_of_range_is_noop() {
        let (board, ctx) = setup();
        let next = ReorderColumn::new(ColumnId::Todo, 4, 0).reduce(&board, &ctx);
        assert!(next.ptr_eq(&board));

        let next = ReorderColumn::new(ColumnId::Completed, 0, 0).reduce(&board, &ctx);
        assert!(next.ptr_eq(&board));
    }

    #[test]
    fn test_reorder_does_not_touch_tasks() {
        let (board, ctx) = setup();
        let next = ReorderColumn::new(ColumnId::Todo, 0, 3).reduce(&board, &ctx);
        for task in board.tasks() {
            assert_eq!(next.task(&task.id), Some(task));
        }
    }
}
