//! Keyboard-driven drags.
//!
//! Up/Down walk the cards of the column the task is in; Left/Right step to
//! the neighbouring column in display order. Each step is a hover, so
//! stepping into another column moves the task there immediately.

use super::engine::DragEngine;
use super::target::DropTarget;
use crate::command::Command;
use crate::types::{Board, ColumnId, TaskId};
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Keys the board reacts to while a card has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragKey {
    /// Space or Enter: pick up when idle, drop when dragging
    Activate,
    Arrow(Direction),
    Escape,
}

impl DragEngine {
    /// The target one step from the current hover position, if any
    pub fn next_target(&self, board: &Board, direction: Direction) -> Option<DropTarget> {
        let drag = self.active()?;
        let (column, own_index) = board.index_in_column(&drag.task_id)?;

        match direction {
            Direction::Up | Direction::Down => {
                let ids = board.column_ids(column);
                let from = match &drag.last_over {
                    Some(DropTarget::Card(id)) => {
                        ids.iter().position(|i| i == id).unwrap_or(own_index)
                    }
                    _ => own_index,
                };
                let to = match direction {
                    Direction::Up => from.checked_sub(1)?,
                    _ => from + 1,
                };
                ids.get(to).cloned().map(DropTarget::Card)
            }
            Direction::Left | Direction::Right => {
                let order = board.column_order();
                let at = order.iter().position(|c| *c == column)?;
                let to = match direction {
                    Direction::Left => at.checked_sub(1)?,
                    _ => at + 1,
                };
                let next: ColumnId = *order.get(to)?;
                if board.column_count(next) == 0 {
                    Some(DropTarget::EmptyZone(next))
                } else {
                    Some(DropTarget::Column(next))
                }
            }
        }
    }

    /// Step the hover target. At the edge of the board nothing changes.
    pub fn nudge(&mut self, board: &Board, direction: Direction) -> Option<Command> {
        let target = self.next_target(board, direction)?;
        trace!(?direction, %target, "keyboard hover");
        self.over(board, Some(&target))
    }

    /// Handle a key press on the focused card `focused`
    pub fn key(&mut self, board: &Board, focused: &TaskId, key: DragKey) -> Option<Command> {
        match key {
            DragKey::Activate if self.is_dragging() => self.drop_at_last_target(board),
            DragKey::Activate => {
                self.pick_up(board, focused);
                None
            }
            DragKey::Arrow(direction) => self.nudge(board, direction),
            DragKey::Escape => {
                self.cancel();
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::ReorderColumn;
    use crate::command::apply;
    use crate::task::AddTask;

    /// todo = [a, b, c], in-progress = [], completed = [z]
    fn board() -> Board {
        let mut board = Board::empty();
        for (column, title) in [
            (ColumnId::Todo, "a"),
            (ColumnId::Todo, "b"),
            (ColumnId::Todo, "c"),
            (ColumnId::Completed, "z"),
        ] {
            board = apply(&board, &AddTask::new(column, title).into());
        }
        board
    }

    fn todo(board: &Board, index: usize) -> TaskId {
        board.column_ids(ColumnId::Todo)[index].clone()
    }

    #[test]
    fn test_arrows_walk_cards_then_drop_reorders() {
        let board = board();
        let c = todo(&board, 2);
        let mut engine = DragEngine::default();

        assert_eq!(engine.key(&board, &c, DragKey::Activate), None);
        assert!(engine.is_dragging());

        assert_eq!(engine.key(&board, &c, DragKey::Arrow(Direction::Up)), None);
        assert_eq!(engine.key(&board, &c, DragKey::Arrow(Direction::Up)), None);
        assert_eq!(engine.hover_target(), Some(&DropTarget::Card(todo(&board, 0))));
        // Already at the top
        assert_eq!(engine.next_target(&board, Direction::Up), None);

        let command = engine.key(&board, &c, DragKey::Activate).unwrap();
        assert_eq!(command, Command::from(ReorderColumn::new(ColumnId::Todo, 2, 0)));
        assert!(!engine.is_dragging());
    }

    #[test]
    fn test_right_into_empty_column_uses_empty_zone() {
        let board = board();
        let a = todo(&board, 0);
        let mut engine = DragEngine::default();
        engine.pick_up(&board, &a);

        assert_eq!(
            engine.next_target(&board, Direction::Right),
            Some(DropTarget::EmptyZone(ColumnId::InProgress))
        );
        let command = engine.nudge(&board, Direction::Right).unwrap();
        let board = apply(&board, &command);
        assert_eq!(board.column_ids(ColumnId::InProgress), &[a.clone()]);
        assert_eq!(engine.current_column(), Some(ColumnId::InProgress));

        // Next column over has a card, so the column itself is the target
        assert_eq!(
            engine.next_target(&board, Direction::Right),
            Some(DropTarget::Column(ColumnId::Completed))
        );
        let command = engine.nudge(&board, Direction::Right).unwrap();
        let board = apply(&board, &command);
        assert_eq!(board.column_ids(ColumnId::Completed).last(), Some(&a));

        // Edge of the board
        assert_eq!(engine.nudge(&board, Direction::Right), None);
        assert_eq!(engine.drop_at_last_target(&board), None);
    }

    #[test]
    fn test_left_at_first_column_is_noop() {
        let board = board();
        let a = todo(&board, 0);
        let mut engine = DragEngine::default();
        engine.pick_up(&board, &a);
        assert_eq!(engine.nudge(&board, Direction::Left), None);
        assert_eq!(engine.hover_target(), None);
    }

    #[test]
    fn test_escape_cancels() {
        let board = board();
        let a = todo(&board, 0);
        let mut engine = DragEngine::default();
        engine.key(&board, &a, DragKey::Activate);
        engine.key(&board, &a, DragKey::Arrow(Direction::Down));
        assert_eq!(engine.key(&board, &a, DragKey::Escape), None);
        assert!(!engine.is_dragging());
    }

    #[test]
    fn test_arrows_when_idle_do_nothing() {
        let board = board();
        let a = todo(&board, 0);
        let mut engine = DragEngine::default();
        assert_eq!(engine.key(&board, &a, DragKey::Arrow(Direction::Down)), None);
        assert!(!engine.is_dragging());
    }
}
