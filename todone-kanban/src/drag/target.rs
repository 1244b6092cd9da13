//! What the pointer (or keyboard cursor) is over during a drag

use crate::defaults::EMPTY_ZONE_PREFIX;
use crate::types::{Board, ColumnId, TaskId};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DropTarget {
    /// The placeholder rendered in place of an empty column's cards
    EmptyZone(ColumnId),
    /// Another task card
    Card(TaskId),
    /// A column container
    Column(ColumnId),
}

impl DropTarget {
    /// Interpret a raw droppable id.
    ///
    /// `droppable-<column>` is an empty zone, a known task id is a card, and a
    /// column id is a column. Anything else is not a target.
    pub fn parse(raw: &str, board: &Board) -> Option<Self> {
        if let Some(rest) = raw.strip_prefix(EMPTY_ZONE_PREFIX) {
            return ColumnId::from_str(rest).ok().map(Self::EmptyZone);
        }
        let id = TaskId::from_string(raw);
        if board.contains_task(&id) {
            return Some(Self::Card(id));
        }
        ColumnId::from_str(raw).ok().map(Self::Column)
    }

    /// The column this target drops into on `board`
    pub fn resolve_column(&self, board: &Board) -> Option<ColumnId> {
        match self {
            Self::EmptyZone(column) | Self::Column(column) => Some(*column),
            Self::Card(id) => board.find_task_column(id),
        }
    }

    /// Index at which a task entering the column should land: just before the
    /// hovered card, or at the end.
    pub fn insert_index(&self, board: &Board, column: ColumnId) -> usize {
        let ids = board.column_ids(column);
        match self {
            Self::Card(id) => ids.iter().position(|i| i == id).unwrap_or(ids.len()),
            _ => ids.len(),
        }
    }
}

impl fmt::Display for DropTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyZone(column) => write!(f, "{EMPTY_ZONE_PREFIX}{column}"),
            Self::Card(id) => write!(f, "{id}"),
            Self::Column(column) => write!(f, "{column}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::apply;
    use crate::task::AddTask;

    fn board_with_card() -> (Board, TaskId) {
        let board = apply(&Board::empty(), &AddTask::new(ColumnId::InProgress, "a").into());
        let id = board.column_ids(ColumnId::InProgress)[0].clone();
        (board, id)
    }

    #[test]
    fn test_parse() {
        let (board, id) = board_with_card();

        assert_eq!(
            DropTarget::parse("droppable-todo", &board),
            Some(DropTarget::EmptyZone(ColumnId::Todo))
        );
        assert_eq!(
            DropTarget::parse(id.as_str(), &board),
            Some(DropTarget::Card(id.clone()))
        );
        assert_eq!(
            DropTarget::parse("completed", &board),
            Some(DropTarget::Column(ColumnId::Completed))
        );
        assert_eq!(DropTarget::parse("droppable-backlog", &board), None);
        assert_eq!(DropTarget::parse("nothing", &board), None);
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        let (board, id) = board_with_card();
        for target in [
            DropTarget::EmptyZone(ColumnId::InProgress),
            DropTarget::Card(id),
            DropTarget::Column(ColumnId::Todo),
        ] {
            assert_eq!(DropTarget::parse(&target.to_string(), &board), Some(target));
        }
    }

    #[test]
    fn test_resolve_column() {
        let (board, id) = board_with_card();
        assert_eq!(
            DropTarget::Card(id).resolve_column(&board),
            Some(ColumnId::InProgress)
        );
        assert_eq!(
            DropTarget::Card(TaskId::from_string("gone")).resolve_column(&board),
            None
        );
        assert_eq!(
            DropTarget::EmptyZone(ColumnId::Todo).resolve_column(&board),
            Some(ColumnId::Todo)
        );
    }

    #[test]
    fn test_insert_index() {
        let (board, id) = board_with_card();
        assert_eq!(DropTarget::Card(id).insert_index(&board, ColumnId::InProgress), 0);
        assert_eq!(
            DropTarget::Column(ColumnId::InProgress).insert_index(&board, ColumnId::InProgress),
            1
        );
    }
}
