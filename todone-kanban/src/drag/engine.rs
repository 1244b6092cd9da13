//! Drag state machine.
//!
//! A pointer press stays pending until the pointer travels the activation
//! distance, so a press followed by a release without movement is a click.
//! A keyboard pick-up starts dragging immediately.
//!
//! While dragging, hovering a different column moves the task there at once
//! (`over`). Releasing on a card in the task's current column reorders it
//! within that column (`drop`). Cancelling emits nothing and keeps any moves
//! already made while hovering.
//!
//! The engine never touches the board. It returns the command a gesture
//! produces; the caller applies it before delivering the next event.

use super::target::DropTarget;
use super::DragConfig;
use crate::column::ReorderColumn;
use crate::command::Command;
use crate::task::MoveTask;
use crate::types::{Board, ColumnId, TaskId};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Pointer position in screen pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragInput {
    Pointer,
    Keyboard,
}

/// A drag in progress
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveDrag {
    pub task_id: TaskId,
    /// Column the task was in when the drag started
    pub origin_column: ColumnId,
    /// Column the task is in now, after any hover moves
    pub current_column: ColumnId,
    pub input: DragInput,
    /// The most recent hover target
    pub last_over: Option<DropTarget>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DragPhase {
    #[default]
    Idle,
    /// Pointer is down on a card but has not moved far enough to drag
    Pending { task_id: TaskId, origin: Point },
    Dragging(ActiveDrag),
}

#[derive(Debug, Clone, Default)]
pub struct DragEngine {
    config: DragConfig,
    phase: DragPhase,
}

impl DragEngine {
    pub fn new(config: DragConfig) -> Self {
        Self {
            config,
            phase: DragPhase::Idle,
        }
    }

    pub fn config(&self) -> &DragConfig {
        &self.config
    }

    pub fn phase(&self) -> &DragPhase {
        &self.phase
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging(_))
    }

    /// The task being dragged, for rendering a drag overlay
    pub fn active_task(&self) -> Option<&TaskId> {
        match &self.phase {
            DragPhase::Dragging(drag) => Some(&drag.task_id),
            _ => None,
        }
    }

    /// The column the dragged task currently occupies
    pub fn current_column(&self) -> Option<ColumnId> {
        self.active().map(|drag| drag.current_column)
    }

    /// The most recent hover target of the active drag
    pub fn hover_target(&self) -> Option<&DropTarget> {
        self.active().and_then(|drag| drag.last_over.as_ref())
    }

    pub(super) fn active(&self) -> Option<&ActiveDrag> {
        match &self.phase {
            DragPhase::Dragging(drag) => Some(drag),
            _ => None,
        }
    }

    /// Pointer pressed on a card. Unknown tasks are ignored.
    pub fn press(&mut self, board: &Board, task_id: &TaskId, at: Point) -> bool {
        if !board.contains_task(task_id) {
            debug!(%task_id, "press ignored: unknown task");
            return false;
        }
        trace!(%task_id, x = at.x, y = at.y, "drag pending");
        self.phase = DragPhase::Pending {
            task_id: task_id.clone(),
            origin: at,
        };
        true
    }

    /// Pointer moved. Returns `true` when this movement started the drag.
    pub fn pointer_move(&mut self, board: &Board, at: Point) -> bool {
        let DragPhase::Pending { task_id, origin } = &self.phase else {
            return false;
        };
        let travelled = origin.distance(at);
        if travelled < self.config.activation_distance {
            return false;
        }
        let task_id = task_id.clone();
        self.start(board, task_id, DragInput::Pointer)
    }

    /// Keyboard pick-up: start dragging without an activation distance
    pub fn pick_up(&mut self, board: &Board, task_id: &TaskId) -> bool {
        self.start(board, task_id.clone(), DragInput::Keyboard)
    }

    fn start(&mut self, board: &Board, task_id: TaskId, input: DragInput) -> bool {
        let Some(column) = board.find_task_column(&task_id) else {
            debug!(%task_id, "drag not started: task has no column");
            self.phase = DragPhase::Idle;
            return false;
        };
        debug!(%task_id, %column, ?input, "drag started");
        self.phase = DragPhase::Dragging(ActiveDrag {
            task_id,
            origin_column: column,
            current_column: column,
            input,
            last_over: None,
        });
        true
    }

    /// Hover update. Emits a move when the target resolves to a column other
    /// than the one the task is in.
    pub fn over(&mut self, board: &Board, target: Option<&DropTarget>) -> Option<Command> {
        let DragPhase::Dragging(drag) = &mut self.phase else {
            return None;
        };
        drag.last_over = target.cloned();
        let target = target?;

        let Some(active_column) = board.find_task_column(&drag.task_id) else {
            debug!(task_id = %drag.task_id, "hover ignored: dragged task is gone");
            return None;
        };
        drag.current_column = active_column;

        let to_column = target.resolve_column(board)?;
        if to_column == active_column {
            return None;
        }

        let index = target.insert_index(board, to_column);
        debug!(
            task_id = %drag.task_id,
            from = %active_column,
            to = %to_column,
            index,
            "moving task into hovered column"
        );
        drag.current_column = to_column;
        Some(MoveTask::new(drag.task_id.clone(), active_column, to_column, index).into())
    }

    /// Release. Emits a reorder only when dropped on another card in the
    /// task's current column; indices are taken from `board` as it is now.
    pub fn drop(&mut self, board: &Board, target: Option<&DropTarget>) -> Option<Command> {
        let drag = match std::mem::take(&mut self.phase) {
            DragPhase::Dragging(drag) => drag,
            DragPhase::Pending { task_id, .. } => {
                trace!(%task_id, "released before drag started");
                return None;
            }
            DragPhase::Idle => return None,
        };
        debug!(task_id = %drag.task_id, target = ?target, "drag ended");

        let Some(DropTarget::Card(over_id)) = target else {
            return None;
        };
        let (active_column, old_index) = board.index_in_column(&drag.task_id)?;
        let (over_column, new_index) = board.index_in_column(over_id)?;
        if over_column != active_column || old_index == new_index {
            return None;
        }

        debug!(
            task_id = %drag.task_id,
            column = %active_column,
            old_index,
            new_index,
            "reordering task within column"
        );
        Some(ReorderColumn::new(active_column, old_index, new_index).into())
    }

    /// Abandon the drag. Moves made while hovering stay in place.
    pub fn cancel(&mut self) {
        if let DragPhase::Dragging(drag) = &self.phase {
            debug!(
                task_id = %drag.task_id,
                origin = %drag.origin_column,
                current = %drag.current_column,
                "drag cancelled"
            );
        }
        self.phase = DragPhase::Idle;
    }

    /// Drop on whatever was last hovered, as a keyboard drop does
    pub fn drop_at_last_target(&mut self, board: &Board) -> Option<Command> {
        let target = self.hover_target().cloned();
        self.drop(board, target.as_ref())
    }
}
