//! The closed command set and the board reducer.
//!
//! `apply(board, command)` is the only way a board changes. It never fails:
//! a command naming an unknown task returns the input snapshot untouched,
//! and so does a JSON command that does not decode.

use crate::column::ReorderColumn;
use crate::context::ReduceContext;
use crate::task::{AddTask, DeleteTask, MoveTask, UpdateTask};
use crate::types::Board;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, trace};

/// A state transition that turns one board snapshot into the next
pub trait Reduce {
    fn reduce(&self, board: &Board, ctx: &ReduceContext) -> Board;
}

/// Every sanctioned transition of the board.
///
/// The serialized form is `{"type": "...", "payload": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum Command {
    #[serde(rename = "ADD_ITEM")]
    Add(AddTask),
    #[serde(rename = "UPDATE_ITEM")]
    Update(UpdateTask),
    #[serde(rename = "DELETE_ITEM")]
    Delete(DeleteTask),
    #[serde(rename = "MOVE_ITEM")]
    Move(MoveTask),
    #[serde(rename = "REORDER_ITEM")]
    Reorder(ReorderColumn),
}

impl Command {
    /// Short verb used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Self::Add(_) => "add",
            Self::Update(_) => "update",
            Self::Delete(_) => "delete",
            Self::Move(_) => "move",
            Self::Reorder(_) => "reorder",
        }
    }

    /// Decode a command, returning `None` for anything unrecognized
    pub fn from_json(value: &Value) -> Option<Self> {
        match serde_json::from_value(value.clone()) {
            Ok(command) => Some(command),
            Err(e) => {
                debug!(%e, "ignoring unrecognized command");
                None
            }
        }
    }
}

impl Reduce for Command {
    fn reduce(&self, board: &Board, ctx: &ReduceContext) -> Board {
        let next = match self {
            Self::Add(cmd) => cmd.reduce(board, ctx),
            Self::Update(cmd) => cmd.reduce(board, ctx),
            Self::Delete(cmd) => cmd.reduce(board, ctx),
            Self::Move(cmd) => cmd.reduce(board, ctx),
            Self::Reorder(cmd) => cmd.reduce(board, ctx),
        };
        trace!(command = self.name(), changed = !next.ptr_eq(board), "reduced");
        next
    }
}

impl From<AddTask> for Command {
    fn from(cmd: AddTask) -> Self {
        Self::Add(cmd)
    }
}

impl From<UpdateTask> for Command {
    fn from(cmd: UpdateTask) -> Self {
        Self::Update(cmd)
    }
}

impl From<DeleteTask> for Command {
    fn from(cmd: DeleteTask) -> Self {
        Self::Delete(cmd)
    }
}

impl From<MoveTask> for Command {
    fn from(cmd: MoveTask) -> Self {
        Self::Move(cmd)
    }
}

impl From<ReorderColumn> for Command {
    fn from(cmd: ReorderColumn) -> Self {
        Self::Reorder(cmd)
    }
}

/// Apply a command using the system clock and a ULID generator
pub fn apply(board: &Board, command: &Command) -> Board {
    command.reduce(board, &ReduceContext::default())
}

/// Apply a command with explicit collaborators
pub fn apply_with(board: &Board, command: &Command, ctx: &ReduceContext) -> Board {
    command.reduce(board, ctx)
}

/// Apply a command in its JSON form. Unrecognized input is a no-op.
pub fn apply_json(board: &Board, value: &Value, ctx: &ReduceContext) -> Board {
    match Command::from_json(value) {
        Some(command) => command.reduce(board, ctx),
        None => board.clone(),
    }
}
