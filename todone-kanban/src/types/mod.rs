//! Core types for the kanban board

mod board;
mod ids;
mod task;

// Re-export all types
pub use board::{Board, Column};
pub use ids::{ColumnId, TaskId};
pub use task::{Priority, Task};
