//! Kanban board state store and drag-relocation engine
//!
//! A single-user task board with three fixed lanes (To Do, In Progress,
//! Completed). The board is an immutable snapshot: every command produces a
//! new [`Board`] sharing unchanged parts with the previous one, so callers can
//! detect change with [`Board::ptr_eq`].
//!
//! ## Overview
//!
//! - **Reducer** - [`apply`] runs one of five commands (add, update, delete,
//!   move, reorder) and never fails; unknown ids are no-ops
//! - **Store** - [`BoardStore`] holds the current snapshot and notifies
//!   observers, one of which writes the board through to [`Storage`]
//! - **Drag engine** - [`drag::DragEngine`] turns pointer and keyboard
//!   gestures into MOVE (on hover) and REORDER (on drop) commands
//! - **Glue** - task form validation, the create/edit modal, and the theme
//!   preference, bundled with the rest in [`BoardSession`]
//!
//! ## Basic Usage
//!
//! ```rust
//! use todone_kanban::{apply, task::AddTask, column::ReorderColumn, Board, ColumnId, Priority};
//!
//! let board = Board::empty();
//! let board = apply(&board, &AddTask::new(ColumnId::Todo, "Buy milk")
//!     .with_priority(Priority::Low)
//!     .into());
//! let board = apply(&board, &AddTask::new(ColumnId::Todo, "Walk dog").into());
//!
//! let reordered = apply(&board, &ReorderColumn::new(ColumnId::Todo, 0, 1).into());
//! assert_eq!(reordered.column_tasks(ColumnId::Todo)[0].title, "Walk dog");
//! // The input snapshot is untouched
//! assert_eq!(board.column_tasks(ColumnId::Todo)[0].title, "Buy milk");
//! ```
//!
//! ## Storage
//!
//! ```text
//! .todone/
//! ├── kanban_board_v1.json    # Board snapshot
//! └── kanban_theme_v1.json    # "light" or "dark"
//! ```
//!
//! Snapshots use the camelCase JSON shape `{items, columns, columnOrder}`.
//! A missing, unreadable, or inconsistent snapshot loads as an empty board.

mod command;
pub mod config;
mod context;
pub mod defaults;
mod error;
pub mod logging;
pub mod storage;
pub mod types;

// Command modules
pub mod column;
pub mod task;

// Presentation glue
pub mod drag;
pub mod form;
pub mod modal;
pub mod session;
pub mod store;
pub mod theme;

pub use command::{apply, apply_json, apply_with, Command, Reduce};
pub use config::BoardConfig;
pub use context::{Clock, IdGenerator, ManualClock, ReduceContext, SystemClock, UlidGenerator};
pub use error::{FormError, KanbanError, Result};
pub use session::BoardSession;
pub use storage::{FileStorage, MemoryStorage, Storage};
pub use store::{BoardObserver, BoardStore, PersistBoard};

// Re-export commonly used types
pub use types::{Board, Column, ColumnId, Priority, Task, TaskId};
