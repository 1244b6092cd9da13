//! The process-wide board holder.
//!
//! `BoardStore` keeps the current snapshot, runs commands through the
//! reducer, and notifies observers after every transition that actually
//! changed something. Persistence is one such observer.

use crate::command::{Command, Reduce};
use crate::context::ReduceContext;
use crate::defaults::BOARD_STORAGE_KEY;
use crate::logging::BoardYaml;
use crate::storage::{self, Storage};
use crate::types::Board;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, trace};

/// Notified after each committed board transition
pub trait BoardObserver: Send {
    fn board_committed(&mut self, board: &Board, version: u64);
}

/// Writes every committed snapshot through to storage
pub struct PersistBoard {
    storage: Arc<dyn Storage>,
    key: String,
}

impl PersistBoard {
    pub fn new(storage: Arc<dyn Storage>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }
}

impl BoardObserver for PersistBoard {
    fn board_committed(&mut self, board: &Board, version: u64) {
        trace!(key = %self.key, version, "persisting board");
        storage::save(self.storage.as_ref(), &self.key, board);
    }
}

/// Owner of the current board snapshot
pub struct BoardStore {
    board: Board,
    version: u64,
    ctx: ReduceContext,
    observers: Vec<Box<dyn BoardObserver>>,
}

impl BoardStore {
    /// Create a store around an existing board, with no observers
    pub fn new(board: Board) -> Self {
        Self {
            board,
            version: 0,
            ctx: ReduceContext::default(),
            observers: Vec::new(),
        }
    }

    /// Load the board stored under `key` (or start empty) and write every
    /// later change back to the same key
    pub fn open(storage: Arc<dyn Storage>, key: &str) -> Self {
        let board = storage::load_board(storage.as_ref(), key);
        let mut store = Self::new(board);
        store.observe(PersistBoard::new(storage, key));
        store
    }

    /// `open` with the default board key
    pub fn open_default(storage: Arc<dyn Storage>) -> Self {
        Self::open(storage, BOARD_STORAGE_KEY)
    }

    /// Use explicit collaborators for ids and timestamps
    pub fn with_context(mut self, ctx: ReduceContext) -> Self {
        self.ctx = ctx;
        self
    }

    /// Register an observer; observers run in registration order
    pub fn observe(&mut self, observer: impl BoardObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// The current snapshot
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of committed transitions since the store was created
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Apply a command. Returns whether the board changed.
    pub fn dispatch(&mut self, command: &Command) -> bool {
        let next = command.reduce(&self.board, &self.ctx);
        if next.ptr_eq(&self.board) {
            debug!(command = command.name(), "command left board unchanged");
            return false;
        }
        self.commit(next);
        true
    }

    /// Apply a command in its JSON form. Unrecognized input is a no-op.
    pub fn dispatch_json(&mut self, value: &Value) -> bool {
        match Command::from_json(value) {
            Some(command) => self.dispatch(&command),
            None => false,
        }
    }

    fn commit(&mut self, next: Board) {
        self.board = next;
        self.version += 1;
        trace!(version = self.version, "board: {}", BoardYaml(&self.board));
        for observer in &mut self.observers {
            observer.board_committed(&self.board, self.version);
        }
    }
}

impl Default for BoardStore {
    fn default() -> Self {
        Self::new(Board::empty())
    }
}
