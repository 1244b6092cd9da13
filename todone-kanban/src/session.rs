//! Everything a presentation layer needs for one open board.
//!
//! `BoardSession` ties the store to the drag engine, the modal, and the theme
//! preference. Gesture events go through the engine, and any command the
//! engine emits is dispatched before the call returns, so the next event
//! already sees its effect.

use crate::command::Command;
use crate::config::BoardConfig;
use crate::drag::{DragEngine, DragKey, DropTarget, Point};
use crate::error::FormError;
use crate::form::TaskForm;
use crate::modal::ModalState;
use crate::storage::{FileStorage, Storage};
use crate::store::BoardStore;
use crate::theme::{Theme, ThemePreference};
use crate::types::{Board, ColumnId, TaskId};
use std::sync::Arc;
use tracing::{debug, info};

pub struct BoardSession {
    store: BoardStore,
    drag: DragEngine,
    modal: ModalState,
    theme: ThemePreference,
}

impl BoardSession {
    /// Open the board in the configured storage directory
    pub fn open(config: &BoardConfig) -> Self {
        info!(dir = %config.storage_dir.display(), "opening board");
        let storage: Arc<dyn Storage> = Arc::new(FileStorage::new(config.storage_dir.clone()));
        Self::with_storage(storage, config)
    }

    /// Open the board in an arbitrary storage backend
    pub fn with_storage(storage: Arc<dyn Storage>, config: &BoardConfig) -> Self {
        Self {
            store: BoardStore::open(storage.clone(), &config.board_key),
            drag: DragEngine::new(config.drag_config()),
            modal: ModalState::default(),
            theme: ThemePreference::load(storage, config.theme_key.clone()),
        }
    }

    pub fn board(&self) -> &Board {
        self.store.board()
    }

    pub fn store(&self) -> &BoardStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut BoardStore {
        &mut self.store
    }

    pub fn drag(&self) -> &DragEngine {
        &self.drag
    }

    pub fn modal(&self) -> &ModalState {
        &self.modal
    }

    pub fn theme(&self) -> Theme {
        self.theme.theme()
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme.toggle()
    }

    /// Apply a command directly. Returns whether the board changed.
    pub fn dispatch(&mut self, command: &Command) -> bool {
        self.store.dispatch(command)
    }

    fn dispatch_emitted(&mut self, command: Option<Command>) -> Option<Command> {
        let command = command?;
        self.store.dispatch(&command);
        Some(command)
    }

    pub fn press(&mut self, task_id: &TaskId, at: Point) -> bool {
        self.drag.press(self.store.board(), task_id, at)
    }

    pub fn pointer_move(&mut self, at: Point) -> bool {
        self.drag.pointer_move(self.store.board(), at)
    }

    /// Hover update; returns the MOVE it caused, already applied
    pub fn drag_over(&mut self, target: Option<&DropTarget>) -> Option<Command> {
        let emitted = self.drag.over(self.store.board(), target);
        self.dispatch_emitted(emitted)
    }

    /// Hover update from a raw droppable id
    pub fn drag_over_id(&mut self, raw: Option<&str>) -> Option<Command> {
        let target = raw.and_then(|raw| DropTarget::parse(raw, self.store.board()));
        self.drag_over(target.as_ref())
    }

    /// Release; returns the REORDER it caused, already applied
    pub fn drop(&mut self, target: Option<&DropTarget>) -> Option<Command> {
        let emitted = self.drag.drop(self.store.board(), target);
        self.dispatch_emitted(emitted)
    }

    pub fn drop_id(&mut self, raw: Option<&str>) -> Option<Command> {
        let target = raw.and_then(|raw| DropTarget::parse(raw, self.store.board()));
        self.drop(target.as_ref())
    }

    pub fn cancel_drag(&mut self) {
        self.drag.cancel();
    }

    /// Keyboard input on the focused card
    pub fn key(&mut self, focused: &TaskId, key: DragKey) -> Option<Command> {
        let emitted = self.drag.key(self.store.board(), focused, key);
        self.dispatch_emitted(emitted)
    }

    pub fn open_create(&mut self, column: ColumnId) {
        self.modal.open_create(column);
    }

    /// Open the edit modal on a snapshot of the task. Unknown ids are ignored.
    pub fn open_edit(&mut self, task_id: &TaskId) -> bool {
        match self.store.board().task_arc(task_id) {
            Some(task) => {
                self.modal.open_edit(task);
                true
            }
            None => {
                debug!(%task_id, "edit ignored: unknown task");
                false
            }
        }
    }

    pub fn close_modal(&mut self) {
        self.modal.close();
    }

    /// Submit the modal form. On success the resulting command has been
    /// applied; on a validation error the modal stays open.
    pub fn submit(&mut self, form: &TaskForm) -> Result<Option<Command>, FormError> {
        let emitted = self.modal.submit(form)?;
        Ok(self.dispatch_emitted(emitted))
    }
}
