//! Which create/edit dialog is open, and what submitting it does

use crate::command::Command;
use crate::error::FormError;
use crate::form::TaskForm;
use crate::types::{ColumnId, Task};
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum ModalState {
    #[default]
    Closed,
    /// Creating a task in a column
    Create { column: ColumnId },
    /// Editing a snapshot of an existing task
    Edit { task: Arc<Task> },
}

impl ModalState {
    pub fn open_create(&mut self, column: ColumnId) {
        debug!(%column, "opening create modal");
        *self = Self::Create { column };
    }

    pub fn open_edit(&mut self, task: Arc<Task>) {
        debug!(task_id = %task.id, "opening edit modal");
        *self = Self::Edit { task };
    }

    pub fn close(&mut self) {
        *self = Self::Closed;
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    /// The form shown when the modal opens
    pub fn initial_form(&self) -> TaskForm {
        match self {
            Self::Edit { task } => TaskForm::for_edit(task),
            _ => TaskForm::for_create(),
        }
    }

    /// Validate and turn the form into a command, closing the modal.
    ///
    /// On a validation error the modal stays open and no command is produced.
    /// Submitting a closed modal yields `Ok(None)`.
    pub fn submit(&mut self, form: &TaskForm) -> Result<Option<Command>, FormError> {
        if !self.is_open() {
            return Ok(None);
        }
        let fields = form.validate()?;

        let command = match std::mem::take(self) {
            Self::Create { column } => Some(fields.into_add(column).into()),
            Self::Edit { task } => Some(fields.into_update(task.id.clone()).into()),
            Self::Closed => None,
        };
        Ok(command)
    }
}
