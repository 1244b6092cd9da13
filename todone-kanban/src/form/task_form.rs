//! The create/edit task form

use super::tag_input::TagInput;
use crate::defaults::{MAX_DESCRIPTION_LEN, MAX_TITLE_LEN};
use crate::error::FormError;
use crate::task::{AddTask, UpdateTask};
use crate::types::{ColumnId, Priority, Task, TaskId};

/// Editable values of the task form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskForm {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub tags: TagInput,
}

/// Form values that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskFields {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub tags: Vec<String>,
}

impl TaskForm {
    /// Blank form: empty text, medium priority, no tags
    pub fn for_create() -> Self {
        Self::default()
    }

    /// Form prefilled from an existing task
    pub fn for_edit(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
            priority: task.priority,
            tags: TagInput::from_tags(task.tags.iter().cloned()),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Check the form and produce the values to submit. The title is trimmed.
    pub fn validate(&self) -> Result<TaskFields, FormError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(FormError::TitleRequired);
        }
        let title_len = title.chars().count();
        if title_len > MAX_TITLE_LEN {
            return Err(FormError::TitleTooLong {
                len: title_len,
                max: MAX_TITLE_LEN,
            });
        }

        let description_len = self.description.chars().count();
        if description_len > MAX_DESCRIPTION_LEN {
            return Err(FormError::DescriptionTooLong {
                len: description_len,
                max: MAX_DESCRIPTION_LEN,
            });
        }

        TagInput::validate(self.tags.tags())?;

        Ok(TaskFields {
            title: title.to_string(),
            description: self.description.clone(),
            priority: self.priority,
            tags: self.tags.tags().to_vec(),
        })
    }
}

impl TaskFields {
    /// Command creating a task with these values at the end of `column`
    pub fn into_add(self, column: ColumnId) -> AddTask {
        AddTask::new(column, self.title)
            .with_description(self.description)
            .with_priority(self.priority)
            .with_tags(self.tags)
    }

    /// Command overwriting an existing task's editable fields
    pub fn into_update(self, id: TaskId) -> UpdateTask {
        UpdateTask::new(id)
            .with_title(self.title)
            .with_description(self.description)
            .with_priority(self.priority)
            .with_tags(self.tags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_defaults() {
        let form = TaskForm::for_create();
        assert!(form.title.is_empty());
        assert_eq!(form.priority, Priority::Medium);
        assert!(form.tags.tags().is_empty());
    }

    #[test]
    fn test_blank_title_is_rejected() {
        let form = TaskForm::for_create().with_title("   ");
        assert_eq!(form.validate(), Err(FormError::TitleRequired));
        assert_eq!(
            FormError::TitleRequired.to_string(),
            "Title is required"
        );
    }

    #[test]
    fn test_title_is_trimmed() {
        let fields = TaskForm::for_create()
            .with_title("  Buy milk  ")
            .validate()
            .unwrap();
        assert_eq!(fields.title, "Buy milk");
    }

    #[test]
    fn test_length_limits() {
        let form = TaskForm::for_create().with_title("x".repeat(101));
        assert!(matches!(
            form.validate(),
            Err(FormError::TitleTooLong { len: 101, max: 100 })
        ));

        let form = TaskForm::for_create().with_title("x".repeat(100));
        assert!(form.validate().is_ok());

        let form = TaskForm::for_create()
            .with_title("ok")
            .with_description("d".repeat(501));
        assert!(matches!(
            form.validate(),
            Err(FormError::DescriptionTooLong { .. })
        ));
    }

    #[test]
    fn test_fields_into_add() {
        let mut form = TaskForm::for_create()
            .with_title("Write report")
            .with_priority(Priority::High);
        form.tags.add("work").unwrap();

        let add = form.validate().unwrap().into_add(ColumnId::InProgress);
        assert_eq!(add.column_id, ColumnId::InProgress);
        assert_eq!(add.priority, Priority::High);
        assert_eq!(add.tags, vec!["work".to_string()]);
    }

    #[test]
    fn test_fields_into_update_leaves_column_alone() {
        let update = TaskForm::for_create()
            .with_title("t")
            .validate()
            .unwrap()
            .into_update(TaskId::from_string("abc"));
        assert_eq!(update.column_id, None);
        assert_eq!(update.title.as_deref(), Some("t"));
    }
}
