//! Error types for the kanban board

use thiserror::Error;

/// Result type for kanban operations
pub type Result<T> = std::result::Result<T, KanbanError>;

/// Errors that can occur at the edges of the board: storage, configuration,
/// and form submission. Applying a command to a board never fails.
#[derive(Debug, Error)]
pub enum KanbanError {
    /// Invalid field value
    #[error("invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    /// A board snapshot whose columns and tasks disagree with each other
    #[error("inconsistent board: {message}")]
    InconsistentBoard { message: String },

    /// Task form rejected its input
    #[error(transparent)]
    Form(#[from] FormError),

    /// Configuration could not be extracted
    #[error("configuration error: {0}")]
    Config(#[from] Box<figment::Error>),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl KanbanError {
    /// Create an invalid value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create an inconsistent board error
    pub fn inconsistent(message: impl Into<String>) -> Self {
        Self::InconsistentBoard {
            message: message.into(),
        }
    }
}

/// Validation failures raised by the task form and tag input.
///
/// These never reach the reducer: a form that fails validation stays open
/// and shows the message to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Title is required")]
    TitleRequired,

    #[error("Title must be at most {max} characters (got {len})")]
    TitleTooLong { len: usize, max: usize },

    #[error("Description must be at most {max} characters (got {len})")]
    DescriptionTooLong { len: usize, max: usize },

    #[error("A task can have at most {max} tags")]
    TooManyTags { max: usize },

    #[error("Tag '{tag}' is longer than {max} characters")]
    TagTooLong { tag: String, max: usize },

    #[error("Tag '{tag}' is already present")]
    DuplicateTag { tag: String },

    #[error("Tag is empty")]
    EmptyTag,

    #[error("Tag '{tag}' must be lowercase without commas or surrounding spaces")]
    TagNotNormalized { tag: String },
}
