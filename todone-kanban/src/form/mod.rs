//! Task form and tag input: the validation layer in front of the reducer

mod tag_input;
mod task_form;

pub use tag_input::TagInput;
pub use task_form::{TaskFields, TaskForm};
