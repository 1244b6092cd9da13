//! Column commands

mod reorder;

pub use reorder::ReorderColumn;
