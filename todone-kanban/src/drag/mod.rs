//! Turning drag gestures into MOVE and REORDER commands

mod engine;
mod keyboard;
mod target;

pub use engine::{ActiveDrag, DragEngine, DragInput, DragPhase, Point};
pub use keyboard::{Direction, DragKey};
pub use target::DropTarget;

use crate::defaults::DEFAULT_ACTIVATION_DISTANCE;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragConfig {
    /// Pointer travel in pixels before a press becomes a drag
    pub activation_distance: f64,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            activation_distance: DEFAULT_ACTIVATION_DISTANCE,
        }
    }
}
