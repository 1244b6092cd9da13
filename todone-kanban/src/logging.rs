//! Logging utilities
//!
//! A YAML board dump for trace logs and a one-call subscriber setup for
//! binaries and tests embedding the board.

use crate::types::{Board, ColumnId, Priority};
use serde::Serialize;
use std::fmt;
use tracing_subscriber::EnvFilter;

/// Trace-level view of a board: each lane in display order with its cards,
/// rendered as YAML on the line after the message.
///
/// ```ignore
/// use todone_kanban::logging::BoardYaml;
/// use tracing::trace;
///
/// trace!("board: {}", BoardYaml(&board));
/// ```
///
/// Falls back to Debug of the same lanes if YAML serialization fails.
pub struct BoardYaml<'a>(pub &'a Board);

#[derive(Debug, Serialize)]
struct Lane<'a> {
    column: ColumnId,
    cards: Vec<Card<'a>>,
}

#[derive(Debug, Serialize)]
struct Card<'a> {
    title: &'a str,
    priority: Priority,
    tags: &'a [String],
}

impl BoardYaml<'_> {
    fn lanes(&self) -> Vec<Lane<'_>> {
        self.0
            .column_order()
            .iter()
            .map(|column| Lane {
                column: *column,
                cards: self
                    .0
                    .column_tasks(*column)
                    .into_iter()
                    .map(|task| Card {
                        title: &task.title,
                        priority: task.priority,
                        tags: &task.tags,
                    })
                    .collect(),
            })
            .collect()
    }
}

impl fmt::Display for BoardYaml<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lanes = self.lanes();
        match serde_yaml_ng::to_string(&lanes) {
            Ok(yaml) => write!(f, "\n{yaml}"),
            Err(_) => write!(f, "\n{lanes:#?}"),
        }
    }
}

impl fmt::Debug for BoardYaml<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Install a global fmt subscriber.
///
/// `RUST_LOG` wins over `default_filter` when set. Returns `false` if a
/// subscriber was already installed.
pub fn init_tracing(default_filter: &str) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .is_ok()
}
