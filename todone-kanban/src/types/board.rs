//! Board-level types: Board and Column
//!
//! A `Board` is an immutable snapshot. Every field sits behind an `Arc`, so
//! cloning a board is cheap and the reducer only copies the parts a command
//! actually touches (`Arc::make_mut`). Earlier snapshots stay valid for
//! anyone still holding them.

use super::ids::{ColumnId, TaskId};
use super::task::Task;
use crate::error::{KanbanError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;

/// A lane on the board and the ordered ids of the tasks it holds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    #[serde(default)]
    pub item_ids: Vec<TaskId>,
}

impl Column {
    /// An empty column with its default title
    pub fn new(id: ColumnId) -> Self {
        Self {
            id,
            title: id.default_title().to_string(),
            item_ids: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.item_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.item_ids.is_empty()
    }

    /// Index of a task within this column
    pub fn position(&self, id: &TaskId) -> Option<usize> {
        self.item_ids.iter().position(|i| i == id)
    }
}

/// The whole board: tasks by id, columns by id, and column display order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    items: Arc<HashMap<TaskId, Arc<Task>>>,
    columns: BTreeMap<ColumnId, Arc<Column>>,
    column_order: Arc<Vec<ColumnId>>,
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    /// The three default columns, all empty
    pub fn empty() -> Self {
        Self {
            items: Arc::new(HashMap::new()),
            columns: ColumnId::ALL
                .into_iter()
                .map(|id| (id, Arc::new(Column::new(id))))
                .collect(),
            column_order: Arc::new(ColumnId::ALL.to_vec()),
        }
    }

    /// Look up a task
    pub fn task(&self, id: &TaskId) -> Option<&Task> {
        self.items.get(id).map(Arc::as_ref)
    }

    /// Shared handle to a task snapshot
    pub fn task_arc(&self, id: &TaskId) -> Option<Arc<Task>> {
        self.items.get(id).cloned()
    }

    pub fn contains_task(&self, id: &TaskId) -> bool {
        self.items.contains_key(id)
    }

    /// All tasks, unordered
    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.items.values().map(Arc::as_ref)
    }

    /// Number of tasks on the board
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn column(&self, id: ColumnId) -> Option<&Column> {
        self.columns.get(&id).map(Arc::as_ref)
    }

    /// Ordered task ids of a column (empty if the column is missing)
    pub fn column_ids(&self, id: ColumnId) -> &[TaskId] {
        self.columns
            .get(&id)
            .map(|c| c.item_ids.as_slice())
            .unwrap_or(&[])
    }

    /// Tasks of a column in display order, skipping ids with no task
    pub fn column_tasks(&self, id: ColumnId) -> Vec<&Task> {
        self.column_ids(id)
            .iter()
            .filter_map(|task_id| self.task(task_id))
            .collect()
    }

    pub fn column_count(&self, id: ColumnId) -> usize {
        self.column_ids(id).len()
    }

    pub fn column_order(&self) -> &[ColumnId] {
        &self.column_order
    }

    /// Find the column whose sequence lists the task, scanning in display order
    pub fn find_task_column(&self, id: &TaskId) -> Option<ColumnId> {
        self.column_order
            .iter()
            .copied()
            .find(|column| self.column_ids(*column).contains(id))
    }

    /// Column and index of a task in its owning column's sequence
    pub fn index_in_column(&self, id: &TaskId) -> Option<(ColumnId, usize)> {
        let column = self.task(id)?.column_id;
        let index = self.column(column)?.position(id)?;
        Some((column, index))
    }

    /// Whether two snapshots share every piece of structure.
    ///
    /// A command that changes nothing returns a board for which this is true;
    /// any effective change breaks at least one shared pointer.
    pub fn ptr_eq(&self, other: &Board) -> bool {
        Arc::ptr_eq(&self.items, &other.items)
            && Arc::ptr_eq(&self.column_order, &other.column_order)
            && self.columns.len() == other.columns.len()
            && self
                .columns
                .iter()
                .zip(other.columns.iter())
                .all(|((a_id, a), (b_id, b))| a_id == b_id && Arc::ptr_eq(a, b))
    }

    /// Verify the referential invariants between columns and tasks.
    ///
    /// The display order is exactly the three lanes; every lane exists and
    /// carries its own id; every listed id names a task; every task is
    /// listed exactly once, in the column named by its `column_id`.
    pub fn check_consistency(&self) -> Result<()> {
        if self.column_order.as_slice() != ColumnId::ALL {
            return Err(KanbanError::inconsistent(format!(
                "column order {:?} is not {:?}",
                self.column_order, ColumnId::ALL
            )));
        }

        let mut seen = HashSet::new();

        for column_id in self.column_order.iter() {
            let column = self.column(*column_id).ok_or_else(|| {
                KanbanError::inconsistent(format!("column '{column_id}' is missing"))
            })?;
            if column.id != *column_id {
                return Err(KanbanError::inconsistent(format!(
                    "column stored under '{column_id}' claims id '{}'",
                    column.id
                )));
            }

            for task_id in &column.item_ids {
                let task = self.task(task_id).ok_or_else(|| {
                    KanbanError::inconsistent(format!(
                        "column '{column_id}' lists unknown task '{task_id}'"
                    ))
                })?;
                if task.column_id != *column_id {
                    return Err(KanbanError::inconsistent(format!(
                        "task '{task_id}' is listed in '{column_id}' but belongs to '{}'",
                        task.column_id
                    )));
                }
                if !seen.insert(task_id.clone()) {
                    return Err(KanbanError::inconsistent(format!(
                        "task '{task_id}' is listed more than once"
                    )));
                }
            }
        }

        if let Some((id, _)) = self.items.iter().find(|(id, _)| !seen.contains(*id)) {
            return Err(KanbanError::inconsistent(format!(
                "task '{id}' is not listed in any column"
            )));
        }

        for (key, task) in self.items.iter() {
            if *key != task.id {
                return Err(KanbanError::inconsistent(format!(
                    "task stored under '{key}' claims id '{}'",
                    task.id
                )));
            }
        }

        Ok(())
    }

    // Copy-on-write accessors used by the reducer. Only the touched parts of
    // the snapshot are cloned.

    pub(crate) fn items_mut(&mut self) -> &mut HashMap<TaskId, Arc<Task>> {
        Arc::make_mut(&mut self.items)
    }

    pub(crate) fn column_mut(&mut self, id: ColumnId) -> &mut Column {
        let column = self
            .columns
            .entry(id)
            .or_insert_with(|| Arc::new(Column::new(id)));
        Arc::make_mut(column)
    }
}
