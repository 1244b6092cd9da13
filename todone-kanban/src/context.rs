//! Identity and time collaborators used by the reducer.
//!
//! `ReduceContext` carries the clock and id generator that ADD, UPDATE, and
//! MOVE need. Production code uses [`SystemClock`] and [`UlidGenerator`];
//! tests plug in deterministic implementations.

use crate::types::{Board, TaskId};
use chrono::{DateTime, SubsecRound, Utc};
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};
use ulid::Generator;

/// Wall-clock source for created/updated timestamps
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Source of globally unique task ids
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> TaskId;
}

/// The system clock, truncated to the millisecond resolution snapshots store
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now().trunc_subsecs(3)
    }
}

/// A clock that only moves when told to. Useful for replaying commands with
/// known timestamps.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(at: DateTime<Utc>) -> Self {
        Self { now: Mutex::new(at) }
    }

    pub fn advance(&self, by: chrono::Duration) {
        let mut now = self.now.lock().unwrap_or_else(PoisonError::into_inner);
        *now += by;
    }

    pub fn set(&self, at: DateTime<Utc>) {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner) = at;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Monotonic ULID generator. Ids generated within the same millisecond are
/// strictly increasing, so two calls never return the same value.
pub struct UlidGenerator {
    inner: Mutex<Generator>,
}

impl UlidGenerator {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Generator::new()),
        }
    }
}

impl Default for UlidGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for UlidGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UlidGenerator").finish_non_exhaustive()
    }
}

impl IdGenerator for UlidGenerator {
    fn generate(&self) -> TaskId {
        let mut generator = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        match generator.generate() {
            Ok(ulid) => ulid.into(),
            // Random part overflowed within one millisecond
            Err(_) => TaskId::new(),
        }
    }
}

/// Collaborators handed to every command during reduction
#[derive(Clone)]
pub struct ReduceContext {
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
}

impl ReduceContext {
    pub fn new(clock: Arc<dyn Clock>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { clock, ids }
    }

    /// Replace the clock
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Replace the id generator
    pub fn with_ids(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// An id not yet used by any task on the board
    pub fn fresh_id(&self, board: &Board) -> TaskId {
        loop {
            let id = self.ids.generate();
            if !board.contains_task(&id) {
                return id;
            }
            tracing::warn!(task_id = %id, "id generator returned an id already on the board");
        }
    }
}

impl Default for ReduceContext {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock), Arc::new(UlidGenerator::new()))
    }
}

impl fmt::Debug for ReduceContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReduceContext").finish_non_exhaustive()
    }
}
