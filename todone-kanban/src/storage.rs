//! Key-value persistence for board and theme snapshots.
//!
//! A [`Storage`] backend only moves strings. The free functions
//! [`load_or_default`] and [`save`] layer JSON on top and swallow every
//! failure: loads fall back to the supplied default and saves are
//! fire-and-forget, so a broken disk degrades to an empty board instead of
//! an error.

use crate::error::{KanbanError, Result};
use crate::types::Board;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use tracing::{debug, trace, warn};
use ulid::Ulid;

/// Raw string storage keyed by name
pub trait Storage: Send + Sync {
    /// Read the value stored under `key`, `None` if absent
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn write(&self, key: &str, value: &str) -> Result<()>;
}

/// One `<key>.json` file per key inside a directory
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Create a storage rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing a key
    pub fn key_path(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty()
            || key.starts_with('.')
            || key.contains(['/', '\\'])
        {
            return Err(KanbanError::invalid_value(
                "key",
                format!("'{key}' is not a valid storage key"),
            ));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl Storage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        let path = self.key_path(key)?;
        fs::create_dir_all(&self.dir)?;
        atomic_write(&path, value.as_bytes())
    }
}

/// Write to a temp file then rename for atomic persistence.
fn atomic_write(path: &Path, data: &[u8]) -> Result<()> {
    let dir = path
        .parent()
        .ok_or_else(|| std::io::Error::new(ErrorKind::InvalidInput, "no parent dir"))?;
    let tmp = dir.join(format!(".tmp_{}", Ulid::new()));
    let written = fs::write(&tmp, data).and_then(|()| fs::rename(&tmp, path));
    if written.is_err() {
        let _ = fs::remove_file(&tmp);
    }
    written.map_err(Into::into)
}

/// In-process storage, for tests and embedders without a filesystem
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(key)
    }
}

impl Storage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Load and decode the value under `key`, falling back to `default` when it
/// is missing, unreadable, or malformed.
pub fn load_or_default<T: DeserializeOwned>(storage: &dyn Storage, key: &str, default: T) -> T {
    let raw = match storage.read(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!(key, "nothing stored, using default");
            return default;
        }
        Err(e) => {
            warn!(key, %e, "failed to read storage, using default");
            return default;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => {
            trace!(key, "loaded from storage");
            value
        }
        Err(e) => {
            warn!(key, %e, "stored value is malformed, using default");
            default
        }
    }
}

/// Encode and store `value` under `key`. Failures are logged, never raised.
pub fn save<T: Serialize>(storage: &dyn Storage, key: &str, value: &T) {
    let encoded = match serde_json::to_string(value) {
        Ok(encoded) => encoded,
        Err(e) => {
            warn!(key, %e, "failed to serialize value for storage");
            return;
        }
    };
    match storage.write(key, &encoded) {
        Ok(()) => trace!(key, bytes = encoded.len(), "saved to storage"),
        Err(e) => warn!(key, %e, "failed to write storage"),
    }
}

/// Load a board, treating a referentially inconsistent snapshot as malformed
pub fn load_board(storage: &dyn Storage, key: &str) -> Board {
    let board = load_or_default(storage, key, Board::empty());
    match board.check_consistency() {
        Ok(()) => {
            debug!(key, tasks = board.len(), "loaded board");
            board
        }
        Err(e) => {
            warn!(key, %e, "stored board is inconsistent, starting from an empty board");
            Board::empty()
        }
    }
}
