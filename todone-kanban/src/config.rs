//! Board configuration.
//!
//! Sources are layered with figment, later ones overriding earlier ones:
//!
//! 1. Built-in defaults
//! 2. An optional TOML file
//! 3. `TODONE_*` environment variables (e.g. `TODONE_STORAGE_DIR`)

use crate::defaults::{
    BOARD_STORAGE_KEY, DEFAULT_ACTIVATION_DISTANCE, DEFAULT_LOG_FILTER, DEFAULT_STORAGE_DIR,
    ENV_PREFIX, THEME_STORAGE_KEY,
};
use crate::drag::DragConfig;
use crate::error::{KanbanError, Result};
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Directory holding one JSON file per storage key
    pub storage_dir: PathBuf,
    pub board_key: String,
    pub theme_key: String,
    /// Pointer travel in pixels before a press becomes a drag
    pub activation_distance: f64,
    /// Tracing filter used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            storage_dir: PathBuf::from(DEFAULT_STORAGE_DIR),
            board_key: BOARD_STORAGE_KEY.to_string(),
            theme_key: THEME_STORAGE_KEY.to_string(),
            activation_distance: DEFAULT_ACTIVATION_DISTANCE,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl BoardConfig {
    /// Defaults plus environment overrides, no file
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Defaults, then `file` if given, then environment overrides
    pub fn load_from(file: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(BoardConfig::default()));

        if let Some(path) = file {
            debug!(path = %path.display(), "loading board config file");
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).map(|key| key.as_str().to_lowercase().into()));

        let config: BoardConfig = figment.extract().map_err(Box::new)?;
        config.validate()?;
        debug!(?config, "board config loaded");
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if !self.activation_distance.is_finite() || self.activation_distance < 0.0 {
            return Err(KanbanError::invalid_value(
                "activation_distance",
                format!("must be a non-negative number, got {}", self.activation_distance),
            ));
        }
        if self.board_key.is_empty() {
            return Err(KanbanError::invalid_value("board_key", "must not be empty"));
        }
        if self.theme_key.is_empty() {
            return Err(KanbanError::invalid_value("theme_key", "must not be empty"));
        }
        if self.board_key == self.theme_key {
            return Err(KanbanError::invalid_value(
                "theme_key",
                "must differ from board_key",
            ));
        }
        Ok(())
    }

    pub fn drag_config(&self) -> DragConfig {
        DragConfig {
            activation_distance: self.activation_distance,
        }
    }
}
