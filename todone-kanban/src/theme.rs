//! Light/dark theme preference, persisted under its own storage key

use crate::defaults::THEME_STORAGE_KEY;
use crate::storage::{self, Storage};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The other theme
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The current theme, written through to storage on every change
pub struct ThemePreference {
    theme: Theme,
    storage: Arc<dyn Storage>,
    key: String,
}

impl ThemePreference {
    /// Load the preference stored under `key`, defaulting to light
    pub fn load(storage: Arc<dyn Storage>, key: impl Into<String>) -> Self {
        let key = key.into();
        let theme = storage::load_or_default(storage.as_ref(), &key, Theme::default());
        debug!(%theme, "loaded theme preference");
        Self {
            theme,
            storage,
            key,
        }
    }

    /// `load` with the default theme key
    pub fn load_default(storage: Arc<dyn Storage>) -> Self {
        Self::load(storage, THEME_STORAGE_KEY)
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Switch between light and dark, returning the new theme
    pub fn toggle(&mut self) -> Theme {
        self.set(self.theme.toggled());
        self.theme
    }

    pub fn set(&mut self, theme: Theme) {
        self.theme = theme;
        debug!(%theme, "theme changed");
        storage::save(self.storage.as_ref(), &self.key, &self.theme);
    }
}
