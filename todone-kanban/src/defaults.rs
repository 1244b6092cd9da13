//! Built-in constants: storage keys, field limits, and drag thresholds.

/// Storage key for the serialized board snapshot.
pub const BOARD_STORAGE_KEY: &str = "kanban_board_v1";

/// Storage key for the theme preference.
pub const THEME_STORAGE_KEY: &str = "kanban_theme_v1";

/// Directory used by the file storage backend when nothing else is configured.
pub const DEFAULT_STORAGE_DIR: &str = ".todone";

/// Environment variable prefix for configuration overrides.
pub const ENV_PREFIX: &str = "TODONE_";

/// Default tracing filter directive.
pub const DEFAULT_LOG_FILTER: &str = "info";

pub const MAX_TITLE_LEN: usize = 100;
pub const MAX_DESCRIPTION_LEN: usize = 500;
pub const MAX_TAGS: usize = 10;
pub const MAX_TAG_LEN: usize = 20;

/// Pointer travel (in pixels) required before a press becomes a drag.
pub const DEFAULT_ACTIVATION_DISTANCE: f64 = 5.0;

/// Prefix of the synthetic drop-target id rendered in place of an empty column.
pub const EMPTY_ZONE_PREFIX: &str = "droppable-";
