// Exploration Log - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "Exploration Log";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "ExplorationLog";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Storage
// =============================================================================

/// Key under which the planet log is persisted.
///
/// Matches the key used by earlier releases so existing logs keep loading.
pub const DEFAULT_STORAGE_KEY: &str = "exploration-log-planets";

/// Extension appended to a storage key to form its file name.
pub const STORAGE_FILE_EXTENSION: &str = "json";

/// Default per-value quota in bytes (the usual local-storage budget).
///
/// Images are stored inline as base64, so a handful of photos can reach this.
pub const DEFAULT_MAX_VALUE_BYTES: usize = 5 * 1024 * 1024;

/// Smallest quota accepted from config.toml.
pub const MIN_MAX_VALUE_BYTES: usize = 1024;

/// Largest quota accepted from config.toml.
pub const ABSOLUTE_MAX_VALUE_BYTES: usize = 512 * 1024 * 1024;

/// Maximum length of a storage key.
pub const MAX_STORAGE_KEY_LEN: usize = 128;

// =============================================================================
// Images
// =============================================================================

/// File extensions offered by the image picker dialog.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "bmp"];

/// Largest edge, in pixels, of an image texture uploaded for the detail view.
/// Bigger images are downscaled before upload.
pub const MAX_PREVIEW_EDGE_PX: u32 = 1024;

/// Decoded image textures kept alive at once; the cache is flushed when full.
pub const MAX_CACHED_PREVIEWS: usize = 16;

// =============================================================================
// UI defaults
// =============================================================================

/// Default UI body font size in points.
pub const DEFAULT_FONT_SIZE: f32 = 14.5;

/// Minimum user-configurable UI font size (points).
pub const MIN_FONT_SIZE: f32 = 10.0;

/// Maximum user-configurable UI font size (points).
pub const MAX_FONT_SIZE: f32 = 24.0;

/// Number of description lines shown per entry in the log list.
pub const LIST_DESCRIPTION_LINES: usize = 2;

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";
