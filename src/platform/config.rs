// Exploration Log - platform/config.rs
//
// Platform-specific configuration, data directory resolution, and config.toml
// loading with startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for Exploration Log data and configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/explorationlog/)
    pub config_dir: PathBuf,

    /// Data directory holding the persisted log.
    pub data_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            let data_dir = proj_dirs.data_dir().to_path_buf();

            tracing::debug!(
                config = %config_dir.display(),
                data = %data_dir.display(),
                "Platform paths resolved"
            );

            Self {
                config_dir,
                data_dir,
            }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            let fallback = PathBuf::from(".");
            Self {
                config_dir: fallback.clone(),
                data_dir: fallback,
            }
        }
    }

    /// Location of config.toml: one level above the config directory so the
    /// user-visible path is short (e.g. %APPDATA%\ExplorationLog\config.toml).
    pub fn config_file(&self) -> PathBuf {
        self.config_dir
            .parent()
            .unwrap_or(&self.config_dir)
            .join(constants::CONFIG_FILE_NAME)
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[storage]` section.
    pub storage: StorageSection,
    /// `[ui]` section.
    pub ui: UiSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[storage]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct StorageSection {
    /// Key the log is stored under.
    pub key: Option<String>,
    /// Per-value quota in bytes.
    pub max_value_bytes: Option<usize>,
}

/// `[ui]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct UiSection {
    /// Theme: "dark" or "light".
    pub theme: Option<String>,
    /// Body font size in points.
    pub font_size: Option<f32>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// Validated application configuration derived from `config.toml`.
///
/// Invalid values produce warnings and fall back to defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    // -- Storage --
    pub storage_key: String,
    pub max_value_bytes: usize,

    // -- UI --
    /// Dark mode (true) or light mode (false).
    pub dark_mode: bool,
    pub font_size: f32,

    // -- Logging --
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: constants::DEFAULT_STORAGE_KEY.to_string(),
            max_value_bytes: constants::DEFAULT_MAX_VALUE_BYTES,
            dark_mode: true,
            font_size: constants::DEFAULT_FONT_SIZE,
            log_level: None,
        }
    }
}

fn out_of_range(field: &str, value: impl ToString, expected: impl Into<String>) -> ConfigError {
    ConfigError::ValueOutOfRange {
        field: field.to_string(),
        value: value.to_string(),
        expected: expected.into(),
    }
}

/// Load and validate `config.toml` at `config_path`.
///
/// Returns the validated config and every non-fatal problem found. A missing
/// file is the normal first-run case and yields defaults with no warnings.
///
/// Runs before logging is initialised (the level comes from this file), so
/// problems are returned rather than logged.
pub fn load_config(config_path: &Path) -> (AppConfig, Vec<ConfigError>) {
    if !config_path.exists() {
        return (AppConfig::default(), Vec::new());
    }

    let content = match std::fs::read_to_string(config_path) {
        Ok(c) => c,
        Err(e) => {
            let err = ConfigError::Io {
                path: config_path.to_path_buf(),
                source: e,
            };
            return (AppConfig::default(), vec![err]);
        }
    };

    let raw: RawConfig = match toml::from_str(&content) {
        Ok(r) => r,
        Err(e) => {
            let err = ConfigError::TomlParse {
                path: config_path.to_path_buf(),
                source: e,
            };
            return (AppConfig::default(), vec![err]);
        }
    };

    validate(raw)
}

/// Validate each field against named constants, accumulating all problems.
pub fn validate(raw: RawConfig) -> (AppConfig, Vec<ConfigError>) {
    let mut config = AppConfig::default();
    let mut warnings = Vec::new();

    // -- Storage: key --
    if let Some(key) = raw.storage.key {
        if super::storage::is_valid_key(&key) {
            config.storage_key = key;
        } else {
            warnings.push(out_of_range(
                "storage.key",
                key,
                format!(
                    "1-{} characters from [A-Za-z0-9._-], not starting with '.'",
                    constants::MAX_STORAGE_KEY_LEN
                ),
            ));
        }
    }

    // -- Storage: max_value_bytes --
    if let Some(bytes) = raw.storage.max_value_bytes {
        if (constants::MIN_MAX_VALUE_BYTES..=constants::ABSOLUTE_MAX_VALUE_BYTES).contains(&bytes)
        {
            config.max_value_bytes = bytes;
        } else {
            warnings.push(out_of_range(
                "storage.max_value_bytes",
                bytes,
                format!(
                    "{}-{}",
                    constants::MIN_MAX_VALUE_BYTES,
                    constants::ABSOLUTE_MAX_VALUE_BYTES
                ),
            ));
        }
    }

    // -- UI: theme --
    if let Some(theme) = raw.ui.theme {
        match theme.to_lowercase().as_str() {
            "dark" => config.dark_mode = true,
            "light" => config.dark_mode = false,
            _ => warnings.push(out_of_range("ui.theme", theme, "\"dark\" or \"light\"")),
        }
    }

    // -- UI: font_size --
    if let Some(size) = raw.ui.font_size {
        if (constants::MIN_FONT_SIZE..=constants::MAX_FONT_SIZE).contains(&size) {
            config.font_size = size;
        } else {
            warnings.push(out_of_range(
                "ui.font_size",
                size,
                format!("{}-{}", constants::MIN_FONT_SIZE, constants::MAX_FONT_SIZE),
            ));
        }
    }

    // -- Logging: level --
    if let Some(level) = raw.logging.level {
        let valid = ["error", "warn", "info", "debug", "trace"];
        if valid.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.to_lowercase());
        } else {
            warnings.push(out_of_range(
                "logging.level",
                level,
                "error, warn, info, debug, trace",
            ));
        }
    }

    (config, warnings)
}
