use crate::types::{Color, ColorError, DEFAULT_COLOR};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// User-facing editor settings, persisted as keypaint.toml.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub history: HistoryConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

impl AppConfig {
    /// Returns the settings file path within the given data directory.
    pub fn path(data_dir: &Path) -> std::path::PathBuf {
        data_dir.join("keypaint.toml")
    }

    /// Loads settings from a TOML file. Returns defaults if the file doesn't exist.
    pub fn load(path: &Path) -> Result<Self, AppConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Saves settings to a TOML file.
    pub fn save(&self, path: &Path) -> Result<(), AppConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validates settings and returns list of validation errors.
    /// Returns empty vec if settings are valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if Color::try_new(self.general.default_color.clone()).is_err() {
            errors.push("default_color must not be empty".to_string());
        }

        if self.history.capacity == 0 {
            errors.push("history capacity must be at least 1".to_string());
        }

        if self.storage.layout_file.trim().is_empty() {
            errors.push("layout_file must not be empty".to_string());
        }

        errors
    }

    /// Returns validated settings, replacing invalid values with defaults.
    pub fn with_defaults_for_invalid(&self) -> Self {
        let defaults = Self::default();
        Self {
            general: GeneralConfig {
                default_color: if Color::try_new(self.general.default_color.clone()).is_err() {
                    defaults.general.default_color
                } else {
                    self.general.default_color.clone()
                },
            },
            history: HistoryConfig {
                capacity: if self.history.capacity == 0 {
                    defaults.history.capacity
                } else {
                    self.history.capacity
                },
            },
            storage: StorageConfig {
                layout_file: if self.storage.layout_file.trim().is_empty() {
                    defaults.storage.layout_file
                } else {
                    self.storage.layout_file.trim().to_string()
                },
            },
        }
    }
}

/// General editor settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GeneralConfig {
    #[serde(default = "default_color")]
    pub default_color: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
        }
    }
}

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

/// Undo/redo settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HistoryConfig {
    #[serde(default = "default_history_capacity")]
    pub capacity: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            capacity: default_history_capacity(),
        }
    }
}

fn default_history_capacity() -> usize {
    10
}

/// Where the key layout document is written, relative to the data directory.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_layout_file")]
    pub layout_file: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            layout_file: default_layout_file(),
        }
    }
}

fn default_layout_file() -> String {
    "keyboard_config.json".to_string()
}

/// Errors that can occur when loading or saving settings.
#[derive(Debug, Error)]
pub enum AppConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("invalid color: {0}")]
    InvalidColor(#[from] ColorError),
}
