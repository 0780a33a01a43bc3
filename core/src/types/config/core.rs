use super::{AppConfig, AppConfigError};
use crate::types::Color;
use std::path::PathBuf;

/// Core configuration for `KeyPainter` initialization.
#[derive(Clone, Debug)]
pub struct Config {
    pub base_path: PathBuf,
    pub saved: SavedConfig,
}

/// Settings resolved from `AppConfig`, already validated.
#[derive(Clone, Debug)]
pub struct SavedConfig {
    pub default_color: Color,
    pub history_capacity: usize,
    pub layout_file: String,
}

impl Config {
    /// Path of the key layout document (labels and colors).
    pub fn layout_path(&self) -> PathBuf {
        self.base_path.join(&self.saved.layout_file)
    }

    pub fn settings_path(&self) -> PathBuf {
        AppConfig::path(&self.base_path)
    }
}

impl TryFrom<&AppConfig> for SavedConfig {
    type Error = AppConfigError;

    /// Invalid values are replaced with defaults first.
    fn try_from(config: &AppConfig) -> Result<Self, Self::Error> {
        let config = config.with_defaults_for_invalid();
        Ok(Self {
            default_color: Color::try_new(config.general.default_color)?,
            history_capacity: config.history.capacity,
            layout_file: config.storage.layout_file,
        })
    }
}
