mod app;
mod core;

pub use app::{AppConfig, AppConfigError, GeneralConfig, HistoryConfig, StorageConfig};
pub use self::core::{Config, SavedConfig};
