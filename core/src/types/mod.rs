pub(crate) mod config;
pub use config::{
    AppConfig, AppConfigError, Config, GeneralConfig, HistoryConfig, SavedConfig, StorageConfig,
};

pub(crate) mod key;
pub use key::{KeyId, KeyIdError, MAX_KEY_ID_LENGTH};

pub(crate) mod color;
pub use color::{Color, ColorError, DEFAULT_COLOR};

pub(crate) mod record;
pub use record::{KeyRecord, KeyState};

pub(crate) mod snapshot;
pub use snapshot::Snapshot;
