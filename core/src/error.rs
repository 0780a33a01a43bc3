use crate::types::KeyId;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("lookup error: {0}")]
    Lookup(#[from] LookupError),

    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("unknown key: {0}")]
    UnknownKey(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid key identifier: {0:?}")]
    InvalidKeyId(String),

    #[error("invalid color: {0:?}")]
    InvalidColor(String),

    #[error("key {0} needs at least one label")]
    EmptyLabels(KeyId),
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("layout file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed layout file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("unsupported layout file version: {0}")]
    UnsupportedVersion(u32),

    #[error("invalid entry for key {key}: {reason}")]
    InvalidEntry { key: String, reason: String },
}
