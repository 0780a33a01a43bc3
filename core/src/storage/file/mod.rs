//! JSON layout file holding labels and color per key.
//!
//! Written as `{"version": 1, "keys": {"<id>": {"labels": [..], "color": ".."}}}`.
//! Documents without the version envelope, a bare object keyed by identifier,
//! are accepted on load.

use crate::error::StorageError;
use crate::store::KeyStore;
use crate::types::{Color, KeyId, KeyState};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::info;

pub const FORMAT_VERSION: u32 = 1;

/// Stored form of one key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEntry {
    pub labels: Vec<String>,
    pub color: String,
}

/// Fully parsed layout file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutDocument {
    pub version: u32,
    pub keys: BTreeMap<String, KeyEntry>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredDocument {
    Versioned(LayoutDocument),
    Legacy(BTreeMap<String, KeyEntry>),
}

impl LayoutDocument {
    pub fn from_store(store: &KeyStore) -> Self {
        let keys = store
            .iter()
            .map(|record| {
                (
                    record.id.to_string(),
                    KeyEntry {
                        labels: record.labels.clone(),
                        color: record.color.to_string(),
                    },
                )
            })
            .collect();

        Self {
            version: FORMAT_VERSION,
            keys,
        }
    }

    /// Splits the document into validated states for keys known to `store`
    /// and the identifiers the store does not know.
    ///
    /// Fails on the first invalid entry for a known key, before anything is
    /// applied.
    pub fn into_states(
        self,
        store: &KeyStore,
    ) -> Result<(Vec<(KeyId, KeyState)>, Vec<String>), StorageError> {
        let mut states = Vec::new();
        let mut unknown = Vec::new();

        for (raw, entry) in self.keys {
            let Ok(id) = store.resolve(&raw) else {
                unknown.push(raw);
                continue;
            };
            if entry.labels.is_empty() {
                return Err(StorageError::InvalidEntry {
                    key: raw,
                    reason: "no labels".to_string(),
                });
            }
            let color = Color::try_new(entry.color).map_err(|_| StorageError::InvalidEntry {
                key: raw.clone(),
                reason: "empty color".to_string(),
            })?;
            states.push((
                id,
                KeyState {
                    labels: entry.labels,
                    color,
                },
            ));
        }

        Ok((states, unknown))
    }
}

/// Location of the layout file. The file is opened and closed within each call.
#[derive(Debug, Clone)]
pub struct LayoutFile {
    path: PathBuf,
}

impl LayoutFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Writes every key of `store`.
    pub fn save(&self, store: &KeyStore) -> Result<(), StorageError> {
        let document = LayoutDocument::from_store(store);
        let content = serde_json::to_string_pretty(&document)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&self.path, content)?;

        info!(path = %self.path.display(), keys = document.keys.len(), "layout saved");
        Ok(())
    }

    /// Reads and parses the whole file.
    pub fn load(&self) -> Result<LayoutDocument, StorageError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(StorageError::NotFound(self.path.clone()));
            }
            Err(e) => return Err(e.into()),
        };

        let document = match serde_json::from_str::<StoredDocument>(&content)? {
            StoredDocument::Versioned(document) => document,
            StoredDocument::Legacy(keys) => LayoutDocument {
                version: FORMAT_VERSION,
                keys,
            },
        };

        if document.version != FORMAT_VERSION {
            return Err(StorageError::UnsupportedVersion(document.version));
        }

        Ok(document)
    }
}

#[cfg(test)]
mod tests;
