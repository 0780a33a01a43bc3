//! Editing session combining the key store, its history and the layout file.

use crate::error::{Result, ValidationError};
use crate::history::History;
use crate::layout::Layout;
use crate::storage::LayoutFile;
use crate::store::KeyStore;
use crate::types::{Color, Config, KeyId, KeyRecord, KeyState};
use std::path::Path;
use tracing::{debug, info, warn};

/// Result of a successful load.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LoadOutcome {
    /// Keys overwritten from the file.
    pub applied: Vec<KeyId>,
    /// Identifiers in the file that are not part of the layout.
    pub ignored: Vec<String>,
}

/// One application session. Every user action goes through here; operations
/// returning `bool` report whether the store changed and the view needs a
/// refresh.
pub struct KeyPainter {
    layout: Layout,
    store: KeyStore,
    history: History,
    file: LayoutFile,
}

impl KeyPainter {
    pub fn new(layout: Layout, config: &Config) -> Self {
        let store = KeyStore::new(&layout, config.saved.default_color.clone());
        Self {
            layout,
            store,
            history: History::new(config.saved.history_capacity),
            file: LayoutFile::new(config.layout_path()),
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn store(&self) -> &KeyStore {
        &self.store
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn layout_path(&self) -> &Path {
        self.file.path()
    }

    pub fn get(&self, id: &KeyId) -> Result<&KeyRecord> {
        Ok(self.store.get(id)?)
    }
}

/// Edit operations. Each records an undo snapshot before mutating; edits that
/// leave the key unchanged record nothing.
impl KeyPainter {
    pub fn set_labels(&mut self, id: &KeyId, labels: Vec<String>) -> Result<bool> {
        if labels.is_empty() {
            return Err(ValidationError::EmptyLabels(id.clone()).into());
        }
        if self.store.get(id)?.labels == labels {
            return Ok(false);
        }

        self.history.record(self.store.snapshot());
        self.store.set_labels(id, labels)?;
        debug!(key = %id, "labels changed");
        Ok(true)
    }

    /// Applies the comma-separated input of the key editor.
    pub fn set_labels_from_input(&mut self, id: &KeyId, input: &str) -> Result<bool> {
        self.set_labels(id, crate::store::parse_labels(input))
    }

    pub fn set_color(&mut self, id: &KeyId, color: Color) -> Result<bool> {
        if self.store.get(id)?.color == color {
            return Ok(false);
        }

        self.history.record(self.store.snapshot());
        self.store.set_color(id, color)?;
        debug!(key = %id, "color changed");
        Ok(true)
    }

    /// Applies a color picker result. `None` means the picker was cancelled.
    pub fn pick_color(&mut self, id: &KeyId, picked: Option<&str>) -> Result<bool> {
        let Some(raw) = picked else {
            return Ok(false);
        };
        let color = Color::try_new(raw.to_string())
            .map_err(|_| ValidationError::InvalidColor(raw.to_string()))?;
        self.set_color(id, color)
    }

    pub fn reset(&mut self, id: &KeyId) -> Result<bool> {
        if self.store.get(id)?.is_default(self.store.default_color()) {
            return Ok(false);
        }

        self.history.record(self.store.snapshot());
        self.store.reset(id)?;
        debug!(key = %id, "key reset");
        Ok(true)
    }

    /// Restores every key to its defaults. Undoable like any other edit.
    pub fn reset_all(&mut self) -> bool {
        if self.store.customized().is_empty() {
            return false;
        }

        self.history.record(self.store.snapshot());
        self.store.reset_all();
        info!("all keys reset");
        true
    }
}

/// History operations.
impl KeyPainter {
    pub fn undo(&mut self) -> bool {
        match self.history.undo(self.store.snapshot()) {
            Some(snapshot) => {
                self.store.restore(&snapshot);
                true
            }
            None => false,
        }
    }

    pub fn redo(&mut self) -> bool {
        match self.history.redo(self.store.snapshot()) {
            Some(snapshot) => {
                self.store.restore(&snapshot);
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }
}

/// File operations.
impl KeyPainter {
    /// Writes every key to the layout file.
    pub fn save(&self) -> Result<()> {
        self.file.save(&self.store)?;
        Ok(())
    }

    /// Overwrites the keys present in the layout file. On any error the store
    /// is left untouched. A successful load that changes the store is undoable.
    pub fn load(&mut self) -> Result<LoadOutcome> {
        let document = self.file.load()?;
        let (states, ignored) = document.into_states(&self.store)?;

        for raw in &ignored {
            warn!(key = %raw, "ignoring key not in layout");
        }

        let changed: Vec<(KeyId, KeyState)> = states
            .iter()
            .filter(|(id, state)| {
                self.store
                    .get(id)
                    .map(|record| KeyState::from(record) != *state)
                    .unwrap_or(false)
            })
            .cloned()
            .collect();
        if !changed.is_empty() {
            self.history.record(self.store.snapshot());
            self.store.apply_states(changed)?;
        }

        let applied: Vec<KeyId> = states.into_iter().map(|(id, _)| id).collect();
        info!(
            path = %self.file.path().display(),
            applied = applied.len(),
            ignored = ignored.len(),
            "layout loaded"
        );
        Ok(LoadOutcome { applied, ignored })
    }
}
