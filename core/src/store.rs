//! In-memory key configuration store.

use crate::error::{LookupError, ValidationError};
use crate::layout::Layout;
use crate::types::{Color, KeyId, KeyRecord, KeyState, Snapshot};
use std::collections::BTreeMap;

/// Minimum button width in characters.
pub const MIN_DISPLAY_WIDTH: usize = 6;

/// Mapping from identifier to its record. The identifier set is fixed at
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyStore {
    records: BTreeMap<KeyId, KeyRecord>,
    default_color: Color,
}

/// Create operations.
impl KeyStore {
    /// Creates a store with one default record per layout identifier.
    pub fn new(layout: &Layout, default_color: Color) -> Self {
        let records = layout
            .identifiers()
            .into_iter()
            .map(|id| (id.clone(), KeyRecord::new(id, default_color.clone())))
            .collect();

        Self {
            records,
            default_color,
        }
    }
}

/// Read operations.
impl KeyStore {
    pub fn get(&self, id: &KeyId) -> Result<&KeyRecord, LookupError> {
        self.records
            .get(id)
            .ok_or_else(|| LookupError::UnknownKey(id.to_string()))
    }

    /// Maps a raw identifier, e.g. the text of a clicked element, to a known key.
    pub fn resolve(&self, raw: &str) -> Result<KeyId, LookupError> {
        let unknown = || LookupError::UnknownKey(raw.to_string());
        let id = KeyId::try_new(raw.to_string()).map_err(|_| unknown())?;
        self.records
            .get_key_value(&id)
            .map(|(id, _)| id.clone())
            .ok_or_else(unknown)
    }

    pub fn contains(&self, id: &KeyId) -> bool {
        self.records.contains_key(id)
    }

    /// Records in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = &KeyRecord> {
        self.records.values()
    }

    pub fn ids(&self) -> impl Iterator<Item = &KeyId> {
        self.records.keys()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn default_color(&self) -> &Color {
        &self.default_color
    }

    /// Button width in characters: the longest of the key's labels and its
    /// identifier, plus two, never below [`MIN_DISPLAY_WIDTH`].
    pub fn display_width(&self, id: &KeyId) -> Result<usize, LookupError> {
        let record = self.get(id)?;
        let longest = record
            .labels
            .iter()
            .map(|label| label.chars().count())
            .chain(std::iter::once(id.chars().count()))
            .max()
            .unwrap_or(0);
        Ok(MIN_DISPLAY_WIDTH.max(longest + 2))
    }

    /// Identifiers whose labels or color differ from the defaults.
    pub fn customized(&self) -> Vec<&KeyId> {
        self.records
            .values()
            .filter(|record| !record.is_default(&self.default_color))
            .map(|record| &record.id)
            .collect()
    }
}

/// Mutation operations.
impl KeyStore {
    pub fn set_labels(&mut self, id: &KeyId, labels: Vec<String>) -> crate::Result<()> {
        if labels.is_empty() {
            return Err(ValidationError::EmptyLabels(id.clone()).into());
        }
        self.get_mut(id)?.labels = labels;
        Ok(())
    }

    pub fn set_color(&mut self, id: &KeyId, color: Color) -> Result<(), LookupError> {
        self.get_mut(id)?.color = color;
        Ok(())
    }

    /// Restores one key to its default label and color.
    pub fn reset(&mut self, id: &KeyId) -> Result<(), LookupError> {
        let default_color = self.default_color.clone();
        let record = self.get_mut(id)?;
        *record = KeyRecord::new(record.id.clone(), default_color);
        Ok(())
    }

    pub fn reset_all(&mut self) {
        for record in self.records.values_mut() {
            *record = KeyRecord::new(record.id.clone(), self.default_color.clone());
        }
    }

    fn get_mut(&mut self, id: &KeyId) -> Result<&mut KeyRecord, LookupError> {
        self.records
            .get_mut(id)
            .ok_or_else(|| LookupError::UnknownKey(id.to_string()))
    }
}

/// Snapshot operations.
impl KeyStore {
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            keys: self
                .records
                .iter()
                .map(|(id, record)| (id.clone(), KeyState::from(record)))
                .collect(),
        }
    }

    /// Overwrites every key present in `snapshot`. Keys missing from the
    /// snapshot keep their current state.
    pub fn restore(&mut self, snapshot: &Snapshot) {
        for (id, state) in snapshot.iter() {
            if let Some(record) = self.records.get_mut(id) {
                record.labels = state.labels.clone();
                record.color = state.color.clone();
            }
        }
    }

    /// Overwrites several keys at once. Every identifier is checked before
    /// anything is written.
    pub(crate) fn apply_states(
        &mut self,
        states: Vec<(KeyId, KeyState)>,
    ) -> Result<(), LookupError> {
        if let Some((id, _)) = states.iter().find(|(id, _)| !self.contains(id)) {
            return Err(LookupError::UnknownKey(id.to_string()));
        }
        for (id, state) in states {
            if let Some(record) = self.records.get_mut(&id) {
                record.labels = state.labels;
                record.color = state.color;
            }
        }
        Ok(())
    }
}

/// Splits the comma-separated label input of the key editor.
///
/// Entries are trimmed and blank entries dropped.
pub fn parse_labels(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map(str::to_string)
        .collect()
}
