use super::{KeyId, KeyState};
use std::collections::BTreeMap;

/// Full, independent copy of the store state used as a history checkpoint.
///
/// Only constructible from a store, so a captured snapshot never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub(crate) keys: BTreeMap<KeyId, KeyState>,
}

impl Snapshot {
    pub fn get(&self, id: &KeyId) -> Option<&KeyState> {
        self.keys.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&KeyId, &KeyState)> {
        self.keys.iter()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
