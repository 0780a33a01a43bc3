//! Projection result types.

use keypaint_core::types::KeyId;

/// One listing line together with the key it shows, so a selected line maps
/// back to its key without parsing the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectionLine {
    pub key: KeyId,
    pub text: String,
}

/// Listing lines sorted by key identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Projection {
    pub(crate) lines: Vec<ProjectionLine>,
}

impl Projection {
    pub fn iter(&self) -> impl Iterator<Item = &ProjectionLine> {
        self.lines.iter()
    }

    /// Display strings in listing order.
    pub fn texts(&self) -> Vec<&str> {
        self.lines.iter().map(|line| line.text.as_str()).collect()
    }

    /// Key shown at `index`, e.g. the selected row of a list widget.
    pub fn key_at(&self, index: usize) -> Option<&KeyId> {
        self.lines.get(index).map(|line| &line.key)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl IntoIterator for Projection {
    type Item = ProjectionLine;
    type IntoIter = std::vec::IntoIter<ProjectionLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.into_iter()
    }
}
