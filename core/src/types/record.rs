use super::{Color, KeyId};

/// Mutable state of one key: its labels and its color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyRecord {
    pub id: KeyId,
    /// Never empty; the first entry is the primary label.
    pub labels: Vec<String>,
    pub color: Color,
}

impl KeyRecord {
    pub fn new(id: KeyId, default_color: Color) -> Self {
        Self {
            labels: vec![id.to_string()],
            id,
            color: default_color,
        }
    }

    pub fn is_default(&self, default_color: &Color) -> bool {
        self.labels.len() == 1 && self.labels[0] == *self.id && self.color == *default_color
    }

    /// `"<id>: <label1, label2, ...>"`, the line shown in the key listing.
    pub fn listing_line(&self) -> String {
        format!("{}: {}", self.id, self.labels.join(", "))
    }
}

/// Labels and color of one key as captured in a snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyState {
    pub labels: Vec<String>,
    pub color: Color,
}

impl From<&KeyRecord> for KeyState {
    fn from(record: &KeyRecord) -> Self {
        Self {
            labels: record.labels.clone(),
            color: record.color.clone(),
        }
    }
}
