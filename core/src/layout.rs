//! Fixed keyboard layout definition.

use crate::error::ValidationError;
use crate::types::KeyId;
use std::collections::BTreeSet;

/// German QWERTZ rows including the numeric keypad. Empty strings are spacers.
const QWERTZ_ROWS: [&[&str]; 6] = [
    &[
        "esc", "F1", "F2", "F4", "F5", "F6", "F7", "F8", "F9", "F10", "F11", "F12", "Druck",
        "Rollen", "Pause",
    ],
    &[
        "^", "1", "2", "3", "4", "5", "6", "7", "8", "9", "0", "ß", "´", "<--", "einf", "Pos1",
        "BildUp", "NumLock", "NUM/", "NUM*", "NUM-",
    ],
    &[
        "Tab", "Q", "W", "E", "R", "T", "Z", "U", "I", "O", "P", "Ü", "+", "Enter", "Entf", "Ende",
        "BildDown", "NUM7", "NUM8", "NUM9", "NUM+",
    ],
    &[
        "Caps", "A", "S", "D", "F", "G", "H", "J", "K", "L", "Ö", "Ä", "#", "Enter", "", "", "",
        "NUM4", "NUM5", "NUM6",
    ],
    &[
        "LShift", "Y", "X", "C", "V", "B", "N", "M", ",", ".", "-", "rShift", "Up", "NUM1", "NUM2",
        "NUM3", "NUM,", "Num0",
    ],
    &[
        "LStrg", "Win", "Alt", "Space", "AltGr", "FN", "List", "Strg", "Links", "Unten", "Rechts",
        "NUM0", "NUM,",
    ],
];

/// One grid cell of the layout.
pub type Slot = Option<KeyId>;

/// Rows of key slots. The same identifier may occupy several slots (a tall
/// `Enter` key); it is still one key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    rows: Vec<Vec<Slot>>,
}

impl Layout {
    pub fn qwertz() -> Self {
        let rows = QWERTZ_ROWS
            .iter()
            .map(|row| {
                row.iter()
                    .map(|raw| KeyId::try_new(raw.to_string()).ok())
                    .collect()
            })
            .collect();
        Self { rows }
    }

    /// Builds a custom layout. Blank entries become spacers.
    pub fn from_rows<R, S>(rows: R) -> Result<Self, ValidationError>
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut parsed = Vec::new();
        for row in rows {
            let mut slots = Vec::new();
            for raw in row {
                let raw = raw.as_ref();
                if raw.trim().is_empty() {
                    slots.push(None);
                    continue;
                }
                let id = KeyId::try_new(raw.to_string())
                    .map_err(|_| ValidationError::InvalidKeyId(raw.to_string()))?;
                slots.push(Some(id));
            }
            parsed.push(slots);
        }
        Ok(Self { rows: parsed })
    }

    pub fn rows(&self) -> &[Vec<Slot>] {
        &self.rows
    }

    /// Sorted, de-duplicated identifiers.
    pub fn identifiers(&self) -> Vec<KeyId> {
        self.rows
            .iter()
            .flatten()
            .flatten()
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Grid positions `(row, column)` occupied by `id`.
    pub fn positions(&self, id: &KeyId) -> Vec<(usize, usize)> {
        let mut positions = Vec::new();
        for (row_index, row) in self.rows.iter().enumerate() {
            for (col_index, slot) in row.iter().enumerate() {
                if slot.as_ref() == Some(id) {
                    positions.push((row_index, col_index));
                }
            }
        }
        positions
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::qwertz()
    }
}
