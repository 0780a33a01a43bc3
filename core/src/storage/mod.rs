//! Persistence of key configurations.

pub mod file;

pub use file::{FORMAT_VERSION, KeyEntry, LayoutDocument, LayoutFile};
