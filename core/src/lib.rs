//! Key configuration model for the KeyPainter keyboard layout editor.
//!
//! A [`KeyPainter`] session owns the [`KeyStore`] (labels and color per key),
//! its undo/redo [`History`] and the location of the layout file. The
//! presentation layer calls the session for every user action and re-renders
//! afterwards.

pub mod core;
pub mod error;
pub mod history;
pub mod layout;
pub mod storage;
pub mod store;
pub mod types;

pub use crate::core::{KeyPainter, LoadOutcome};
pub use error::{Error, LookupError, Result, StorageError, ValidationError};
pub use history::History;
pub use layout::Layout;
pub use store::{KeyStore, parse_labels};
