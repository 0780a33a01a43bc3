//! KeyPainter key listing.
//!
//! Projects a [`KeyStore`](keypaint_core::KeyStore) into the sorted listing
//! shown next to the keyboard, one `"<id>: <labels>"` line per key, filtered
//! by a search term. Each call builds a fresh [`Projection`]; nothing is
//! cached between calls, so it can be called after every edit.

mod config;
mod projector;
mod query;
mod results;

pub use config::{CaseMatching, SearchConfig};
pub use projector::{Projector, project};
pub use query::SearchQuery;
pub use results::{Projection, ProjectionLine};
