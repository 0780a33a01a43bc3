//! Listing projector: plain substring filtering over the listing lines.

use crate::config::{CaseMatching, SearchConfig};
use crate::query::SearchQuery;
use crate::results::{Projection, ProjectionLine};
use keypaint_core::KeyStore;
use nucleo::chars;
use tracing::trace;

pub struct Projector {
    config: SearchConfig,
}

/// Create operations.
impl Projector {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}

impl Default for Projector {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

/// Search operations.
impl Projector {
    /// Builds the listing for `store`, keeping only lines matching `query`.
    pub fn project(&self, store: &KeyStore, query: &SearchQuery) -> Projection {
        let needle = match query {
            SearchQuery::Substring(needle) if !needle.is_empty() => Some(needle.as_str()),
            _ => None,
        };
        let ignore_case = needle.is_some_and(|needle| self.ignores_case(needle));
        let folded_needle = needle.map(|needle| self.fold(needle, ignore_case));

        let mut lines = Vec::new();
        for record in store.iter() {
            let text = record.listing_line();
            if let Some(folded_needle) = &folded_needle {
                if !self.fold(&text, ignore_case).contains(folded_needle.as_str()) {
                    continue;
                }
            }
            lines.push(ProjectionLine {
                key: record.id.clone(),
                text,
            });
        }

        trace!(query = ?query, matched = lines.len(), "projected key listing");
        Projection { lines }
    }

    fn ignores_case(&self, needle: &str) -> bool {
        match self.config.case_matching {
            CaseMatching::Sensitive => false,
            CaseMatching::Insensitive => true,
            CaseMatching::Smart => !needle.chars().any(char::is_uppercase),
        }
    }

    /// Brings haystack and needle into the same comparable form.
    fn fold(&self, text: &str, ignore_case: bool) -> String {
        let text = if ignore_case {
            text.to_lowercase()
        } else {
            text.to_string()
        };
        if self.config.unicode_normalization {
            text.chars().map(chars::normalize).collect()
        } else {
            text
        }
    }
}

/// Case-insensitive listing of `store` filtered by the search box text.
pub fn project(store: &KeyStore, search_term: &str) -> Projection {
    Projector::default().project(store, &SearchQuery::from_input(search_term))
}
