//! Search query types.

/// Query for the key listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SearchQuery {
    /// No filtering.
    #[default]
    All,
    /// Substring match over the whole listing line.
    Substring(String),
}

impl SearchQuery {
    /// Text of a search box; empty text lists everything.
    pub fn from_input(input: &str) -> Self {
        if input.is_empty() {
            Self::All
        } else {
            Self::Substring(input.to_string())
        }
    }
}

impl From<&str> for SearchQuery {
    fn from(input: &str) -> Self {
        Self::from_input(input)
    }
}
