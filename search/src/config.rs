#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CaseMatching {
    Sensitive,
    #[default]
    Insensitive,
    /// Case-insensitive unless query contains uppercase.
    Smart,
}

#[derive(Debug, Clone, Default)]
pub struct SearchConfig {
    pub case_matching: CaseMatching,
    /// Folds latin letters to their ASCII base on both sides, so `a` also
    /// finds `ä`. Off by default: with it on, matching is no longer a plain
    /// substring test.
    pub unicode_normalization: bool,
}
