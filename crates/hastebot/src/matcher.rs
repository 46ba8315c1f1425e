//! Command text matching.
//!
//! Patterns starting with [`COMMAND_MARKER`] are exact tokens. Any other
//! pattern matches as a prefix, so `quote!` or `quote something` can carry
//! trailing words. Both sides are compared after trimming and lower-casing
//! the text; patterns are used as written.

pub const COMMAND_MARKER: char = '!';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Exact,
    Prefix,
}

impl MatchKind {
    pub fn of(pattern: &str) -> Self {
        if pattern.starts_with(COMMAND_MARKER) {
            MatchKind::Exact
        } else {
            MatchKind::Prefix
        }
    }
}

/// Trim and lower-case text for comparison.
pub fn fold(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Match already folded text against one pattern.
pub fn matches_folded(folded: &str, pattern: &str) -> bool {
    match MatchKind::of(pattern) {
        MatchKind::Exact => folded == pattern,
        MatchKind::Prefix => folded.starts_with(pattern),
    }
}

/// True if any candidate matches the text.
///
/// An empty pattern matches everything; command tables must not contain one.
pub fn matches(text: &str, candidates: &[&str]) -> bool {
    let folded = fold(text);
    candidates.iter().any(|p| matches_folded(&folded, p))
}
