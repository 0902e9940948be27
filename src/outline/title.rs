//! Title selection.

use crate::model::{HeadingCandidate, HeadingLevel};

/// Text of the first H1 candidate, or `fallback` verbatim.
pub fn resolve_title(candidates: &[HeadingCandidate], fallback: &str) -> String {
    candidates
        .iter()
        .find(|c| c.level == HeadingLevel::H1)
        .map(|c| c.text.clone())
        .unwrap_or_else(|| fallback.to_string())
}
