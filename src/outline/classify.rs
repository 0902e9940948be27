//! Span-to-heading classification.

use super::config::OutlineConfig;
use super::profile::{weighted_size, SizeProfile};
use crate::model::{HeadingCandidate, HeadingLevel, Span};

/// Maps spans to heading levels against a fixed [`SizeProfile`].
#[derive(Debug, Clone)]
pub struct HeadingClassifier<'a> {
    profile: &'a SizeProfile,
    config: &'a OutlineConfig,
}

impl<'a> HeadingClassifier<'a> {
    pub fn new(profile: &'a SizeProfile, config: &'a OutlineConfig) -> Self {
        Self { profile, config }
    }

    /// Classify every span, keeping document order.
    pub fn classify_all(&self, spans: &[Span]) -> Vec<HeadingCandidate> {
        spans.iter().filter_map(|span| self.classify(span)).collect()
    }

    /// Classify a single span; `None` means "not a heading".
    pub fn classify(&self, span: &Span) -> Option<HeadingCandidate> {
        let text = span.text.trim();
        if !self.is_heading_text(text) {
            return None;
        }

        let level = self.level_for(weighted_size(span, self.config), span.is_bold)?;
        Some(HeadingCandidate::new(level, text, span.page))
    }

    /// Level for a size, checked H1 then H2 then H3; the first hit wins.
    ///
    /// H1 ignores boldness, H2 and H3 require it.
    pub fn level_for(&self, size: f32, is_bold: bool) -> Option<HeadingLevel> {
        if self.matches(size, self.profile.h1_size) {
            Some(HeadingLevel::H1)
        } else if is_bold && self.matches(size, self.profile.h2_size) {
            Some(HeadingLevel::H2)
        } else if is_bold && self.matches(size, self.profile.h3_size) {
            Some(HeadingLevel::H3)
        } else {
            None
        }
    }

    fn matches(&self, size: f32, threshold: f32) -> bool {
        // an unset (zero) threshold matches nothing
        threshold > 0.0 && (size - threshold).abs() < self.config.tolerance
    }

    fn is_heading_text(&self, text: &str) -> bool {
        text.chars().count() >= self.config.min_heading_chars
            && !text.chars().all(char::is_numeric)
    }
}
