//! Outline construction from styled spans.
//!
//! The pipeline is a straight line:
//!
//! ```text
//! spans -> SizeProfile -> HeadingClassifier -> assemble -> resolve_title
//! ```
//!
//! Every stage is a pure function of its input; nothing here can fail.
//! An empty span list simply produces an empty outline titled with the
//! fallback name.

mod classify;
mod config;
mod hierarchy;
mod profile;
mod title;

pub use classify::HeadingClassifier;
pub use config::OutlineConfig;
pub use hierarchy::assemble;
pub use profile::{weighted_size, SizeProfile};
pub use title::resolve_title;

use crate::model::{HeadingCandidate, OutlineDocument, Span};

/// Build an outline document from a document's spans.
///
/// `fallback_title` is used when no H1 heading is found (typically the
/// source file name).
pub fn build_outline(spans: &[Span], fallback_title: &str, config: &OutlineConfig) -> OutlineDocument {
    let profile = SizeProfile::from_spans(spans, config);
    build_outline_with_profile(spans, &profile, fallback_title, config)
}

/// Build an outline document against an already computed profile.
pub fn build_outline_with_profile(
    spans: &[Span],
    profile: &SizeProfile,
    fallback_title: &str,
    config: &OutlineConfig,
) -> OutlineDocument {
    let candidates = detect_headings(spans, profile, config);
    let title = resolve_title(&candidates, fallback_title);

    if candidates.is_empty() {
        log::debug!("No headings detected in {} spans", spans.len());
    }

    OutlineDocument::new(title, assemble(candidates))
}

/// Classify spans into heading candidates, in document order.
pub fn detect_headings(
    spans: &[Span],
    profile: &SizeProfile,
    config: &OutlineConfig,
) -> Vec<HeadingCandidate> {
    HeadingClassifier::new(profile, config).classify_all(spans)
}
