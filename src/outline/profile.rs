//! Document-wide font size profile.

use super::config::OutlineConfig;
use crate::model::Span;

/// Ranked distinct sizes of a document and the three heading thresholds.
///
/// Thresholds are always non-increasing: `h1_size >= h2_size >= h3_size`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SizeProfile {
    /// Distinct (possibly weighted) sizes, largest first
    pub sizes: Vec<f32>,
    pub h1_size: f32,
    pub h2_size: f32,
    pub h3_size: f32,
}

impl SizeProfile {
    /// Build a profile from explicit thresholds.
    pub fn new(h1_size: f32, h2_size: f32, h3_size: f32) -> Self {
        Self {
            sizes: vec![h1_size, h2_size, h3_size],
            h1_size,
            h2_size,
            h3_size,
        }
    }

    /// Profile a span list.
    pub fn from_spans(spans: &[Span], config: &OutlineConfig) -> Self {
        Self::from_sizes(spans.iter().map(|s| weighted_size(s, config)), config)
    }

    /// Profile a set of observed sizes.
    ///
    /// Missing lower thresholds cascade from the next higher one by
    /// `fallback_ratio`; with no sizes at all every threshold is 0.
    pub fn from_sizes(sizes: impl IntoIterator<Item = f32>, config: &OutlineConfig) -> Self {
        let mut sizes: Vec<f32> = sizes.into_iter().filter(|s| s.is_finite()).collect();
        sizes.sort_by(|a, b| b.total_cmp(a));
        sizes.dedup();

        let h1_size = sizes.first().copied().unwrap_or(0.0);
        let h2_size = sizes
            .get(1)
            .copied()
            .unwrap_or(h1_size * config.fallback_ratio);
        let h3_size = sizes
            .get(2)
            .copied()
            .unwrap_or(h2_size * config.fallback_ratio);

        log::debug!(
            "Size profile: {} distinct sizes, H1={} H2={} H3={}",
            sizes.len(),
            h1_size,
            h2_size,
            h3_size
        );

        Self {
            sizes,
            h1_size,
            h2_size,
            h3_size,
        }
    }

    /// Thresholds in classification order.
    pub fn thresholds(&self) -> [f32; 3] {
        [self.h1_size, self.h2_size, self.h3_size]
    }

    /// True when no sizes were observed.
    pub fn is_degenerate(&self) -> bool {
        self.h1_size <= 0.0
    }
}

/// Rendered size, boosted by style when weighting is enabled.
pub fn weighted_size(span: &Span, config: &OutlineConfig) -> f32 {
    if !config.style_weighting {
        return span.size;
    }

    let mut boost = 1.0;
    if span.is_bold {
        boost += config.bold_boost;
    }
    if span.is_all_caps && span.text.trim().chars().count() >= config.min_heading_chars {
        boost += config.caps_boost;
    }
    if span.is_heavy_font() {
        boost += config.heavy_boost;
    }
    span.size * boost
}
