//! Heuristic constants for heading detection.

/// Tunable thresholds and boosts used by the profiler and classifier.
///
/// Defaults: tolerance 0.5, boosts 0.2 (bold) / 0.1 (caps) / 0.2 (heavy),
/// fallback ratio 0.9, weighting off.
#[derive(Debug, Clone, PartialEq)]
pub struct OutlineConfig {
    /// Maximum distance (exclusive) between a span size and a threshold
    pub tolerance: f32,

    /// Apply style boosts to rendered sizes before profiling/classifying
    pub style_weighting: bool,

    /// Boost added for bold spans
    pub bold_boost: f32,

    /// Boost added for upper-case spans of at least `min_heading_chars`
    pub caps_boost: f32,

    /// Boost added for "black"/"headline" font names
    pub heavy_boost: f32,

    /// Minimum number of characters in a heading's trimmed text
    pub min_heading_chars: usize,

    /// Ratio used to synthesize missing lower thresholds
    pub fallback_ratio: f32,
}

impl OutlineConfig {
    /// Create a config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the size tolerance.
    pub fn with_tolerance(mut self, tolerance: f32) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Enable or disable style weighting.
    pub fn with_style_weighting(mut self, enabled: bool) -> Self {
        self.style_weighting = enabled;
        self
    }

    /// Enable style weighting.
    pub fn weighted(self) -> Self {
        self.with_style_weighting(true)
    }

    /// Set the bold, caps and heavy-font boosts.
    pub fn with_boosts(mut self, bold: f32, caps: f32, heavy: f32) -> Self {
        self.bold_boost = bold;
        self.caps_boost = caps;
        self.heavy_boost = heavy;
        self
    }

    /// Set the minimum heading length.
    pub fn with_min_heading_chars(mut self, chars: usize) -> Self {
        self.min_heading_chars = chars;
        self
    }

    /// Set the fallback ratio for missing thresholds.
    pub fn with_fallback_ratio(mut self, ratio: f32) -> Self {
        self.fallback_ratio = ratio;
        self
    }
}

impl Default for OutlineConfig {
    fn default() -> Self {
        Self {
            tolerance: 0.5,
            style_weighting: false,
            bold_boost: 0.2,
            caps_boost: 0.1,
            heavy_boost: 0.2,
            min_heading_chars: 3,
            fallback_ratio: 0.9,
        }
    }
}
