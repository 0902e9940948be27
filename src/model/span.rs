//! Styled text spans, the input of the outline builder.

use serde::{Deserialize, Serialize};

/// One run of extracted text with its font metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Span {
    /// The text content (already trimmed by the collector)
    pub text: String,
    /// Rendered font size in points
    pub size: f32,
    /// Font name (e.g., "Helvetica-Bold")
    pub font_name: String,
    /// Whether the font is bold, by name or by font flags
    pub is_bold: bool,
    /// Whether every letter of the text is upper-case
    pub is_all_caps: bool,
    /// 1-based page number
    pub page: u32,
}

impl Span {
    /// Create a span, deriving boldness from the font name and
    /// capitalization from the text.
    pub fn new(text: impl Into<String>, size: f32, font_name: impl Into<String>, page: u32) -> Self {
        let text = text.into();
        let font_name = font_name.into();
        let is_bold = font_name_is_bold(&font_name);
        let is_all_caps = is_all_caps(&text);

        Self {
            text,
            size,
            font_name,
            is_bold,
            is_all_caps,
            page,
        }
    }

    /// Mark the span bold (e.g., from a font descriptor flag).
    pub fn with_bold(mut self, bold: bool) -> Self {
        self.is_bold = self.is_bold || bold;
        self
    }

    /// Whether the font name carries a heavy-weight marker.
    pub fn is_heavy_font(&self) -> bool {
        let name = self.font_name.to_lowercase();
        name.contains("black") || name.contains("headline")
    }
}

/// Bold detection by font name.
pub fn font_name_is_bold(font_name: &str) -> bool {
    let name = font_name.to_lowercase();
    name.contains("bold") || name.contains("black") || name.contains("heavy")
}

/// True when the text has at least one letter and all letters are upper-case.
pub fn is_all_caps(text: &str) -> bool {
    let mut letters = text.chars().filter(|c| c.is_alphabetic()).peekable();
    letters.peek().is_some() && letters.all(|c| c.is_uppercase())
}
