//! Span collection from PDF content streams.
//!
//! Walks each page's text operators and emits one [`Span`] per text-showing
//! operator, with the effective font size (`Tf` size scaled by the text
//! matrix and the CTM) and the font's bold signals.

use std::collections::HashMap;

use unicode_normalization::UnicodeNormalization;

use super::backend::{decode_text_simple, BackendFontInfo, ContentOp, PageId, PdfBackend, PdfValue};
use super::options::{ErrorMode, ParseOptions};
use crate::error::{Error, Result};
use crate::model::Span;

/// Kerning adjustment (thousandths of an em) treated as a word gap in `TJ`.
const TJ_SPACE_THRESHOLD: f32 = 200.0;

/// Collects the ordered span stream of a document.
pub struct SpanCollector<'a, B: PdfBackend> {
    backend: &'a B,
    options: ParseOptions,
}

impl<'a, B: PdfBackend> SpanCollector<'a, B> {
    pub fn new(backend: &'a B) -> Self {
        Self::with_options(backend, ParseOptions::default())
    }

    pub fn with_options(backend: &'a B, options: ParseOptions) -> Self {
        Self { backend, options }
    }

    /// Collect spans of all selected pages, in page order.
    pub fn collect(&self) -> Result<Vec<Span>> {
        let mut spans = Vec::new();

        for (page_num, page_id) in self.backend.pages() {
            if !self.options.pages.includes(page_num) {
                continue;
            }

            match self.page_spans_by_id(page_num, page_id) {
                Ok(page_spans) => spans.extend(page_spans),
                Err(e) if self.options.error_mode == ErrorMode::Lenient => {
                    log::warn!("Failed to extract spans from page {}: {}", page_num, e);
                }
                Err(e) => return Err(e),
            }
        }

        log::debug!("Collected {} spans", spans.len());
        Ok(spans)
    }

    /// Collect spans of a single page.
    pub fn page_spans(&self, page_num: u32) -> Result<Vec<Span>> {
        let pages = self.backend.pages();
        let page_id = pages
            .get(&page_num)
            .ok_or(Error::PageOutOfRange(page_num, pages.len() as u32))?;
        self.page_spans_by_id(page_num, *page_id)
    }

    fn page_spans_by_id(&self, page_num: u32, page_id: PageId) -> Result<Vec<Span>> {
        let fonts: HashMap<Vec<u8>, BackendFontInfo> = self
            .backend
            .page_fonts(page_id)?
            .into_iter()
            .map(|f| (f.name.clone(), f))
            .collect();
        let ops = self.backend.page_operations(page_id)?;

        let mut walker = PageWalker {
            backend: self.backend,
            page_id,
            page_num,
            fonts: &fonts,
            state: TextState::default(),
            saved: Vec::new(),
            spans: Vec::new(),
        };
        for op in &ops {
            walker.apply(op);
        }
        Ok(walker.spans)
    }
}

/// Graphics state relevant to text placement.
///
/// `q`/`Q` save and restore everything except the text matrix, which only
/// lives inside a `BT`/`ET` block.
#[derive(Debug, Clone)]
struct TextState {
    font_key: Vec<u8>,
    font_size: f32,
    leading: f32,
    ctm: Matrix,
    matrix: Matrix,
    in_text: bool,
}

impl Default for TextState {
    fn default() -> Self {
        Self {
            font_key: Vec::new(),
            font_size: 12.0,
            leading: 0.0,
            ctm: Matrix::default(),
            matrix: Matrix::default(),
            in_text: false,
        }
    }
}

struct PageWalker<'a, B: PdfBackend> {
    backend: &'a B,
    page_id: PageId,
    page_num: u32,
    fonts: &'a HashMap<Vec<u8>, BackendFontInfo>,
    state: TextState,
    saved: Vec<TextState>,
    spans: Vec<Span>,
}

impl<B: PdfBackend> PageWalker<'_, B> {
    fn apply(&mut self, op: &ContentOp) {
        match op.operator.as_str() {
            "q" => self.saved.push(self.state.clone()),
            "Q" => {
                if let Some(saved) = self.saved.pop() {
                    let matrix = std::mem::take(&mut self.state.matrix);
                    let in_text = self.state.in_text;
                    self.state = TextState {
                        matrix,
                        in_text,
                        ..saved
                    };
                }
            }
            "cm" => {
                if let Some(m) = Matrix::from_operands(op) {
                    self.state.ctm = m.multiply(&self.state.ctm);
                }
            }
            "BT" => {
                self.state.in_text = true;
                self.state.matrix = Matrix::default();
            }
            "ET" => self.state.in_text = false,
            "Tf" => {
                if let Some(PdfValue::Name(name)) = op.operands.first() {
                    self.state.font_key = name.clone();
                }
                self.state.font_size = op.number(1).unwrap_or(12.0);
            }
            "TL" => self.state.leading = op.number(0).unwrap_or(0.0),
            "Td" => {
                let (tx, ty) = (op.number(0).unwrap_or(0.0), op.number(1).unwrap_or(0.0));
                self.state.matrix.translate(tx, ty);
            }
            "TD" => {
                let (tx, ty) = (op.number(0).unwrap_or(0.0), op.number(1).unwrap_or(0.0));
                self.state.leading = -ty;
                self.state.matrix.translate(tx, ty);
            }
            "Tm" => {
                if let Some(m) = Matrix::from_operands(op) {
                    self.state.matrix = m;
                }
            }
            "T*" => self.next_line(),
            "Tj" => {
                if let Some(PdfValue::Str(bytes)) = op.operands.first() {
                    let text = self.decode(bytes);
                    self.emit(text);
                }
            }
            "TJ" => {
                if let Some(PdfValue::Array(items)) = op.operands.first() {
                    let text = self.decode_array(items);
                    self.emit(text);
                }
            }
            "'" => {
                self.next_line();
                if let Some(PdfValue::Str(bytes)) = op.operands.first() {
                    let text = self.decode(bytes);
                    self.emit(text);
                }
            }
            "\"" => {
                self.next_line();
                if let Some(PdfValue::Str(bytes)) = op.operands.get(2) {
                    let text = self.decode(bytes);
                    self.emit(text);
                }
            }
            _ => {}
        }
    }

    fn next_line(&mut self) {
        let leading = if self.state.leading != 0.0 {
            self.state.leading
        } else {
            self.state.font_size
        };
        self.state.matrix.translate(0.0, -leading);
    }

    fn decode(&self, bytes: &[u8]) -> String {
        if self.state.font_key.is_empty() {
            return decode_text_simple(bytes);
        }
        self.backend
            .decode_text(self.page_id, &self.state.font_key, bytes)
    }

    /// `TJ` arrays mix strings with kerning; large negative kerning is a word gap.
    fn decode_array(&self, items: &[PdfValue]) -> String {
        let mut combined = String::new();
        for item in items {
            match item {
                PdfValue::Str(bytes) => combined.push_str(&self.decode(bytes)),
                other => {
                    let gap = other.as_number().map(|n| -n).unwrap_or(0.0);
                    let ends_with_space = combined.ends_with(char::is_whitespace);
                    if gap > TJ_SPACE_THRESHOLD && !combined.is_empty() && !ends_with_space {
                        combined.push(' ');
                    }
                }
            }
        }
        combined
    }

    fn emit(&mut self, raw: String) {
        if !self.state.in_text {
            return;
        }

        let text: String = raw.nfc().collect();
        let text = text.trim();
        if text.is_empty() {
            return;
        }

        let (font_name, force_bold) = match self.fonts.get(&self.state.font_key) {
            Some(info) => (info.base_font.clone(), info.force_bold()),
            None => (String::from_utf8_lossy(&self.state.font_key).to_string(), false),
        };

        // negative Tf sizes mirror glyphs; the rendered size is the magnitude
        let rendering = self.state.matrix.multiply(&self.state.ctm);
        let size = self.state.font_size.abs() * rendering.scale();
        self.spans
            .push(Span::new(text, size, font_name, self.page_num).with_bold(force_bold));
    }
}

/// Affine matrix `[a b c d e f]`, used for both the CTM and the text matrix.
#[derive(Debug, Clone, PartialEq)]
struct Matrix {
    a: f32,
    b: f32,
    c: f32,
    d: f32,
    e: f32,
    f: f32,
}

impl Default for Matrix {
    fn default() -> Self {
        Self {
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 1.0,
            e: 0.0,
            f: 0.0,
        }
    }
}

impl Matrix {
    /// Six numeric operands of `cm` or `Tm`.
    fn from_operands(op: &ContentOp) -> Option<Self> {
        Some(Self {
            a: op.number(0)?,
            b: op.number(1)?,
            c: op.number(2)?,
            d: op.number(3)?,
            e: op.number(4)?,
            f: op.number(5)?,
        })
    }

    /// `self × other`: apply `self` first, then `other`.
    fn multiply(&self, other: &Matrix) -> Matrix {
        Matrix {
            a: self.a * other.a + self.b * other.c,
            b: self.a * other.b + self.b * other.d,
            c: self.c * other.a + self.d * other.c,
            d: self.c * other.b + self.d * other.d,
            e: self.e * other.a + self.f * other.c + other.e,
            f: self.e * other.b + self.f * other.d + other.f,
        }
    }

    fn translate(&mut self, tx: f32, ty: f32) {
        self.e += tx * self.a + ty * self.c;
        self.f += tx * self.b + ty * self.d;
    }

    /// Vertical scale factor applied to the font size.
    fn scale(&self) -> f32 {
        (self.c * self.c + self.d * self.d).sqrt()
    }
}
