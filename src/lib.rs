//! # pdf-outline
//!
//! Heading outline extraction for PDF documents.
//!
//! Text spans are read from each page together with their font size and
//! weight; the largest sizes become the H1/H2/H3 thresholds, spans close to
//! a threshold are classified as headings, and the headings are folded into
//! a nested outline titled by the first H1.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pdf_outline::{extract_outline, render, JsonFormat};
//!
//! fn main() -> pdf_outline::Result<()> {
//!     let outline = extract_outline("report.pdf")?;
//!     println!("{}", render::to_json(&outline, JsonFormat::Pretty)?);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Size-based heading detection** with optional style weighting
//! - **Batch processing**: whole directories in parallel via Rayon
//! - **Evaluation**: precision/recall/F1 against ground-truth outlines
//! - **Ranking**: persona relevance scoring of extracted headings

pub mod batch;
pub mod detect;
pub mod error;
pub mod eval;
pub mod model;
pub mod outline;
pub mod parser;
pub mod rank;
pub mod render;

// Re-export commonly used types
pub use batch::{process_directory, BatchOptions, BatchReport};
pub use detect::{has_pdf_extension, sniff_bytes, sniff_path, PdfVersion};
pub use error::{Error, Result};
pub use eval::{
    compare_documents, evaluate_directory, evaluate_pair, flatten_outline, match_headings,
    EvaluationReport, FlatHeading, MatchResult,
};
pub use model::{HeadingCandidate, HeadingLevel, OutlineDocument, OutlineNode, Span};
pub use outline::{build_outline, OutlineConfig, SizeProfile};
pub use parser::{ErrorMode, LopdfBackend, PageSelection, ParseOptions, SpanCollector};
pub use rank::{rank_files, rank_headings, LexicalScorer, ScoredHeading, SimilarityScorer};
pub use render::JsonFormat;

use std::path::Path;

/// Extract the outline of a PDF file with default settings.
///
/// # Example
///
/// ```no_run
/// use pdf_outline::extract_outline;
///
/// let outline = extract_outline("report.pdf").unwrap();
/// println!("{}: {} headings", outline.title, outline.total_headings());
/// ```
pub fn extract_outline<P: AsRef<Path>>(path: P) -> Result<OutlineDocument> {
    Outliner::new().extract(path)
}

/// Extract the outline of an in-memory PDF.
///
/// `name` becomes the title when the document has no H1 heading.
pub fn extract_outline_bytes(data: &[u8], name: &str) -> Result<OutlineDocument> {
    Outliner::new().extract_bytes(data, name)
}

/// Collect the styled text spans of a PDF file, in reading order.
pub fn extract_spans<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Vec<Span>> {
    let path = path.as_ref();
    sniff_path(path)?;
    let backend = LopdfBackend::load_file(path)?;
    SpanCollector::with_options(&backend, options).collect()
}

/// Builder for outline extraction.
///
/// # Example
///
/// ```no_run
/// use pdf_outline::{Outliner, PageSelection};
///
/// let outline = Outliner::new()
///     .weighted()
///     .lenient()
///     .with_pages(PageSelection::Range(1..=10))
///     .extract("report.pdf")?;
/// # Ok::<(), pdf_outline::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Outliner {
    parse_options: ParseOptions,
    config: OutlineConfig,
}

impl Outliner {
    /// Create a builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the heading detection config.
    pub fn with_config(mut self, config: OutlineConfig) -> Self {
        self.config = config;
        self
    }

    /// Enable style-weighted sizes.
    pub fn weighted(mut self) -> Self {
        self.config = self.config.weighted();
        self
    }

    /// Skip unreadable pages instead of failing.
    pub fn lenient(mut self) -> Self {
        self.parse_options = self.parse_options.lenient();
        self
    }

    /// Restrict extraction to some pages.
    pub fn with_pages(mut self, pages: PageSelection) -> Self {
        self.parse_options = self.parse_options.with_pages(pages);
        self
    }

    /// Heading detection config in use.
    pub fn config(&self) -> &OutlineConfig {
        &self.config
    }

    /// Extract the outline of a PDF file.
    ///
    /// The file name is the fallback title.
    pub fn extract<P: AsRef<Path>>(&self, path: P) -> Result<OutlineDocument> {
        let path = path.as_ref();
        let version = sniff_path(path)?;
        log::debug!("Loading {} ({})", path.display(), version);

        let backend = LopdfBackend::load_file(path)?;
        let spans = SpanCollector::with_options(&backend, self.parse_options.clone()).collect()?;
        Ok(self.build_from_spans(&spans, &fallback_name(path)))
    }

    /// Extract the outline of an in-memory PDF.
    pub fn extract_bytes(&self, data: &[u8], name: &str) -> Result<OutlineDocument> {
        sniff_bytes(data)?;
        let backend = LopdfBackend::load_bytes(data)?;
        let spans = SpanCollector::with_options(&backend, self.parse_options.clone()).collect()?;
        Ok(self.build_from_spans(&spans, name))
    }

    /// Build an outline from spans that were collected elsewhere.
    pub fn build_from_spans(&self, spans: &[Span], name: &str) -> OutlineDocument {
        let doc = build_outline(spans, name, &self.config);
        log::debug!(
            "{}: {} spans, {} headings",
            name,
            spans.len(),
            doc.total_headings()
        );
        doc
    }
}

fn fallback_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
