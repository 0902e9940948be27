//! PDF span extraction.
//!
//! [`SpanCollector`] turns a document into the ordered stream of styled
//! [`Span`](crate::model::Span)s consumed by the outline builder.

mod backend;
mod options;
mod spans;

pub use backend::{
    decode_text_simple, BackendFontInfo, ContentOp, LopdfBackend, PageId, PdfBackend, PdfValue,
    FONT_FLAG_FORCE_BOLD,
};
pub use options::{ErrorMode, PageSelection, ParseOptions};
pub use spans::SpanCollector;
