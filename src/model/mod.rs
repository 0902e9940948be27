//! Data model shared by the outline builder and the evaluator.
//!
//! Spans come in, heading candidates are derived from them, and the
//! candidates are folded into an [`OutlineDocument`], which is the only
//! type that is persisted.

mod outline;
mod span;

pub use outline::{HeadingCandidate, HeadingLevel, OutlineDocument, OutlineNode};
pub use span::{font_name_is_bold, is_all_caps, Span};
