//! Output rendering for outline documents.

mod json;

pub use json::{read_outline, to_json, write_outline, JsonFormat};
