//! Parsers for the two string-valued geometry attributes found in symbol
//! templates: path data (`d`) and transform literals (`transform`).
//!
//! Path data is split into closed subpaths whose text is normalized to
//! single-space separated tokens, so the same outline written by two
//! templates compares equal as a string.

pub mod error;
mod path;
mod transform;

// --- Public API ---
pub use error::{PathDataError, TransformParseError};
pub use path::{PathToken, parse_subpaths, split_subpaths, tokenize};
pub use transform::{Matrix, parse_matrix};
