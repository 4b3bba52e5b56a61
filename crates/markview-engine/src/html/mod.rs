//! # HTML Output
//!
//! Serializes parsed blocks into an HTML fragment, and optionally a full page.
//!
//! ## Modules
//!
//! - **`fragment`**: `write_fragment()` turns `BlockNode`s into the fragment
//! - **`document`**: `render_document()` wraps the fragment with a themed stylesheet
//!
//! ## Output Contract
//!
//! Only these elements are emitted: `h1`..`h6`, `p`, `br`, `hr`, `blockquote`,
//! `pre`, `code`, `ul`, `ol`, `li`, `table`, `thead`, `tbody`, `tr`, `th`, `td`,
//! `a`, `strong`, `em`, `del`. Blocks are concatenated without separators.

pub mod document;
pub mod fragment;

pub use document::{render_document, stylesheet};
pub use fragment::write_fragment;

use crate::parsing::parse_document;

/// Renders a Markdown document to a sanitized HTML fragment.
///
/// Total over all strings; the empty document renders to the empty string.
pub fn render(doc: &str) -> String {
    let parsed = parse_document(doc);
    write_fragment(&parsed.blocks)
}
