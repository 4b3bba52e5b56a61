//! # Inline Formatting
//!
//! Pattern passes over already-escaped block text.
//!
//! ## Architecture
//!
//! Inline formatting is separate from block parsing and runs on the content
//! of every inline-eligible block (paragraph lines, headings, blockquotes,
//! list items, table cells). Code block content never reaches it.
//!
//! The formatter escapes `&`, `<`, `>` once, then applies regex passes in a
//! fixed order: code spans, bold, italic, strikethrough, links. The pass order
//! is the only precedence rule, so `**a *b* c**` is bold around italic and
//! `*a**b**c*` is italic around bold.
//!
//! ## Modules
//!
//! - **`types`**: `InlineRun`/`InlineStyle` and their HTML serialization
//! - **`escape`**: the single escaping step
//! - **`passes`**: `InlinePass` and the `format_inline()` entry point
//!
//! ## Raw Zone Precedence
//!
//! Code spans run first and their content is stashed until the other passes
//! finish: `` `**x**` `` stays literal inside `<code>`.

pub mod escape;
pub mod passes;
pub mod types;

pub use escape::escape_text;
pub use passes::{InlinePass, format_inline};
pub use types::{InlineRun, InlineStyle};
