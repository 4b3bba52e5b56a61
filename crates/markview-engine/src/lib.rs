pub mod highlight;
pub mod html;
pub mod parsing;
pub mod theme;

// Re-export key types for easier usage
pub use highlight::{HighlightRule, HighlightSpan, HighlightStyle, Highlighter, highlight};
pub use html::{render, render_document};
pub use parsing::{ParsedDoc, inline::format_inline, parse_document};
pub use theme::{Color, EditorTheme, PreviewTheme, TextAttributes};
