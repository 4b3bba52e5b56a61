use serde::{Deserialize, Serialize};

use crate::parsing::span::Span;

/// Style tag attached to a highlight span.
///
/// The caller maps each tag to concrete visual attributes. New tags may be
/// added, so matches outside this crate need a wildcard arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum HighlightStyle {
    Header,
    Bold,
    Italic,
    Code,
    Link,
    List,
}

impl HighlightStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            HighlightStyle::Header => "header",
            HighlightStyle::Bold => "bold",
            HighlightStyle::Italic => "italic",
            HighlightStyle::Code => "code",
            HighlightStyle::Link => "link",
            HighlightStyle::List => "list",
        }
    }
}

impl std::fmt::Display for HighlightStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One recognized pattern on a line: `len` bytes starting at byte `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HighlightSpan {
    pub start: usize,
    pub len: usize,
    pub style: HighlightStyle,
}

impl HighlightSpan {
    pub fn new(span: Span, style: HighlightStyle) -> Self {
        Self {
            start: span.start,
            len: span.len(),
            style,
        }
    }

    /// Exclusive end offset.
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    pub fn span(&self) -> Span {
        Span::new(self.start, self.end())
    }
}
