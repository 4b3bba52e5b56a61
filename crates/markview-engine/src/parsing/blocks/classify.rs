use crate::parsing::lines::LineRef;

use super::kinds::{BlockQuote, CodeFence, Heading, ListMarker, TableRow, ThematicBreak};

/// What a single line looks like on its own, ignoring surrounding lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Whitespace only.
    Blank,
    /// Starts with a backtick fence marker.
    Fence { language: Option<&'a str> },
    /// `#`..`######` followed by a space.
    Heading { level: u8, text: &'a str },
    /// `---`, `***` or `___` (three or more).
    ThematicBreak,
    /// Starts with `|` after trimming.
    TableRow,
    /// Starts with `> `.
    BlockQuote { text: &'a str },
    /// Ordered or bullet list item.
    ListItem { ordered: bool, text: &'a str },
    /// Anything else: paragraph text, trimmed.
    Text { text: &'a str },
}

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context. The builder decides what a
/// line means inside an open fence or table.
#[derive(Debug, Clone, Copy)]
pub struct LineClass<'a> {
    /// Zero-based line index in the document.
    pub index: usize,
    /// The line exactly as written (without terminator).
    pub text: &'a str,
    /// Construct the line opens or continues, by precedence.
    pub kind: LineKind<'a>,
}

/// Classifies individual lines for the block parsing phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line, testing constructs in precedence order.
    ///
    /// Fence beats blank, blank beats heading, then rule, table row,
    /// blockquote, list item, and finally plain text.
    pub fn classify<'a>(&self, lr: &LineRef<'a>) -> LineClass<'a> {
        let line = lr.text;
        let kind = if let Some(sig) = CodeFence::sig(line) {
            LineKind::Fence {
                language: sig.language,
            }
        } else if line.trim().is_empty() {
            LineKind::Blank
        } else if let Some((level, text)) = Heading::parse(line) {
            LineKind::Heading { level, text }
        } else if ThematicBreak::matches(line) {
            LineKind::ThematicBreak
        } else if TableRow::matches(line) {
            LineKind::TableRow
        } else if let Some(text) = BlockQuote::strip(line) {
            LineKind::BlockQuote { text: text.trim() }
        } else if let Some(item) = ListMarker::parse(line) {
            LineKind::ListItem {
                ordered: item.ordered,
                text: item.text,
            }
        } else {
            LineKind::Text { text: line.trim() }
        };

        LineClass {
            index: lr.index,
            text: line,
            kind,
        }
    }
}
