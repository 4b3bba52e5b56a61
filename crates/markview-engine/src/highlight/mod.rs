//! # Live Highlighting
//!
//! Stateless, line-local decoration for an editor.
//!
//! Every call looks at one line only and re-derives single-line patterns
//! (heading line, bold, italic, code span, link, list marker). It has no idea
//! whether the line sits inside a fenced code block or a table; it is a
//! best-effort approximation for visual feedback, never used for output.
//!
//! ## Modules
//!
//! - **`types`**: `HighlightSpan` and the `HighlightStyle` tags
//! - **`rules`**: `HighlightRule`, a closed set of single-line matchers
//! - **`cursor`**: `Cursor` for byte-by-byte scanning

pub mod cursor;
pub mod rules;
pub mod types;

pub use rules::HighlightRule;
pub use types::{HighlightSpan, HighlightStyle};

/// An immutable, ordered rule set.
///
/// The rules are fixed at construction; highlighters for different open
/// documents never share or mutate state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlighter {
    rules: Box<[HighlightRule]>,
}

impl Highlighter {
    /// Highlighter with all rules in [`HighlightRule::DEFAULT_ORDER`].
    pub fn new() -> Self {
        Self::with_rules(HighlightRule::DEFAULT_ORDER)
    }

    /// Highlighter applying the given rules, earlier rules winning collisions.
    pub fn with_rules(rules: impl IntoIterator<Item = HighlightRule>) -> Self {
        let rules: Box<[HighlightRule]> = rules.into_iter().collect();
        log::debug!("highlighter built with rules {rules:?}");
        Self { rules }
    }

    pub fn rules(&self) -> &[HighlightRule] {
        &self.rules
    }

    /// Returns the spans for one line, sorted by start offset.
    pub fn highlight(&self, line: &str) -> Vec<HighlightSpan> {
        apply_rules(&self.rules, line)
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

/// Highlights one line with the default rule order.
pub fn highlight(line: &str) -> Vec<HighlightSpan> {
    apply_rules(&HighlightRule::DEFAULT_ORDER, line)
}

/// Runs each rule in turn. A match overlapping a span accepted from an
/// earlier rule is dropped.
fn apply_rules(rules: &[HighlightRule], line: &str) -> Vec<HighlightSpan> {
    let line = line.trim_end_matches(['\r', '\n']);
    let mut accepted: Vec<HighlightSpan> = vec![];

    for &rule in rules {
        for span in rule.scan(line) {
            if accepted.iter().any(|a| a.span().overlaps(span)) {
                continue;
            }
            accepted.push(HighlightSpan::new(span, rule.style()));
        }
    }

    accepted.sort_by_key(|s| s.start);
    accepted
}
