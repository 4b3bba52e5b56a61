use std::sync::OnceLock;

use regex::{Captures, Regex};

use super::{
    escape::escape_text,
    types::{InlineRun, InlineStyle},
};

/// Brackets a stashed code span index while later passes run.
///
/// Noncharacters never appear in ordinary text; if the input does contain one
/// the code spans are left in place instead of stashed.
const STASH_OPEN: char = '\u{FDD0}';
const STASH_CLOSE: char = '\u{FDD1}';

/// One substitution pass of the inline formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlinePass {
    CodeSpan,
    Bold,
    Italic,
    Strikethrough,
    Link,
}

impl InlinePass {
    /// The fixed pass order. It is the only precedence rule for overlapping markers.
    pub const ORDER: [InlinePass; 5] = [
        InlinePass::CodeSpan,
        InlinePass::Bold,
        InlinePass::Italic,
        InlinePass::Strikethrough,
        InlinePass::Link,
    ];

    fn regex(self) -> &'static Regex {
        static CODE_SPAN: OnceLock<Regex> = OnceLock::new();
        static BOLD: OnceLock<Regex> = OnceLock::new();
        static ITALIC: OnceLock<Regex> = OnceLock::new();
        static STRIKETHROUGH: OnceLock<Regex> = OnceLock::new();
        static LINK: OnceLock<Regex> = OnceLock::new();

        match self {
            InlinePass::CodeSpan => CODE_SPAN
                .get_or_init(|| Regex::new(r"`([^`]+)`").expect("Invalid code span regex")),
            // Bold content may hold complete `*italic*` groups but no stray `*`.
            InlinePass::Bold => BOLD.get_or_init(|| {
                Regex::new(r"\*\*((?:[^*]|\*[^*]+\*)+?)\*\*").expect("Invalid bold regex")
            }),
            InlinePass::Italic => {
                ITALIC.get_or_init(|| Regex::new(r"\*([^*]+)\*").expect("Invalid italic regex"))
            }
            InlinePass::Strikethrough => STRIKETHROUGH
                .get_or_init(|| Regex::new(r"~~([^~]+)~~").expect("Invalid strikethrough regex")),
            InlinePass::Link => LINK.get_or_init(|| {
                Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("Invalid link regex")
            }),
        }
    }

    fn run<'c>(self, caps: &'c Captures<'_>) -> InlineRun<'c> {
        let inner = caps.get(1).map_or("", |m| m.as_str());
        let style = match self {
            InlinePass::CodeSpan => InlineStyle::Code,
            InlinePass::Bold => InlineStyle::Bold,
            InlinePass::Italic => InlineStyle::Italic,
            InlinePass::Strikethrough => InlineStyle::Strikethrough,
            InlinePass::Link => InlineStyle::Link {
                url: caps.get(2).map_or("", |m| m.as_str()),
            },
        };
        InlineRun::new(style, inner)
    }

    /// Applies this pass to the whole string, replacing every match.
    pub fn apply(self, text: &str) -> String {
        self.regex()
            .replace_all(text, |caps: &Captures<'_>| self.run(caps).to_html())
            .into_owned()
    }
}

/// Holds rendered code spans out of reach of the later passes.
struct CodeStash {
    enabled: bool,
    spans: Vec<String>,
}

impl CodeStash {
    fn for_text(text: &str) -> Self {
        Self {
            enabled: !text.contains([STASH_OPEN, STASH_CLOSE]),
            spans: vec![],
        }
    }

    /// Runs the code span pass, replacing each span with a stash marker.
    fn stash(&mut self, text: &str) -> String {
        if !self.enabled {
            return InlinePass::CodeSpan.apply(text);
        }
        InlinePass::CodeSpan
            .regex()
            .replace_all(text, |caps: &Captures<'_>| {
                let index = self.spans.len();
                self.spans.push(InlinePass::CodeSpan.run(caps).to_html());
                format!("{STASH_OPEN}{index}{STASH_CLOSE}")
            })
            .into_owned()
    }

    fn restore(&self, text: &str) -> String {
        if self.spans.is_empty() {
            return text.to_string();
        }
        let mut out = String::with_capacity(text.len());
        let mut rest = text;
        while let Some((before, after)) = rest.split_once(STASH_OPEN) {
            out.push_str(before);
            let (index, tail) = after.split_once(STASH_CLOSE).unwrap_or((after, ""));
            if let Some(code) = index.parse::<usize>().ok().and_then(|i| self.spans.get(i)) {
                out.push_str(code);
            }
            rest = tail;
        }
        out.push_str(rest);
        out
    }
}

/// Formats one run of block text into an HTML fragment.
///
/// Escapes `&`, `<`, `>` first, then applies [`InlinePass::ORDER`]: code
/// spans, bold, italic, strikethrough, links. Each pass works on the output
/// of the previous one; code span content is hidden from the later passes.
/// Unmatched markers are left as literal text.
pub fn format_inline(text: &str) -> String {
    let escaped = escape_text(text);
    let mut stash = CodeStash::for_text(&escaped);
    let mut out = stash.stash(&escaped);
    // ORDER[0] is the code span pass, already applied by the stash.
    for pass in &InlinePass::ORDER[1..] {
        out = pass.apply(&out);
    }
    stash.restore(&out)
}
