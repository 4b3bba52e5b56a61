use crate::parsing::span::Span;

use super::{cursor::Cursor, types::HighlightStyle};

/// A single-line pattern recognized by the live highlighter.
///
/// Each rule scans a line left to right and reports non-overlapping matches.
/// Rules never look at other lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HighlightRule {
    /// `#`..`######`, whitespace, then the rest of the line.
    Heading,
    /// `**…**` or `__…__`.
    Bold,
    /// `*…*` or `_…_`; the closing `_` must not be followed by another `_`.
    Italic,
    /// `` `…` ``
    InlineCode,
    /// `[…](…)`
    Link,
    /// Optional indent, then `-`, `*`, `+` or `digits.`, then one whitespace.
    ListMarker,
}

impl HighlightRule {
    /// Rules in the order they are applied by default.
    pub const DEFAULT_ORDER: [HighlightRule; 6] = [
        HighlightRule::Heading,
        HighlightRule::Bold,
        HighlightRule::Italic,
        HighlightRule::InlineCode,
        HighlightRule::Link,
        HighlightRule::ListMarker,
    ];

    const MAX_HEADING_LEVEL: usize = 6;

    pub fn style(self) -> HighlightStyle {
        match self {
            HighlightRule::Heading => HighlightStyle::Header,
            HighlightRule::Bold => HighlightStyle::Bold,
            HighlightRule::Italic => HighlightStyle::Italic,
            HighlightRule::InlineCode => HighlightStyle::Code,
            HighlightRule::Link => HighlightStyle::Link,
            HighlightRule::ListMarker => HighlightStyle::List,
        }
    }

    /// Anchored rules only match at the start of the line.
    fn is_anchored(self) -> bool {
        matches!(self, HighlightRule::Heading | HighlightRule::ListMarker)
    }

    /// Returns every match of this rule on the line, in order.
    pub fn scan(self, line: &str) -> Vec<Span> {
        let mut cur = Cursor::new(line);
        let mut out = vec![];

        if self.is_anchored() {
            if let Some(end) = self.match_at(&cur) {
                out.push(Span::new(0, end));
            }
            return out;
        }

        while !cur.eof() {
            match self.match_at(&cur) {
                Some(end) => {
                    out.push(Span::new(cur.pos(), end));
                    cur.bump_n(end - cur.pos());
                }
                None => {
                    cur.bump();
                }
            }
        }
        out
    }

    /// Tries to match at the cursor, returning the exclusive end offset.
    fn match_at(self, cur: &Cursor<'_>) -> Option<usize> {
        match self {
            HighlightRule::Heading => match_heading(cur),
            HighlightRule::Bold => match_bold(cur),
            HighlightRule::Italic => match_italic(cur),
            HighlightRule::InlineCode => match_closed(cur, b'`'),
            HighlightRule::Link => match_link(cur),
            HighlightRule::ListMarker => match_list_marker(cur),
        }
    }
}

fn match_heading(cur: &Cursor<'_>) -> Option<usize> {
    let hashes = cur.s.bytes().take_while(|&b| b == b'#').count();
    if hashes == 0 || hashes > HighlightRule::MAX_HEADING_LEVEL {
        return None;
    }
    cur.peek_at(hashes)
        .filter(u8::is_ascii_whitespace)
        .map(|_| cur.s.len())
}

fn match_bold(cur: &Cursor<'_>) -> Option<usize> {
    [b"**", b"__"].into_iter().find_map(|delim| {
        if !cur.starts_with(delim) {
            return None;
        }
        cur.find_from(cur.pos() + 2, delim).map(|close| close + 2)
    })
}

fn match_italic(cur: &Cursor<'_>) -> Option<usize> {
    match cur.peek()? {
        b'*' => match_closed(cur, b'*'),
        b'_' => {
            let bytes = cur.s.as_bytes();
            (cur.pos() + 1..bytes.len())
                .find(|&j| bytes[j] == b'_' && bytes.get(j + 1) != Some(&b'_'))
                .map(|close| close + 1)
        }
        _ => None,
    }
}

/// `delim`, anything (lazily), `delim`.
fn match_closed(cur: &Cursor<'_>, delim: u8) -> Option<usize> {
    if cur.peek()? != delim {
        return None;
    }
    cur.find_from(cur.pos() + 1, &[delim]).map(|close| close + 1)
}

fn match_link(cur: &Cursor<'_>) -> Option<usize> {
    if cur.peek()? != b'[' {
        return None;
    }
    let mid = cur.find_from(cur.pos() + 1, b"](")?;
    cur.find_from(mid + 2, b")").map(|close| close + 1)
}

fn match_list_marker(cur: &Cursor<'_>) -> Option<usize> {
    let mut c = cur.clone();
    c.skip_whitespace();
    match c.peek()? {
        b'-' | b'*' | b'+' => {
            c.bump();
        }
        b'0'..=b'9' => {
            while c.peek().is_some_and(|b| b.is_ascii_digit()) {
                c.bump();
            }
            if c.bump()? != b'.' {
                return None;
            }
        }
        _ => return None,
    }
    c.bump().filter(u8::is_ascii_whitespace).map(|_| c.pos())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn spans(rule: HighlightRule, line: &str) -> Vec<(usize, usize)> {
        rule.scan(line).into_iter().map(|s| (s.start, s.end)).collect()
    }

    #[rstest]
    #[case("# Title", vec![(0, 7)])]
    #[case("###### Six", vec![(0, 10)])]
    #[case("####### Seven", vec![])]
    #[case("#NoSpace", vec![])]
    #[case("#\ttab", vec![(0, 5)])]
    #[case(" # indented", vec![])]
    #[case("text # not heading", vec![])]
    fn heading_rule(#[case] line: &str, #[case] expected: Vec<(usize, usize)>) {
        assert_eq!(spans(HighlightRule::Heading, line), expected);
    }

    #[rstest]
    #[case("**a** and **b**", vec![(0, 5), (10, 15)])]
    #[case("__a__", vec![(0, 5)])]
    #[case("****", vec![(0, 4)])]
    #[case("**open", vec![])]
    #[case("**a __b__", vec![(4, 9)])]
    fn bold_rule(#[case] line: &str, #[case] expected: Vec<(usize, usize)>) {
        assert_eq!(spans(HighlightRule::Bold, line), expected);
    }

    #[rstest]
    #[case("*a* b *c*", vec![(0, 3), (6, 9)])]
    #[case("_a_", vec![(0, 3)])]
    #[case("**", vec![(0, 2)])]
    #[case("_a__b_", vec![(0, 4)])]
    #[case("snake_case_name", vec![(5, 11)])]
    #[case("*open", vec![])]
    fn italic_rule(#[case] line: &str, #[case] expected: Vec<(usize, usize)>) {
        assert_eq!(spans(HighlightRule::Italic, line), expected);
    }

    #[rstest]
    #[case("use `a` and `b`", vec![(4, 7), (12, 15)])]
    #[case("``", vec![(0, 2)])]
    #[case("`open", vec![])]
    fn code_rule(#[case] line: &str, #[case] expected: Vec<(usize, usize)>) {
        assert_eq!(spans(HighlightRule::InlineCode, line), expected);
    }

    #[rstest]
    #[case("see [x](http://y) now", vec![(4, 17)])]
    #[case("[](u)", vec![(0, 5)])]
    #[case("[a] [b](c)", vec![(0, 10)])]
    #[case("[a](no close", vec![])]
    #[case("[a] plain", vec![])]
    fn link_rule(#[case] line: &str, #[case] expected: Vec<(usize, usize)>) {
        assert_eq!(spans(HighlightRule::Link, line), expected);
    }

    #[rstest]
    #[case("- item", vec![(0, 2)])]
    #[case("  * item", vec![(0, 4)])]
    #[case("+\titem", vec![(0, 2)])]
    #[case("12. item", vec![(0, 4)])]
    #[case("   3. item", vec![(0, 6)])]
    #[case("-item", vec![])]
    #[case("1.item", vec![])]
    #[case("a - b", vec![])]
    #[case("", vec![])]
    fn list_marker_rule(#[case] line: &str, #[case] expected: Vec<(usize, usize)>) {
        assert_eq!(spans(HighlightRule::ListMarker, line), expected);
    }

    #[test]
    fn multibyte_text_keeps_char_boundaries() {
        let line = "héllo *wörld* ✓";
        let found = HighlightRule::Italic.scan(line);
        assert_eq!(found.len(), 1);
        assert_eq!(&line[found[0].start..found[0].end], "*wörld*");
    }
}
