/// A recognized list item line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListItemLine<'a> {
    pub ordered: bool,
    pub text: &'a str,
}

/// Flat list markers: `1.` style and `-`/`*`/`+` bullets.
pub struct ListMarker;

impl ListMarker {
    pub const BULLETS: [&'static str; 3] = ["- ", "* ", "+ "];
    pub const ORDERED_DELIMITER: u8 = b'.';

    /// Parses a list item line. Ordered markers may be indented, bullets may not.
    pub fn parse(line: &str) -> Option<ListItemLine<'_>> {
        Self::parse_ordered(line).or_else(|| Self::parse_bullet(line))
    }

    fn parse_ordered(line: &str) -> Option<ListItemLine<'_>> {
        let s = line.trim_start();
        let digits = s.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 {
            return None;
        }
        let rest = &s[digits..];
        let rest = rest.strip_prefix(Self::ORDERED_DELIMITER as char)?;
        if !rest.starts_with(char::is_whitespace) {
            return None;
        }
        Some(ListItemLine {
            ordered: true,
            text: rest.trim(),
        })
    }

    fn parse_bullet(line: &str) -> Option<ListItemLine<'_>> {
        Self::BULLETS.iter().find_map(|bullet| {
            line.strip_prefix(bullet).map(|rest| ListItemLine {
                ordered: false,
                text: rest.trim(),
            })
        })
    }
}
