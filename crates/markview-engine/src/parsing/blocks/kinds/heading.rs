/// ATX heading (`#` through `######`).
pub struct Heading;

impl Heading {
    pub const MARKER: u8 = b'#';
    pub const MAX_LEVEL: u8 = 6;

    /// Parses a heading line into `(level, text)`.
    ///
    /// The run of markers must start the line, be 1..=6 long and be followed
    /// by a space. The returned text is trimmed.
    pub fn parse(line: &str) -> Option<(u8, &str)> {
        let count = line.bytes().take_while(|&b| b == Self::MARKER).count();
        if count == 0 || count > Self::MAX_LEVEL as usize {
            return None;
        }
        let rest = line[count..].strip_prefix(' ')?;
        Some((count as u8, rest.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("# Title", Some((1, "Title")))]
    #[case("### Third", Some((3, "Third")))]
    #[case("###### Six", Some((6, "Six")))]
    #[case("####### Seven", None)]
    #[case("#NoSpace", None)]
    #[case("#", None)]
    #[case("# ", Some((1, "")))]
    #[case("##   padded  ", Some((2, "padded")))]
    #[case(" # indented", None)]
    fn parse_heading(#[case] line: &str, #[case] expected: Option<(u8, &str)>) {
        assert_eq!(Heading::parse(line), expected);
    }
}
