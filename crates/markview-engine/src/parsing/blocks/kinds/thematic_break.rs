/// Horizontal rule: three or more of the same rule character.
pub struct ThematicBreak;

impl ThematicBreak {
    pub const RULE_CHARS: [char; 3] = ['-', '*', '_'];
    pub const MIN_LEN: usize = 3;

    /// True if the trimmed line consists only of one repeated rule character.
    pub fn matches(line: &str) -> bool {
        let t = line.trim();
        let mut chars = t.chars();
        let Some(first) = chars.next() else {
            return false;
        };
        Self::RULE_CHARS.contains(&first)
            && t.len() >= Self::MIN_LEN
            && chars.all(|c| c == first)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("---", true)]
    #[case("***", true)]
    #[case("___", true)]
    #[case("  -----  ", true)]
    #[case("--", false)]
    #[case("-*-", false)]
    #[case("- - -", false)]
    #[case("===", false)]
    #[case("", false)]
    fn detects_rules(#[case] line: &str, #[case] expected: bool) {
        assert_eq!(ThematicBreak::matches(line), expected);
    }
}
