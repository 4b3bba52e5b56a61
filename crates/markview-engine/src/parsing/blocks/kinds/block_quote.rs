/// Blockquote block type with owned delimiter constant.
///
/// Only single-level quotes are recognized: the line must start with the
/// prefix followed by a space.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix, including its mandatory space.
    pub const PREFIX: &'static str = "> ";

    /// Strips the quote prefix, returning the quoted text.
    pub fn strip(line: &str) -> Option<&str> {
        line.strip_prefix(Self::PREFIX)
    }
}
