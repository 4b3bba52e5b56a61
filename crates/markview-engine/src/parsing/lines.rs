/// A reference to a single source line with its zero-based index.
#[derive(Debug, Clone, Copy)]
pub struct LineRef<'a> {
    /// Position of the line in the document.
    pub index: usize,
    /// Line text without its terminator (`\n` or `\r\n`).
    pub text: &'a str,
}

/// Returns an iterator over the document's lines with their indexes.
///
/// An empty document yields no lines; a trailing newline does not produce a
/// trailing empty line.
pub fn lines_with_index(doc: &str) -> impl Iterator<Item = LineRef<'_>> + '_ {
    doc.lines()
        .enumerate()
        .map(|(index, text)| LineRef { index, text })
}
