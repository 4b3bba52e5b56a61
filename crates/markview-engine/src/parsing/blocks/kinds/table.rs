/// Pipe table rows (`| a | b |`).
pub struct TableRow;

impl TableRow {
    pub const PIPE: char = '|';

    /// True if the trimmed line starts with a pipe.
    pub fn matches(line: &str) -> bool {
        line.trim_start().starts_with(Self::PIPE)
    }

    /// Splits a row into trimmed cell texts.
    ///
    /// The leading pipe is required; a trailing pipe is optional.
    pub fn cells(line: &str) -> Vec<&str> {
        let t = line.trim();
        let inner = t.strip_prefix(Self::PIPE).unwrap_or(t);
        let inner = inner.strip_suffix(Self::PIPE).unwrap_or(inner);
        inner.split(Self::PIPE).map(str::trim).collect()
    }

    /// True for the header/body separator row (`|---|:--:|`).
    pub fn is_delimiter(line: &str) -> bool {
        Self::cells(line).iter().all(|cell| {
            let dashes = cell.strip_prefix(':').unwrap_or(cell);
            let dashes = dashes.strip_suffix(':').unwrap_or(dashes);
            !dashes.is_empty() && dashes.chars().all(|c| c == '-')
        })
    }
}
