/// Signature of a fence line: the marker plus the optional info string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FenceSig<'a> {
    /// First word of the info string, if any.
    pub language: Option<&'a str>,
}

pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// Returns the fence signature if the line opens or closes a fence.
    ///
    /// The marker must start the line; indented fences are not recognized.
    pub fn sig(line: &str) -> Option<FenceSig<'_>> {
        let info = line.strip_prefix(Self::BACKTICKS)?;
        Some(FenceSig {
            language: info.split_whitespace().next(),
        })
    }

    /// Any fence line closes an open fence, whatever its info string.
    pub fn closes(sig: Option<FenceSig<'_>>) -> bool {
        sig.is_some()
    }
}
