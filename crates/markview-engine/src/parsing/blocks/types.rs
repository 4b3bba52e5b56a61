use crate::parsing::span::Span;

/// The container a block belongs to.
///
/// List items and table rows are emitted one node per line; consecutive
/// nodes sharing a frame are rendered inside a single `<ul>`/`<ol>`/`<table>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerFrame {
    /// A flat list. `id` is unique per document.
    List { ordered: bool, id: usize },
    /// A pipe table. `id` is unique per document.
    Table { id: usize },
}

/// The kind of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind<'a> {
    /// `#` heading, level 1..=6.
    Heading { level: u8 },
    /// One or more consecutive text lines.
    Paragraph,
    /// `---`, `***` or `___`.
    HorizontalRule,
    /// A single `> ` line.
    Blockquote,
    /// A fenced code block; the language hint is kept but not used for styling.
    CodeBlock { language: Option<&'a str> },
    /// One list item. Lists are flat: nesting is always 1.
    ListItem { ordered: bool },
    /// One table row; the first row of a table is the header.
    TableRow { is_header: bool },
}

/// A parsed block with its kind, container, source lines and content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockNode<'a> {
    /// The kind of block.
    pub kind: BlockKind<'a>,
    /// The list or table this block is part of, if any.
    pub container: Option<ContainerFrame>,
    /// Source line indexes covered, including fence lines.
    pub lines: Span,
    /// Content slices of the source, markers stripped.
    ///
    /// - heading, blockquote, list item: one entry (the text)
    /// - paragraph: one entry per line
    /// - code block: raw lines between the fences
    /// - table row: one entry per cell
    /// - horizontal rule: empty
    pub content: Vec<&'a str>,
}
