use crate::parsing::span::Span;

use super::{
    classify::{LineClass, LineKind},
    kinds::{CodeFence, TableRow},
    types::{BlockKind, BlockNode, ContainerFrame},
};

/// The block currently open while walking the document.
///
/// At most one of paragraph, list, table or fence is open at a time; opening
/// any other block closes it first.
#[derive(Debug)]
enum OpenBlock<'a> {
    None,
    Paragraph {
        start: usize,
        lines: Vec<&'a str>,
    },
    List {
        ordered: bool,
        id: usize,
    },
    Table {
        id: usize,
        /// True right after the header row, where a delimiter row is skipped.
        expect_delimiter: bool,
    },
    Fence {
        language: Option<&'a str>,
        start: usize,
        lines: Vec<&'a str>,
    },
}

pub struct BlockBuilder<'a> {
    open: OpenBlock<'a>,
    next_container: usize,
    out: Vec<BlockNode<'a>>,
}

impl<'a> BlockBuilder<'a> {
    pub fn new() -> Self {
        Self {
            open: OpenBlock::None,
            next_container: 0,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: &LineClass<'a>) {
        if self.in_fence() {
            self.consume_fence_line(c);
            return;
        }

        match c.kind {
            LineKind::Fence { language } => {
                self.close();
                self.open = OpenBlock::Fence {
                    language,
                    start: c.index,
                    lines: vec![],
                };
            }
            LineKind::Blank => self.close(),
            LineKind::Heading { level, text } => {
                self.close();
                self.emit(BlockKind::Heading { level }, None, c.index, vec![text]);
            }
            LineKind::ThematicBreak => {
                self.close();
                self.emit(BlockKind::HorizontalRule, None, c.index, vec![]);
            }
            LineKind::TableRow => self.push_table_row(c),
            LineKind::BlockQuote { text } => {
                self.close();
                self.emit(BlockKind::Blockquote, None, c.index, vec![text]);
            }
            LineKind::ListItem { ordered, text } => self.push_list_item(c.index, ordered, text),
            LineKind::Text { text } => self.extend_paragraph(c.index, text),
        }
    }

    pub fn finish(mut self) -> Vec<BlockNode<'a>> {
        // EOF flush
        if let OpenBlock::Fence { start, .. } = self.open {
            log::debug!("unterminated code fence opened at line {start}, flushing at end of input");
            self.flush_fence(None);
        }
        self.close();
        self.out
    }

    fn in_fence(&self) -> bool {
        matches!(self.open, OpenBlock::Fence { .. })
    }

    fn next_id(&mut self) -> usize {
        let id = self.next_container;
        self.next_container += 1;
        id
    }

    fn emit(
        &mut self,
        kind: BlockKind<'a>,
        container: Option<ContainerFrame>,
        index: usize,
        content: Vec<&'a str>,
    ) {
        self.out.push(BlockNode {
            kind,
            container,
            lines: Span::new(index, index + 1),
            content,
        });
    }

    fn consume_fence_line(&mut self, c: &LineClass<'a>) {
        if CodeFence::closes(CodeFence::sig(c.text)) {
            self.flush_fence(Some(c.index));
        } else if let OpenBlock::Fence { lines, .. } = &mut self.open {
            lines.push(c.text);
        }
    }

    /// Emits the open fence as a code block. `closing` is the index of the
    /// closing fence line, `None` at end of input.
    fn flush_fence(&mut self, closing: Option<usize>) {
        let prev = std::mem::replace(&mut self.open, OpenBlock::None);
        if let OpenBlock::Fence {
            language,
            start,
            lines,
        } = prev
        {
            let end = closing.unwrap_or(start + lines.len()) + 1;
            self.out.push(BlockNode {
                kind: BlockKind::CodeBlock { language },
                container: None,
                lines: Span::new(start, end),
                content: lines,
            });
        } else {
            self.open = prev;
        }
    }

    fn push_table_row(&mut self, c: &LineClass<'a>) {
        match &mut self.open {
            OpenBlock::Table {
                expect_delimiter, ..
            } if *expect_delimiter && TableRow::is_delimiter(c.text) => {
                *expect_delimiter = false;
            }
            OpenBlock::Table {
                id,
                expect_delimiter,
            } => {
                *expect_delimiter = false;
                let frame = ContainerFrame::Table { id: *id };
                self.emit(
                    BlockKind::TableRow { is_header: false },
                    Some(frame),
                    c.index,
                    TableRow::cells(c.text),
                );
            }
            _ => {
                self.close();
                let id = self.next_id();
                self.open = OpenBlock::Table {
                    id,
                    expect_delimiter: true,
                };
                self.emit(
                    BlockKind::TableRow { is_header: true },
                    Some(ContainerFrame::Table { id }),
                    c.index,
                    TableRow::cells(c.text),
                );
            }
        }
    }

    fn push_list_item(&mut self, index: usize, ordered: bool, text: &'a str) {
        let id = match self.open {
            OpenBlock::List { ordered: o, id } if o == ordered => id,
            _ => {
                self.close();
                let id = self.next_id();
                self.open = OpenBlock::List { ordered, id };
                id
            }
        };
        self.emit(
            BlockKind::ListItem { ordered },
            Some(ContainerFrame::List { ordered, id }),
            index,
            vec![text],
        );
    }

    fn extend_paragraph(&mut self, index: usize, text: &'a str) {
        if let OpenBlock::Paragraph { lines, .. } = &mut self.open {
            lines.push(text);
            return;
        }
        self.close();
        self.open = OpenBlock::Paragraph {
            start: index,
            lines: vec![text],
        };
    }

    /// Closes whatever paragraph, list or table is open.
    ///
    /// List items and table rows are emitted eagerly, so only a paragraph
    /// produces a node here. Fences are never closed by other blocks.
    fn close(&mut self) {
        let prev = std::mem::replace(&mut self.open, OpenBlock::None);
        match prev {
            OpenBlock::Paragraph { start, lines } => {
                self.out.push(BlockNode {
                    kind: BlockKind::Paragraph,
                    container: None,
                    lines: Span::new(start, start + lines.len()),
                    content: lines,
                });
            }
            OpenBlock::Fence { .. } => self.open = prev,
            OpenBlock::None | OpenBlock::List { .. } | OpenBlock::Table { .. } => {}
        }
    }
}

impl Default for BlockBuilder<'_> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::{blocks::MarkdownLineClassifier, lines::lines_with_index};
    use pretty_assertions::assert_eq;

    fn build(doc: &str) -> Vec<BlockNode<'_>> {
        let mut builder = BlockBuilder::new();
        for lr in lines_with_index(doc) {
            builder.push(&MarkdownLineClassifier.classify(&lr));
        }
        builder.finish()
    }

    fn kinds<'a>(blocks: &[BlockNode<'a>]) -> Vec<BlockKind<'a>> {
        blocks.iter().map(|b| b.kind).collect()
    }

    #[test]
    fn paragraph_collects_consecutive_lines() {
        let blocks = build("one\ntwo\n\nthree");
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].content, vec!["one", "two"]);
        assert_eq!(blocks[0].lines, Span::new(0, 2));
        assert_eq!(blocks[1].content, vec!["three"]);
        assert_eq!(blocks[1].lines, Span::new(3, 4));
    }

    #[test]
    fn fence_keeps_raw_lines() {
        let blocks = build("```rust\n  *x*\n\n# not heading\n```\nafter");
        assert_eq!(
            kinds(&blocks),
            vec![
                BlockKind::CodeBlock {
                    language: Some("rust")
                },
                BlockKind::Paragraph
            ]
        );
        assert_eq!(blocks[0].content, vec!["  *x*", "", "# not heading"]);
        assert_eq!(blocks[0].lines, Span::new(0, 5));
    }

    #[test]
    fn unterminated_fence_flushes_at_eof() {
        let blocks = build("text\n```\nhello\nworld");
        assert_eq!(
            kinds(&blocks),
            vec![
                BlockKind::Paragraph,
                BlockKind::CodeBlock { language: None }
            ]
        );
        assert_eq!(blocks[1].content, vec!["hello", "world"]);
        assert_eq!(blocks[1].lines, Span::new(1, 4));
    }

    #[test]
    fn fence_closes_open_paragraph_and_list() {
        let blocks = build("para\n```\ncode\n```\n- item\n```\n```");
        assert_eq!(
            kinds(&blocks),
            vec![
                BlockKind::Paragraph,
                BlockKind::CodeBlock { language: None },
                BlockKind::ListItem { ordered: false },
                BlockKind::CodeBlock { language: None },
            ]
        );
        assert!(blocks[3].content.is_empty());
    }

    #[test]
    fn list_items_share_a_container() {
        let blocks = build("- a\n- b");
        assert_eq!(blocks[0].container, blocks[1].container);
        assert_eq!(
            blocks[0].container,
            Some(ContainerFrame::List {
                ordered: false,
                id: 0
            })
        );
    }

    #[test]
    fn blank_line_splits_lists() {
        let blocks = build("- a\n\n- b");
        assert_ne!(blocks[0].container, blocks[1].container);
    }

    #[test]
    fn switching_list_kind_opens_new_list() {
        let blocks = build("- a\n1. b\n2. c");
        assert_eq!(
            blocks[0].container,
            Some(ContainerFrame::List {
                ordered: false,
                id: 0
            })
        );
        assert_eq!(
            blocks[1].container,
            Some(ContainerFrame::List {
                ordered: true,
                id: 1
            })
        );
        assert_eq!(blocks[1].container, blocks[2].container);
    }

    #[test]
    fn text_after_list_closes_it() {
        let blocks = build("- a\ntext\n- b");
        assert_eq!(
            kinds(&blocks),
            vec![
                BlockKind::ListItem { ordered: false },
                BlockKind::Paragraph,
                BlockKind::ListItem { ordered: false },
            ]
        );
        assert_ne!(blocks[0].container, blocks[2].container);
    }

    #[test]
    fn table_header_delimiter_and_body() {
        let blocks = build("| a | b |\n|---|---|\n| 1 | 2 |\n| 3 | 4 |\nafter");
        assert_eq!(
            kinds(&blocks),
            vec![
                BlockKind::TableRow { is_header: true },
                BlockKind::TableRow { is_header: false },
                BlockKind::TableRow { is_header: false },
                BlockKind::Paragraph,
            ]
        );
        assert_eq!(blocks[0].content, vec!["a", "b"]);
        assert_eq!(blocks[2].content, vec!["3", "4"]);
        assert_eq!(blocks[0].container, blocks[2].container);
    }

    #[test]
    fn table_without_delimiter_row() {
        let blocks = build("| h |\n| v |");
        assert_eq!(
            kinds(&blocks),
            vec![
                BlockKind::TableRow { is_header: true },
                BlockKind::TableRow { is_header: false },
            ]
        );
    }

    #[test]
    fn delimiter_only_skipped_after_header() {
        let blocks = build("| h |\n| v |\n|---|");
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[2].content, vec!["---"]);
    }

    #[test]
    fn blank_line_ends_table() {
        let blocks = build("| a |\n\n| b |");
        assert_eq!(
            kinds(&blocks),
            vec![
                BlockKind::TableRow { is_header: true },
                BlockKind::TableRow { is_header: true },
            ]
        );
        assert_ne!(blocks[0].container, blocks[1].container);
    }

    #[test]
    fn heading_rule_and_quote_close_paragraph() {
        let blocks = build("p\n# h\np\n---\np\n> q");
        assert_eq!(
            kinds(&blocks),
            vec![
                BlockKind::Paragraph,
                BlockKind::Heading { level: 1 },
                BlockKind::Paragraph,
                BlockKind::HorizontalRule,
                BlockKind::Paragraph,
                BlockKind::Blockquote,
            ]
        );
    }

    #[test]
    fn empty_document() {
        assert!(build("").is_empty());
    }

    #[test]
    fn blank_lines_only() {
        assert!(build("\n  \n\t\n").is_empty());
    }
}
