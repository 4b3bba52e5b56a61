use std::fmt::Write;

use crate::parsing::{
    blocks::{BlockKind, BlockNode, ContainerFrame},
    inline::{escape_text, format_inline},
};

/// Serializes parsed blocks to an HTML fragment.
pub fn write_fragment(blocks: &[BlockNode<'_>]) -> String {
    let mut w = FragmentWriter::default();
    for block in blocks {
        w.block(block);
    }
    w.finish()
}

/// Tracks the open `<ul>`/`<ol>`/`<table>` while blocks stream past.
///
/// Consecutive blocks with the same container frame share one element; any
/// change of frame closes the open element first.
#[derive(Default)]
struct FragmentWriter {
    out: String,
    open: Option<ContainerFrame>,
    in_tbody: bool,
}

impl FragmentWriter {
    fn block(&mut self, block: &BlockNode<'_>) {
        if self.open != block.container {
            self.close_container();
            if let Some(frame) = block.container {
                self.open_container(frame);
            }
        }

        match block.kind {
            BlockKind::Heading { level } => {
                let text = block.content.first().copied().unwrap_or_default();
                let _ = write!(self.out, "<h{level}>{}</h{level}>", format_inline(text));
            }
            BlockKind::Paragraph => {
                self.out.push_str("<p>");
                for (i, line) in block.content.iter().enumerate() {
                    if i > 0 {
                        self.out.push_str("<br>");
                    }
                    self.out.push_str(&format_inline(line.trim()));
                }
                self.out.push_str("</p>");
            }
            BlockKind::HorizontalRule => self.out.push_str("<hr>"),
            BlockKind::Blockquote => self.wrap("blockquote", block),
            BlockKind::CodeBlock { .. } => {
                let code = block.content.join("\n");
                let _ = write!(self.out, "<pre><code>{}</code></pre>", escape_text(&code));
            }
            BlockKind::ListItem { .. } => self.wrap("li", block),
            BlockKind::TableRow { is_header } => self.table_row(is_header, &block.content),
        }
    }

    /// `<tag>` around the formatted single-line content.
    fn wrap(&mut self, tag: &str, block: &BlockNode<'_>) {
        let text = block.content.first().copied().unwrap_or_default();
        let _ = write!(self.out, "<{tag}>{}</{tag}>", format_inline(text));
    }

    fn table_row(&mut self, is_header: bool, cells: &[&str]) {
        let cell = if is_header { "th" } else { "td" };
        if is_header {
            self.out.push_str("<thead>");
        } else if !self.in_tbody {
            self.out.push_str("<tbody>");
            self.in_tbody = true;
        }

        self.out.push_str("<tr>");
        for text in cells {
            let _ = write!(self.out, "<{cell}>{}</{cell}>", format_inline(text));
        }
        self.out.push_str("</tr>");

        if is_header {
            self.out.push_str("</thead>");
        }
    }

    fn open_container(&mut self, frame: ContainerFrame) {
        self.out.push_str(match frame {
            ContainerFrame::List { ordered: true, .. } => "<ol>",
            ContainerFrame::List { ordered: false, .. } => "<ul>",
            ContainerFrame::Table { .. } => "<table>",
        });
        self.open = Some(frame);
    }

    fn close_container(&mut self) {
        match self.open.take() {
            Some(ContainerFrame::List { ordered: true, .. }) => self.out.push_str("</ol>"),
            Some(ContainerFrame::List { ordered: false, .. }) => self.out.push_str("</ul>"),
            Some(ContainerFrame::Table { .. }) => {
                if std::mem::take(&mut self.in_tbody) {
                    self.out.push_str("</tbody>");
                }
                self.out.push_str("</table>");
            }
            None => {}
        }
    }

    fn finish(mut self) -> String {
        self.close_container();
        self.out
    }
}
