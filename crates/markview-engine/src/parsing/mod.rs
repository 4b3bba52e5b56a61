pub mod blocks;
pub mod inline;
pub mod lines;
pub mod span;

use blocks::{BlockBuilder, BlockNode, MarkdownLineClassifier};
use lines::lines_with_index;

#[derive(Debug)]
pub struct ParsedDoc<'a> {
    pub blocks: Vec<BlockNode<'a>>,
}

/// Splits a document into classified blocks in a single forward pass.
///
/// Never fails: any string, including the empty string, is a valid document.
pub fn parse_document(doc: &str) -> ParsedDoc<'_> {
    let classifier = MarkdownLineClassifier;
    let mut builder = BlockBuilder::new();

    for lr in lines_with_index(doc) {
        let lc = classifier.classify(&lr);
        builder.push(&lc);
    }

    let blocks = builder.finish();
    log::trace!("parsed {} blocks", blocks.len());
    ParsedDoc { blocks }
}
