//! # Chapter Markup
//!
//! Turns the plain text of a chapter into blocks and inline spans.
//!
//! The grammar is small and line oriented:
//!
//! | Line (trimmed)        | Block                  |
//! |-----------------------|------------------------|
//! | `---`                 | [`Block::Divider`]     |
//! | `## text`             | [`Block::Header`]      |
//! | anything else visible | [`Block::Paragraph`]   |
//! | empty                 | [`Block::Spacer`]      |
//!
//! Inside paragraphs, `**bold**` and `"dialogue"` become styled spans. The
//! parser is total: malformed markup falls back to literal text.

pub mod blocks;
pub mod inline;
pub mod invariants;
pub mod lines;

#[cfg(test)]
mod tests;

use blocks::{BlockBuilder, ChapterLineClassifier};
use lines::{line_count, lines_with_spans};

pub use blocks::Block;
pub use inline::{Span, paragraph_source, scan_spans};

/// Parses chapter text into one [`Block`] per line.
pub fn parse(content: &str) -> Vec<Block> {
    let classifier = ChapterLineClassifier;
    let mut builder = BlockBuilder::with_capacity(line_count(content));

    for lr in lines_with_spans(content) {
        let lc = classifier.classify(&lr);
        builder.push(&lc);
    }

    builder.finish()
}
