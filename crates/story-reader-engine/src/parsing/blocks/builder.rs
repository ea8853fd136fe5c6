use crate::parsing::inline::scan_spans;

use super::{classify::LineClass, types::Block};

/// Accumulates classified lines into the block sequence.
///
/// One [`LineClass`] in, one [`Block`] out; the builder keeps no lookahead.
#[derive(Debug, Default)]
pub struct BlockBuilder {
    out: Vec<Block>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Like [`BlockBuilder::new`] but with room for `lines` blocks.
    pub fn with_capacity(lines: usize) -> Self {
        Self {
            out: Vec::with_capacity(lines),
        }
    }

    pub fn push(&mut self, lc: &LineClass<'_>) {
        let block = match *lc {
            LineClass::Divider => Block::Divider,
            LineClass::Header(text) => Block::Header(text.to_string()),
            LineClass::Text(line) => Block::Paragraph(scan_spans(line)),
            LineClass::Blank => Block::Spacer,
        };
        self.out.push(block);
    }

    pub fn finish(self) -> Vec<Block> {
        self.out
    }
}
