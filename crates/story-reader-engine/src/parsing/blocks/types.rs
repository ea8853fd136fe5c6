use serde::Serialize;

use crate::parsing::inline::Span;

/// One structural unit of rendered chapter content.
///
/// Every source line produces exactly one block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "content")]
pub enum Block {
    /// A horizontal rule (`---`).
    Divider,
    /// A section heading (`## text`). Header text is not scanned for inline spans.
    Header(String),
    /// A line of prose split into inline spans.
    Paragraph(Vec<Span>),
    /// Vertical space standing in for a blank source line.
    Spacer,
}

impl Block {
    /// Short name of the block kind.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Block::Divider => "Divider",
            Block::Header(_) => "Header",
            Block::Paragraph(_) => "Paragraph",
            Block::Spacer => "Spacer",
        }
    }

    /// The inline spans of a paragraph, or `None` for other kinds.
    pub fn spans(&self) -> Option<&[Span]> {
        match self {
            Block::Paragraph(spans) => Some(spans),
            _ => None,
        }
    }
}
