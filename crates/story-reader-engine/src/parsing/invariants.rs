//! Runtime checks of parser output, shared by unit and integration tests.

use super::{
    blocks::Block,
    inline::paragraph_source,
    lines::{line_count, lines_with_spans},
};

/// Validates parser output invariants.
///
/// Asserts that:
/// - there is exactly one block per source line
/// - every paragraph reconstructs its source line exactly
/// - every paragraph has at least one span and no empty plain spans
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(content: &str, blocks: &[Block]) {
    assert_eq!(
        blocks.len(),
        line_count(content),
        "block count differs from line count"
    );

    for (lr, block) in lines_with_spans(content).zip(blocks) {
        let Block::Paragraph(spans) = block else {
            continue;
        };
        assert!(
            !spans.is_empty(),
            "paragraph on line {} has no spans",
            lr.number
        );
        assert_eq!(
            paragraph_source(spans),
            lr.text,
            "paragraph on line {} does not round-trip",
            lr.number
        );
        if spans.len() > 1 {
            assert!(
                spans
                    .iter()
                    .all(|s| !matches!(s, super::Span::Plain(t) if t.is_empty())),
                "empty plain span on line {}",
                lr.number
            );
        }
    }
}
