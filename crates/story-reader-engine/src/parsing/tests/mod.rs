//! Integration tests for the parsing module.
//!
//! Whole-chapter tests run the invariant checks on every input; inline
//! snapshots use the `Debug` form so block and span kinds read directly.


use pretty_assertions::assert_eq;

use crate::parsing::{Block, Span, invariants, parse};

fn parse_checked(content: &str) -> Vec<Block> {
    let blocks = parse(content);
    invariants::check(content, &blocks);
    blocks
}

#[test]
fn empty_input_is_one_spacer() {
    assert_eq!(parse_checked(""), vec![Block::Spacer]);
}

#[test]
fn divider_line() {
    assert_eq!(parse_checked("---"), vec![Block::Divider]);
}

#[test]
fn header_line() {
    assert_eq!(
        parse_checked("## Chapter One"),
        vec![Block::Header("Chapter One".into())]
    );
}

#[test]
fn header_text_is_not_scanned() {
    assert_eq!(
        parse_checked("## The **\"Gate\"**"),
        vec![Block::Header("The **\"Gate\"**".into())]
    );
}

#[test]
fn paragraph_keeps_raw_indentation() {
    assert_eq!(
        parse_checked("    indented"),
        vec![Block::Paragraph(vec![Span::Plain("    indented".into())])]
    );
}

#[test]
fn whitespace_only_line_is_spacer() {
    assert_eq!(parse_checked(" \t"), vec![Block::Spacer]);
}

#[test]
fn unbalanced_marker_is_kept_verbatim() {
    assert_eq!(
        parse_checked("unbalanced ** marker"),
        vec![Block::Paragraph(vec![Span::Plain(
            "unbalanced ** marker".into()
        )])]
    );
}

#[test]
fn multi_line_scenario() {
    let blocks = parse_checked("Line one\n\n## Title\n---\n**Bold** end");
    insta::assert_debug_snapshot!(blocks, @r#"
    [
        Paragraph(
            [
                Plain(
                    "Line one",
                ),
            ],
        ),
        Spacer,
        Header(
            "Title",
        ),
        Divider,
        Paragraph(
            [
                Bold(
                    "Bold",
                ),
                Plain(
                    " end",
                ),
            ],
        ),
    ]
    "#);
}

#[test]
fn crlf_lines_keep_carriage_return_in_text() {
    let blocks = parse_checked("first\r\n---\r\n");
    assert_eq!(
        blocks,
        vec![
            Block::Paragraph(vec![Span::Plain("first\r".into())]),
            // `---\r` trims to `---`
            Block::Divider,
            Block::Spacer,
        ]
    );
}

#[test]
fn control_characters_are_opaque() {
    let content = "a\u{0}b \"\u{7}\"";
    assert_eq!(
        parse_checked(content),
        vec![Block::Paragraph(vec![
            Span::Plain("a\u{0}b ".into()),
            Span::Quoted("\u{7}".into()),
        ])]
    );
}
