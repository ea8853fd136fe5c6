use pretty_assertions::assert_eq;
use story_reader_engine::parsing::{Block, Span, invariants, parse};

fn load_fixture(name: &str) -> (String, Vec<Block>) {
    let content = std::fs::read_to_string(format!(
        "{}/tests/fixtures/{name}.txt",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap();

    let blocks = parse(&content);
    invariants::check(&content, &blocks);
    (content, blocks)
}

fn plain(s: &str) -> Span {
    Span::Plain(s.into())
}

#[test]
fn fixture_scenario() {
    let (_, blocks) = load_fixture("scenario");
    assert_eq!(
        blocks,
        vec![
            Block::Paragraph(vec![plain("Line one")]),
            Block::Spacer,
            Block::Header("Title".into()),
            Block::Divider,
            Block::Paragraph(vec![Span::Bold("Bold".into()), plain(" end")]),
        ]
    );
}

#[test]
fn fixture_dialogue() {
    let (content, blocks) = load_fixture("dialogue");
    assert_eq!(blocks.len(), content.lines().count() + 1);

    assert_eq!(blocks[0], Block::Header("Chapter One".into()));
    assert_eq!(
        blocks[3],
        Block::Paragraph(vec![
            Span::Quoted("Are you coming?".into()),
            plain(" Mai asked."),
        ])
    );
    assert_eq!(blocks[6], Block::Divider);
    assert_eq!(
        blocks[8],
        Block::Paragraph(vec![
            plain("He said "),
            Span::Quoted("wait".into()),
            plain(" and then "),
            Span::Quoted("go".into()),
            plain(" and then \""),
        ])
    );
    assert_eq!(blocks.last(), Some(&Block::Spacer));
}

#[test]
fn fixture_edge_markup() {
    let (_, blocks) = load_fixture("edge_markup");
    insta::assert_debug_snapshot!(blocks, @r#"
    [
        Paragraph(
            [
                Bold(
                    "a",
                ),
                Plain(
                    " middle ",
                ),
                Bold(
                    "b",
                ),
            ],
        ),
        Paragraph(
            [
                Plain(
                    "unbalanced ** marker",
                ),
            ],
        ),
        Paragraph(
            [
                Plain(
                    "\"open but never closed",
                ),
            ],
        ),
        Paragraph(
            [
                Bold(
                    "",
                ),
            ],
        ),
        Spacer,
    ]
    "#);
}

/// Dumped blocks are tagged JSON objects so front-ends can dispatch on `kind`.
#[test]
fn blocks_serialize_as_tagged_json() {
    let blocks = parse("---\n## T\n\"hi\"\n");
    let json = serde_json::to_value(&blocks).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            { "kind": "Divider" },
            { "kind": "Header", "content": "T" },
            { "kind": "Paragraph", "content": [ { "kind": "Quoted", "text": "hi" } ] },
            { "kind": "Spacer" },
        ])
    );
}
