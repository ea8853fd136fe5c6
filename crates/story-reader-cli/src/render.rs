use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span as TextSpan},
};
use story_reader_engine::parsing::{Block, Span};

const PARAGRAPH_INDENT: &str = "    ";
const DIVIDER_CHAR: &str = "─";
const DIVIDER_MAX_WIDTH: u16 = 40;

/// Lines for a parsed chapter, laid out for a column `width` cells wide.
pub fn chapter_lines(blocks: &[Block], width: u16) -> Vec<Line<'static>> {
    blocks.iter().map(|block| block_line(block, width)).collect()
}

fn block_line(block: &Block, width: u16) -> Line<'static> {
    match block {
        Block::Divider => {
            let rule = DIVIDER_CHAR.repeat(usize::from(width.min(DIVIDER_MAX_WIDTH)));
            Line::from(rule).centered()
        }
        Block::Header(text) => Line::from(TextSpan::styled(
            text.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Block::Paragraph(spans) => {
            let mut parts = Vec::with_capacity(spans.len() + 1);
            parts.push(TextSpan::raw(PARAGRAPH_INDENT));
            parts.extend(spans.iter().map(span_text));
            Line::from(parts)
        }
        Block::Spacer => Line::default(),
    }
}

fn span_text(span: &Span) -> TextSpan<'static> {
    match span {
        Span::Plain(text) => TextSpan::raw(text.clone()),
        Span::Bold(text) => {
            TextSpan::styled(text.clone(), Style::default().add_modifier(Modifier::BOLD))
        }
        // Dialogue keeps its quote marks
        Span::Quoted(_) => TextSpan::styled(
            span.rendered().into_owned(),
            Style::default().add_modifier(Modifier::ITALIC),
        ),
    }
}
