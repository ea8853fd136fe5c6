use super::{
    cursor::Cursor,
    kinds::{Bold, Quoted},
    types::Span,
};

/// Scans one line of prose into a sequence of [`Span`]s.
///
/// # Precedence
/// At every position bold is tried before quoted, and the earliest position
/// that opens a closed construct wins. Each construct closes at the nearest
/// matching delimiter, so `**a** and **b**` is two bold spans.
///
/// # Returns
/// Spans covering the entire line. Text between constructs is emitted as
/// [`Span::Plain`]; a line without constructs (including the empty line)
/// comes back as a single plain span equal to the line.
pub fn scan_spans(line: &str) -> Vec<Span> {
    let mut cur = Cursor::new(line);
    let mut out = vec![];
    let mut text_start = cur.pos();

    // Helper to flush accumulated text as a Plain span
    fn flush_text(out: &mut Vec<Span>, cur: &Cursor<'_>, start: usize, end: usize) {
        if end > start {
            out.push(Span::Plain(cur.slice(start, end).to_string()));
        }
    }

    while !cur.eof() {
        let start = cur.pos();
        if let Some(span) = try_parse_bold(&mut cur).or_else(|| try_parse_quoted(&mut cur)) {
            flush_text(&mut out, &cur, text_start, start);
            text_start = cur.pos();
            out.push(span);
            continue;
        }
        cur.bump();
    }

    flush_text(&mut out, &cur, text_start, cur.pos());
    if out.is_empty() {
        out.push(Span::Plain(line.to_string()));
    }
    out
}

/// Attempts to parse a bold run starting at the current position.
///
/// Returns `None` if not at `**` or if no closing `**` follows.
/// On failure, cursor position is restored.
fn try_parse_bold(cur: &mut Cursor<'_>) -> Option<Span> {
    if !cur.starts_with(Bold::MARKER) {
        return None;
    }

    let saved = cur.clone();
    cur.bump_n(Bold::MARKER.len());
    let inner_start = cur.pos();

    while !cur.eof() && !cur.starts_with(Bold::MARKER) {
        cur.bump();
    }
    let inner_end = cur.pos();

    if !cur.starts_with(Bold::MARKER) {
        // Not closed, restore cursor
        *cur = saved;
        return None;
    }
    cur.bump_n(Bold::MARKER.len());

    Some(Span::Bold(cur.slice(inner_start, inner_end).to_string()))
}

/// Attempts to parse quoted dialogue starting at the current position.
///
/// Returns `None` if not at `"` or if no closing `"` follows.
/// On failure, cursor position is restored.
fn try_parse_quoted(cur: &mut Cursor<'_>) -> Option<Span> {
    if cur.peek() != Some(Quoted::MARK) {
        return None;
    }

    let saved = cur.clone();
    cur.bump(); // "
    let inner_start = cur.pos();

    while !cur.eof() && cur.peek() != Some(Quoted::MARK) {
        cur.bump();
    }
    let inner_end = cur.pos();

    if cur.peek() != Some(Quoted::MARK) {
        // Not closed, restore cursor
        *cur = saved;
        return None;
    }
    cur.bump(); // closing "

    Some(Span::Quoted(cur.slice(inner_start, inner_end).to_string()))
}
