use std::ops::Range;

/// The only line separator recognised in chapter text.
pub const LINE_FEED: char = '\n';

/// A reference to a single line of chapter text with its byte range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRef<'a> {
    /// Zero-based line number.
    pub number: usize,
    /// Byte range of the line in the chapter text, excluding the line feed.
    pub range: Range<usize>,
    /// The line text without its line feed.
    pub text: &'a str,
}

/// Returns an iterator over the lines of `content` with their byte ranges.
///
/// Splits on `\n` only, so the empty string is a single empty line and a
/// trailing line feed produces a final empty line. Carriage returns stay part
/// of the line text.
pub fn lines_with_spans(content: &str) -> impl Iterator<Item = LineRef<'_>> + '_ {
    let mut offset = 0usize;
    content
        .split(LINE_FEED)
        .enumerate()
        .map(move |(number, text)| {
            let start = offset;
            offset += text.len() + LINE_FEED.len_utf8();
            LineRef {
                number,
                range: start..start + text.len(),
                text,
            }
        })
}

/// Number of lines `content` has, counted the same way as [`lines_with_spans`].
pub fn line_count(content: &str) -> usize {
    content.matches(LINE_FEED).count() + 1
}
