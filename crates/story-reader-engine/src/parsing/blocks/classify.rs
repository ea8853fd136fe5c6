use crate::parsing::lines::LineRef;

use super::kinds::{Divider, Header};

/// Classification of a single line containing only local facts.
///
/// Each line is classified independently; there is no state carried between
/// lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// The trimmed line is exactly the divider marker.
    Divider,
    /// The trimmed line starts with the header prefix. Carries the header text.
    Header(&'a str),
    /// Any other line with visible content. Carries the raw, untrimmed line.
    Text(&'a str),
    /// The line is empty or whitespace only.
    Blank,
}

/// Classifies individual chapter lines.
pub struct ChapterLineClassifier;

impl ChapterLineClassifier {
    /// Classifies a line into a [`LineClass`].
    ///
    /// Precedence is divider, header, text, blank. The first rule that matches
    /// wins, so no line can be two kinds at once.
    pub fn classify<'a>(&self, lr: &LineRef<'a>) -> LineClass<'a> {
        let trimmed = lr.text.trim();

        if Divider::matches(trimmed) {
            return LineClass::Divider;
        }
        if let Some(text) = Header::text(trimmed) {
            return LineClass::Header(text);
        }
        if !trimmed.is_empty() {
            return LineClass::Text(lr.text);
        }
        LineClass::Blank
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::parsing::lines::lines_with_spans;

    fn classify(line: &str) -> LineClass<'_> {
        let lr = lines_with_spans(line).next().unwrap();
        ChapterLineClassifier.classify(&lr)
    }

    #[rstest]
    #[case("---", LineClass::Divider)]
    #[case("   ---\t", LineClass::Divider)]
    #[case("## Title", LineClass::Header("Title"))]
    #[case("  ##   Spaced  ", LineClass::Header("Spaced"))]
    #[case("Some prose.", LineClass::Text("Some prose."))]
    #[case("  indented prose", LineClass::Text("  indented prose"))]
    #[case("", LineClass::Blank)]
    #[case(" \t ", LineClass::Blank)]
    fn classifies_lines(#[case] line: &str, #[case] expected: LineClass<'_>) {
        assert_eq!(classify(line), expected);
    }

    #[test]
    fn divider_wins_over_everything() {
        // `---` is also non-empty text, but the divider rule is checked first.
        assert_eq!(classify("---"), LineClass::Divider);
    }

    #[test]
    fn header_prefix_wins_over_text() {
        assert_eq!(classify("##**bold**"), LineClass::Header("**bold**"));
    }

    #[test]
    fn dashes_with_text_are_prose() {
        assert_eq!(classify("--- and more"), LineClass::Text("--- and more"));
    }
}
