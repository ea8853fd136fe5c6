use std::borrow::Cow;

use serde::Serialize;

use super::kinds::{Bold, Quoted};

/// One inline run of text within a paragraph, carrying its style.
///
/// Variants hold the text without delimiters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text")]
pub enum Span {
    /// Text outside any construct, including unbalanced delimiters.
    Plain(String),
    /// Text that was wrapped in `**`.
    Bold(String),
    /// Dialogue that was wrapped in `"`.
    Quoted(String),
}

impl Span {
    /// The text without delimiters.
    pub fn text(&self) -> &str {
        match self {
            Span::Plain(t) | Span::Bold(t) | Span::Quoted(t) => t,
        }
    }

    /// The text as it should be displayed.
    ///
    /// Quoted dialogue keeps its quote marks; bold loses its asterisks.
    pub fn rendered(&self) -> Cow<'_, str> {
        match self {
            Span::Quoted(t) => Cow::Owned(format!("{q}{t}{q}", q = Quoted::MARK_CHAR)),
            Span::Plain(t) | Span::Bold(t) => Cow::Borrowed(t),
        }
    }

    /// The text with its original delimiters put back.
    pub fn source(&self) -> Cow<'_, str> {
        match self {
            Span::Plain(t) => Cow::Borrowed(t),
            Span::Bold(t) => Cow::Owned(format!("{m}{t}{m}", m = Bold::MARKER_STR)),
            Span::Quoted(_) => self.rendered(),
        }
    }
}

/// Reconstructs the source line a paragraph was scanned from.
pub fn paragraph_source(spans: &[Span]) -> String {
    spans.iter().map(|s| s.source()).collect()
}
