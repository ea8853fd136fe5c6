use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::library::Chapter;

/// Where the reader stopped in a story.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingProgress {
    pub chapter_id: String,
    pub chapter_title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chapter_index: Option<u32>,
    /// When the entry was last written. Stored as epoch milliseconds.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
    /// Furthest scroll offset reached in the chapter, counted in wrapped
    /// display rows at the column width in use when it was saved. Readers
    /// clamp it to the chapter's current row count on resume.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scroll_position: Option<u32>,
}

impl ReadingProgress {
    /// Progress pointing at the top of `chapter`.
    pub fn for_chapter(chapter: &Chapter, timestamp: DateTime<Utc>) -> Self {
        Self {
            chapter_id: chapter.id.clone(),
            chapter_title: chapter.title.clone(),
            chapter_index: chapter.index,
            timestamp,
            scroll_position: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn serializes_with_camel_case_and_millis() {
        let progress = ReadingProgress {
            chapter_id: "c1".into(),
            chapter_title: "Opening".into(),
            chapter_index: Some(1),
            timestamp: Utc.timestamp_millis_opt(1_700_000_000_123).unwrap(),
            scroll_position: Some(42),
        };

        let json = serde_json::to_value(&progress).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "chapterId": "c1",
                "chapterTitle": "Opening",
                "chapterIndex": 1,
                "timestamp": 1_700_000_000_123_i64,
                "scrollPosition": 42,
            })
        );
    }

    #[test]
    fn optional_fields_may_be_missing() {
        let progress: ReadingProgress = serde_json::from_str(
            r#"{"chapterId":"c","chapterTitle":"T","timestamp":0}"#,
        )
        .unwrap();
        assert_eq!(progress.chapter_index, None);
        assert_eq!(progress.scroll_position, None);
        assert_eq!(progress.timestamp.timestamp_millis(), 0);
    }
}
