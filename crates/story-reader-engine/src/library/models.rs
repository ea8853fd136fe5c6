use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;

use super::store::{Fields, Record};

/// A story as listed on the front page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    pub id: String,
    pub title: String,
    /// User id of the owner. Only the owner may edit or delete.
    pub created_by: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub author: Option<String>,
    pub author_link: Option<String>,
    pub source: Option<String>,
}

/// One chapter of a story.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    pub id: String,
    pub title: String,
    /// Raw chapter text, parsed for display by [`crate::parsing::parse`].
    #[serde(default)]
    pub content: String,
    pub index: Option<u32>,
}

impl Chapter {
    /// Heading shown in chapter lists, e.g. `Chapter 3: The Gate`.
    pub fn display_title(&self) -> String {
        match self.index {
            Some(index) => format!("Chapter {index}: {}", self.title),
            None => format!("Chapter: {}", self.title),
        }
    }
}

/// Form input for a new story.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewStory {
    pub title: String,
    pub author: Option<String>,
    pub author_link: Option<String>,
    pub source: Option<String>,
}

/// Form input for a new chapter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewChapter {
    pub title: String,
    pub content: String,
    pub index: Option<u32>,
}

/// Partial edit of a chapter; `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChapterUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
    pub index: Option<u32>,
}

/// A chapter together with its story and reading-order neighbours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterView {
    pub story: Story,
    pub chapter: Chapter,
    pub previous: Option<Chapter>,
    pub next: Option<Chapter>,
}

/// Stored shape of a story, without the id.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct StoryFields<'a> {
    pub title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_link: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<&'a str>,
}

/// Stored shape of a chapter, without the id.
#[derive(Serialize)]
pub(crate) struct ChapterFields<'a> {
    pub title: &'a str,
    pub content: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<u32>,
}

/// Serializes a struct into a document field map.
pub(crate) fn to_fields<T: Serialize>(value: &T) -> Result<Fields, serde_json::Error> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        other => Err(serde::ser::Error::custom(format!(
            "expected an object, got {other}"
        ))),
    }
}

/// Decodes a record with its id merged into the fields.
pub(crate) fn from_record<T: DeserializeOwned>(record: Record) -> Result<T, serde_json::Error> {
    let mut fields = record.fields;
    fields.insert("id".to_string(), Value::String(record.id));
    serde_json::from_value(Value::Object(fields))
}
