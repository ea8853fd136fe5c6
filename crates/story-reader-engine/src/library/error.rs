use super::store::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum LibraryError {
    #[error("Sign in to manage stories")]
    NotSignedIn,
    #[error("Only the owner of story {story_id} can change it")]
    NotPermitted { story_id: String },
    #[error("Title must not be blank")]
    BlankTitle,
    #[error("Story not found: {0}")]
    StoryNotFound(String),
    #[error("Chapter not found: {0}")]
    ChapterNotFound(String),
    #[error("Document store error: {0}")]
    Store(#[from] StoreError),
    #[error("Failed to encode record: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("Malformed record {id}: {source}")]
    Malformed {
        id: String,
        source: serde_json::Error,
    },
}
