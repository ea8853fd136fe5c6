use chrono::Utc;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::{
    error::LibraryError,
    models::{
        Chapter, ChapterFields, ChapterUpdate, ChapterView, NewChapter, NewStory, Story,
        StoryFields, from_record, to_fields,
    },
    store::{DocumentStore, Fields, Record, STORIES, StoreError, chapters_collection},
};

/// Sorts chapters into reading order.
///
/// Chapters with an index come first, ascending; chapters without one follow.
/// Ties are broken by title.
pub fn sort_chapters(chapters: &mut [Chapter]) {
    chapters.sort_by(|a, b| {
        (a.index.is_none(), a.index)
            .cmp(&(b.index.is_none(), b.index))
            .then_with(|| a.title.cmp(&b.title))
    });
}

fn decode<T: DeserializeOwned>(record: Record) -> Result<T, LibraryError> {
    let id = record.id.clone();
    from_record(record).map_err(|source| LibraryError::Malformed { id, source })
}

fn non_blank(title: &str) -> Result<&str, LibraryError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(LibraryError::BlankTitle);
    }
    Ok(title)
}

/// Trimmed optional form field; blank counts as absent.
fn optional(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Story and chapter operations over a [`DocumentStore`].
///
/// Operations that change data take the caller's user id (from an
/// [`IdentityProvider`](super::IdentityProvider)) and check ownership first.
#[derive(Debug)]
pub struct Library<D> {
    store: D,
}

impl<D: DocumentStore> Library<D> {
    pub fn new(store: D) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &D {
        &self.store
    }

    pub fn into_store(self) -> D {
        self.store
    }

    /// True iff `user_id` is signed in and owns `story`.
    pub fn can_manage(user_id: Option<&str>, story: &Story) -> bool {
        matches!(
            (user_id, story.created_by.as_deref()),
            (Some(user), Some(owner)) if user == owner
        )
    }

    pub fn list_stories(&self) -> Result<Vec<Story>, LibraryError> {
        self.store
            .fetch_all(STORIES)?
            .into_iter()
            .map(decode)
            .collect()
    }

    pub fn story(&self, story_id: &str) -> Result<Option<Story>, LibraryError> {
        self.store
            .fetch_one(STORIES, story_id)?
            .map(decode)
            .transpose()
    }

    /// Creates a story owned by `user_id` and returns its id.
    ///
    /// Every field is trimmed; blank optional fields are left out.
    pub fn create_story(
        &mut self,
        user_id: Option<&str>,
        new: &NewStory,
    ) -> Result<String, LibraryError> {
        let user_id = user_id.ok_or(LibraryError::NotSignedIn)?;
        let title = non_blank(&new.title)?;

        let fields = to_fields(&StoryFields {
            title,
            created_by: Some(user_id),
            created_at: Some(Utc::now()),
            author: optional(&new.author),
            author_link: optional(&new.author_link),
            source: optional(&new.source),
        })
        .map_err(LibraryError::Encode)?;

        let id = self.store.create(STORIES, fields)?;
        log::info!("Created story {id} ({title})");
        Ok(id)
    }

    pub fn rename_story(
        &mut self,
        user_id: Option<&str>,
        story_id: &str,
        title: &str,
    ) -> Result<(), LibraryError> {
        self.managed_story(user_id, story_id)?;
        let title = non_blank(title)?;

        let mut fields = Fields::new();
        fields.insert("title".to_string(), Value::from(title));
        self.store.update(STORIES, story_id, fields)?;
        Ok(())
    }

    /// Deletes a story and all of its chapters. Returns how many chapters went with it.
    pub fn delete_story(
        &mut self,
        user_id: Option<&str>,
        story_id: &str,
    ) -> Result<usize, LibraryError> {
        self.managed_story(user_id, story_id)?;

        let collection = chapters_collection(story_id);
        let chapters = self.store.fetch_all(&collection)?;
        for chapter in &chapters {
            self.store.delete(&collection, &chapter.id)?;
        }
        self.store.delete(STORIES, story_id)?;

        log::info!("Deleted story {story_id} with {} chapters", chapters.len());
        Ok(chapters.len())
    }

    /// All chapters of a story in reading order.
    pub fn chapters(&self, story_id: &str) -> Result<Vec<Chapter>, LibraryError> {
        let mut chapters = self
            .store
            .fetch_all(&chapters_collection(story_id))?
            .into_iter()
            .map(decode)
            .collect::<Result<Vec<Chapter>, _>>()?;
        sort_chapters(&mut chapters);
        Ok(chapters)
    }

    pub fn chapter_count(&self, story_id: &str) -> Result<usize, LibraryError> {
        Ok(self.store.count(&chapters_collection(story_id))?)
    }

    /// A chapter with its story and its neighbours in reading order.
    ///
    /// `None` if either the story or the chapter does not exist.
    pub fn chapter(
        &self,
        story_id: &str,
        chapter_id: &str,
    ) -> Result<Option<ChapterView>, LibraryError> {
        let Some(story) = self.story(story_id)? else {
            return Ok(None);
        };
        let mut chapters = self.chapters(story_id)?;
        let Some(pos) = chapters.iter().position(|c| c.id == chapter_id) else {
            return Ok(None);
        };

        let previous = pos.checked_sub(1).and_then(|i| chapters.get(i)).cloned();
        let next = chapters.get(pos + 1).cloned();
        let chapter = chapters.swap_remove(pos);

        Ok(Some(ChapterView {
            story,
            chapter,
            previous,
            next,
        }))
    }

    pub fn add_chapter(
        &mut self,
        user_id: Option<&str>,
        story_id: &str,
        new: &NewChapter,
    ) -> Result<String, LibraryError> {
        self.managed_story(user_id, story_id)?;
        self.insert_chapter(story_id, new)
    }

    pub fn update_chapter(
        &mut self,
        user_id: Option<&str>,
        story_id: &str,
        chapter_id: &str,
        update: &ChapterUpdate,
    ) -> Result<(), LibraryError> {
        self.managed_story(user_id, story_id)?;

        let mut fields = Fields::new();
        if let Some(title) = &update.title {
            fields.insert("title".to_string(), Value::from(non_blank(title)?));
        }
        if let Some(content) = &update.content {
            fields.insert("content".to_string(), Value::from(content.as_str()));
        }
        if let Some(index) = update.index {
            fields.insert("index".to_string(), Value::from(index));
        }

        self.store
            .update(&chapters_collection(story_id), chapter_id, fields)
            .map_err(|e| chapter_error(e, chapter_id))
    }

    pub fn delete_chapter(
        &mut self,
        user_id: Option<&str>,
        story_id: &str,
        chapter_id: &str,
    ) -> Result<(), LibraryError> {
        self.managed_story(user_id, story_id)?;
        self.store
            .delete(&chapters_collection(story_id), chapter_id)
            .map_err(|e| chapter_error(e, chapter_id))
    }

    fn insert_chapter(
        &mut self,
        story_id: &str,
        new: &NewChapter,
    ) -> Result<String, LibraryError> {
        let fields = to_fields(&ChapterFields {
            title: non_blank(&new.title)?,
            content: &new.content,
            index: new.index,
        })
        .map_err(LibraryError::Encode)?;
        Ok(self.store.create(&chapters_collection(story_id), fields)?)
    }

    fn managed_story(&self, user_id: Option<&str>, story_id: &str) -> Result<Story, LibraryError> {
        if user_id.is_none() {
            return Err(LibraryError::NotSignedIn);
        }
        let story = self
            .story(story_id)?
            .ok_or_else(|| LibraryError::StoryNotFound(story_id.to_string()))?;
        if !Self::can_manage(user_id, &story) {
            return Err(LibraryError::NotPermitted {
                story_id: story_id.to_string(),
            });
        }
        Ok(story)
    }
}

fn chapter_error(e: StoreError, chapter_id: &str) -> LibraryError {
    match e {
        StoreError::NotFound { .. } => LibraryError::ChapterNotFound(chapter_id.to_string()),
        other => LibraryError::Store(other),
    }
}
