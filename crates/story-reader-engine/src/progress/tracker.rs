use std::collections::BTreeMap;

use chrono::{DateTime, TimeDelta, Utc};

use crate::library::Chapter;

use super::{
    model::ReadingProgress,
    store::{KeyValueStore, StorageError},
};

/// Key prefix for progress entries; the story id follows it.
pub const STORAGE_PREFIX: &str = "reading-progress-";

/// Entries older than this many days are treated as gone.
pub const MAX_AGE_DAYS: i64 = 30;

/// Reads and writes [`ReadingProgress`] entries with an expiry policy.
///
/// Expired entries are removed lazily whenever they are read, and eagerly by
/// [`ProgressTracker::cleanup_expired`]. Every read has an `_at` variant taking
/// the current time explicitly.
#[derive(Debug)]
pub struct ProgressTracker<S> {
    store: S,
    max_age: TimeDelta,
}

impl<S: KeyValueStore> ProgressTracker<S> {
    pub fn new(store: S) -> Self {
        Self::with_max_age(store, TimeDelta::days(MAX_AGE_DAYS))
    }

    pub fn with_max_age(store: S, max_age: TimeDelta) -> Self {
        Self { store, max_age }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    fn key(story_id: &str) -> String {
        format!("{STORAGE_PREFIX}{story_id}")
    }

    fn is_expired(&self, progress: &ReadingProgress, now: DateTime<Utc>) -> bool {
        now.signed_duration_since(progress.timestamp) > self.max_age
    }

    /// Decodes a stored entry. Undecodable entries are logged and read as absent.
    fn decode(story_id: &str, raw: &str) -> Option<ReadingProgress> {
        match serde_json::from_str(raw) {
            Ok(progress) => Some(progress),
            Err(e) => {
                log::warn!("Ignoring unreadable reading progress for story {story_id}: {e}");
                None
            }
        }
    }

    pub fn save(&mut self, story_id: &str, progress: &ReadingProgress) -> Result<(), StorageError> {
        let value = serde_json::to_string(progress)?;
        self.store.set(&Self::key(story_id), value)
    }

    pub fn get(&mut self, story_id: &str) -> Result<Option<ReadingProgress>, StorageError> {
        self.get_at(story_id, Utc::now())
    }

    /// Returns the live entry for `story_id`, removing it if it has expired.
    pub fn get_at(
        &mut self,
        story_id: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<ReadingProgress>, StorageError> {
        let Some(raw) = self.store.get(&Self::key(story_id))? else {
            return Ok(None);
        };
        let Some(progress) = Self::decode(story_id, &raw) else {
            return Ok(None);
        };

        if self.is_expired(&progress, now) {
            log::debug!("Reading progress for story {story_id} expired");
            self.clear(story_id)?;
            return Ok(None);
        }

        Ok(Some(progress))
    }

    pub fn clear(&mut self, story_id: &str) -> Result<(), StorageError> {
        self.store.remove(&Self::key(story_id))
    }

    pub fn all(&mut self) -> Result<BTreeMap<String, ReadingProgress>, StorageError> {
        self.all_at(Utc::now())
    }

    /// Every live entry keyed by story id. Expired entries are removed on the way.
    pub fn all_at(
        &mut self,
        now: DateTime<Utc>,
    ) -> Result<BTreeMap<String, ReadingProgress>, StorageError> {
        let mut all = BTreeMap::new();
        for story_id in self.story_ids()? {
            if let Some(progress) = self.get_at(&story_id, now)? {
                all.insert(story_id, progress);
            }
        }
        Ok(all)
    }

    pub fn cleanup_expired(&mut self) -> Result<usize, StorageError> {
        self.cleanup_expired_at(Utc::now())
    }

    /// Removes expired entries and returns how many were removed.
    pub fn cleanup_expired_at(&mut self, now: DateTime<Utc>) -> Result<usize, StorageError> {
        let mut removed = 0;
        for story_id in self.story_ids()? {
            let Some(raw) = self.store.get(&Self::key(&story_id))? else {
                continue;
            };
            if let Some(progress) = Self::decode(&story_id, &raw)
                && self.is_expired(&progress, now)
            {
                self.clear(&story_id)?;
                removed += 1;
            }
        }
        if removed > 0 {
            log::info!("Removed {removed} expired reading progress entries");
        }
        Ok(removed)
    }

    pub fn record_position(
        &mut self,
        story_id: &str,
        chapter: &Chapter,
        position: u32,
    ) -> Result<ReadingProgress, StorageError> {
        self.record_position_at(story_id, chapter, position, Utc::now())
    }

    /// Records that the reader is at `position` in `chapter`.
    ///
    /// Within the same chapter the stored position only moves forward. Moving
    /// to a different chapter replaces the entry. The timestamp is refreshed
    /// either way.
    pub fn record_position_at(
        &mut self,
        story_id: &str,
        chapter: &Chapter,
        position: u32,
        now: DateTime<Utc>,
    ) -> Result<ReadingProgress, StorageError> {
        let mut progress = match self.get_at(story_id, now)? {
            Some(existing) if existing.chapter_id == chapter.id => existing,
            _ => ReadingProgress::for_chapter(chapter, now),
        };

        progress.chapter_title = chapter.title.clone();
        progress.chapter_index = chapter.index;
        progress.timestamp = now;
        progress.scroll_position = Some(
            progress
                .scroll_position
                .map_or(position, |p| p.max(position)),
        );

        self.save(story_id, &progress)?;
        Ok(progress)
    }

    fn story_ids(&self) -> Result<Vec<String>, StorageError> {
        Ok(self
            .store
            .keys()?
            .into_iter()
            .filter_map(|k| k.strip_prefix(STORAGE_PREFIX).map(str::to_string))
            .collect())
    }
}
