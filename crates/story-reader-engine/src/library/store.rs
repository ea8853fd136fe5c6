use std::collections::BTreeMap;

use serde_json::{Map, Value};

/// Field map of a stored document.
pub type Fields = Map<String, Value>;

/// Collection holding every story.
pub const STORIES: &str = "stories";

/// Collection holding the chapters of one story.
pub fn chapters_collection(story_id: &str) -> String {
    format!("{STORIES}/{story_id}/chapters")
}

/// A stored document: its generated id plus its fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub id: String,
    pub fields: Fields,
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("No document {id} in {collection}")]
    NotFound { collection: String, id: String },
    #[error("Document store unavailable: {0}")]
    Unavailable(String),
}

/// Boundary to the remote document database.
///
/// Collections are slash-separated paths (see [`STORIES`] and
/// [`chapters_collection`]). Each call is a single request with no implied
/// transaction across calls.
pub trait DocumentStore {
    /// All documents in `collection`, in storage order. A missing collection is empty.
    fn fetch_all(&self, collection: &str) -> Result<Vec<Record>, StoreError>;
    fn fetch_one(&self, collection: &str, id: &str) -> Result<Option<Record>, StoreError>;
    /// Stores a new document and returns its generated id.
    fn create(&mut self, collection: &str, fields: Fields) -> Result<String, StoreError>;
    /// Merges `fields` into an existing document. A `null` value removes the field.
    fn update(&mut self, collection: &str, id: &str, fields: Fields) -> Result<(), StoreError>;
    fn delete(&mut self, collection: &str, id: &str) -> Result<(), StoreError>;
    fn count(&self, collection: &str) -> Result<usize, StoreError>;
}

/// Document store kept in process memory, with uuid ids.
#[derive(Debug, Default, Clone)]
pub struct MemoryDocumentStore {
    collections: BTreeMap<String, Vec<Record>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a document under a caller-chosen id, replacing any document
    /// that already has it.
    pub fn insert(&mut self, collection: &str, id: &str, fields: Fields) {
        let records = self.collections.entry(collection.to_string()).or_default();
        let record = Record {
            id: id.to_string(),
            fields,
        };
        match records.iter_mut().find(|r| r.id == id) {
            Some(existing) => *existing = record,
            None => records.push(record),
        }
    }

    fn find_mut(&mut self, collection: &str, id: &str) -> Result<&mut Record, StoreError> {
        self.collections
            .get_mut(collection)
            .and_then(|records| records.iter_mut().find(|r| r.id == id))
            .ok_or_else(|| not_found(collection, id))
    }
}

fn not_found(collection: &str, id: &str) -> StoreError {
    StoreError::NotFound {
        collection: collection.to_string(),
        id: id.to_string(),
    }
}

impl DocumentStore for MemoryDocumentStore {
    fn fetch_all(&self, collection: &str) -> Result<Vec<Record>, StoreError> {
        Ok(self.collections.get(collection).cloned().unwrap_or_default())
    }

    fn fetch_one(&self, collection: &str, id: &str) -> Result<Option<Record>, StoreError> {
        Ok(self
            .collections
            .get(collection)
            .and_then(|records| records.iter().find(|r| r.id == id))
            .cloned())
    }

    fn create(&mut self, collection: &str, fields: Fields) -> Result<String, StoreError> {
        let id = uuid::Uuid::new_v4().simple().to_string();
        self.collections
            .entry(collection.to_string())
            .or_default()
            .push(Record {
                id: id.clone(),
                fields,
            });
        Ok(id)
    }

    fn update(&mut self, collection: &str, id: &str, fields: Fields) -> Result<(), StoreError> {
        let record = self.find_mut(collection, id)?;
        for (key, value) in fields {
            if value.is_null() {
                record.fields.remove(&key);
            } else {
                record.fields.insert(key, value);
            }
        }
        Ok(())
    }

    fn delete(&mut self, collection: &str, id: &str) -> Result<(), StoreError> {
        let records = self
            .collections
            .get_mut(collection)
            .ok_or_else(|| not_found(collection, id))?;
        let pos = records
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| not_found(collection, id))?;
        records.remove(pos);
        Ok(())
    }

    fn count(&self, collection: &str) -> Result<usize, StoreError> {
        Ok(self.collections.get(collection).map_or(0, Vec::len))
    }
}
