//! # Reading Progress
//!
//! Remembers where a reader is in each story, on top of any
//! [`KeyValueStore`]. Entries are JSON under `reading-progress-{story_id}`
//! and expire after 30 days by default.

pub mod model;
pub mod store;
pub mod tracker;

pub use model::ReadingProgress;
pub use store::{KeyValueStore, MemoryKeyValueStore, StorageError};
pub use tracker::{MAX_AGE_DAYS, ProgressTracker, STORAGE_PREFIX};
