//! # Library
//!
//! Stories and chapters kept in an external document database, plus the
//! identity that decides who may change them.
//!
//! - **`store`**: [`DocumentStore`] boundary and [`MemoryDocumentStore`]
//! - **`identity`**: [`IdentityProvider`] boundary, [`LocalIdentity`] and
//!   cancellable [`Subscription`]s
//! - **`models`**: [`Story`], [`Chapter`] and form inputs
//! - **`service`**: [`Library`] operations with ownership checks

pub mod error;
pub mod identity;
pub mod models;
pub mod service;
pub mod store;

pub use error::LibraryError;
pub use identity::{IdentityProvider, Listener, LocalIdentity, Subscription};
pub use models::{Chapter, ChapterUpdate, ChapterView, NewChapter, NewStory, Story};
pub use service::{Library, sort_chapters};
pub use store::{
    DocumentStore, Fields, MemoryDocumentStore, Record, STORIES, StoreError, chapters_collection,
};
