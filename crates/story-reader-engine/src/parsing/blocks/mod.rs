//! # Block Parsing
//!
//! Block parsing works line by line:
//!
//! 1. **Classify** (`classify`): each line is classified from local facts
//!    only (divider, header, text, blank).
//! 2. **Build** (`builder`): each classification becomes exactly one
//!    [`Block`]; text lines are handed to the inline scanner.
//!
//! ## Modules
//!
//! - **`types`**: [`Block`] enum
//! - **`kinds`**: block types owning their markers (`Divider`, `Header`)
//! - **`classify`**: [`ChapterLineClassifier`] and [`LineClass`]
//! - **`builder`**: [`BlockBuilder`]

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{ChapterLineClassifier, LineClass};
pub use types::Block;
