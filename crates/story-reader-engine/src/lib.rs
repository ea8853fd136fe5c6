pub mod io;
pub mod library;
pub mod parsing;
pub mod progress;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use io::{FileKeyValueStore, IoError, load_library, read_chapter_file, validate_library_dir};
pub use library::{Chapter, ChapterView, Library, LibraryError, Story};
pub use parsing::{Block, Span, parse, scan_spans};
pub use progress::{KeyValueStore, ProgressTracker, ReadingProgress};
