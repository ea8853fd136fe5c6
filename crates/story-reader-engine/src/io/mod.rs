//! # Library Directory Import
//!
//! A library on disk is a directory with one folder per story. Each `*.txt`
//! file inside a story folder is a chapter. A leading number in the file name
//! becomes the chapter index and the rest becomes its title, so
//! `03 - The Gate.txt` is chapter 3, "The Gate".

mod kv_file;

pub use kv_file::FileKeyValueStore;

use std::fs;
use std::path::{Path, PathBuf};

use crate::library::models::{ChapterFields, StoryFields, to_fields};
use crate::library::{Library, LibraryError, MemoryDocumentStore, STORIES, chapters_collection};

/// Extension of chapter files.
pub const CHAPTER_EXTENSION: &str = "txt";

const TITLE_SEPARATORS: &[char] = &['-', '_', '.', ' '];

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid library directory: {0}")]
    InvalidLibraryDir(String),
    #[error("Failed to import {path}: {source}")]
    Library {
        path: PathBuf,
        source: LibraryError,
    },
}

/// Read a chapter file and return its content
pub fn read_chapter_file(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

pub fn validate_library_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidLibraryDir(
            "Directory does not exist".to_string(),
        ));
    }

    Ok(())
}

/// Splits a chapter file stem into its index and title.
///
/// A stem that is only a number keeps the number as its title.
pub fn chapter_from_file_stem(stem: &str) -> (Option<u32>, String) {
    let digits_end = stem
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(stem.len());
    let index = stem[..digits_end].parse().ok();
    let title = if index.is_some() {
        stem[digits_end..].trim_start_matches(TITLE_SEPARATORS).trim()
    } else {
        stem.trim()
    };

    if title.is_empty() {
        (index, stem.trim().to_string())
    } else {
        (index, title.to_string())
    }
}

/// Loads every story folder under `root` into an in-memory library.
///
/// Ids come from the file system so they stay the same between runs: a story
/// is keyed by its folder name and a chapter by its file stem. Stories and
/// chapters are imported in file name order, hidden entries are skipped and
/// imported stories have no owner.
pub fn load_library(root: &Path) -> Result<Library<MemoryDocumentStore>, IoError> {
    validate_library_dir(root)?;

    let mut store = MemoryDocumentStore::new();
    for story_dir in sorted_entries(root)? {
        if !story_dir.is_dir() {
            continue;
        }
        let Some(story_id) = visible_name(&story_dir) else {
            continue;
        };
        let title = story_id.trim();
        if title.is_empty() {
            log::warn!("Skipping story folder with blank name: {}", story_dir.display());
            continue;
        }

        let fields = to_fields(&StoryFields {
            title,
            created_by: None,
            created_at: None,
            author: None,
            author_link: None,
            source: None,
        })
        .map_err(|e| import_error(&story_dir, e))?;
        store.insert(STORIES, story_id, fields);

        let collection = chapters_collection(story_id);
        let mut imported = 0;
        for file in sorted_entries(&story_dir)? {
            if !is_chapter_file(&file) {
                continue;
            }
            let Some(stem) = file.file_stem().and_then(|s| s.to_str()) else {
                log::warn!("Skipping chapter with non UTF-8 name: {}", file.display());
                continue;
            };
            let (index, title) = chapter_from_file_stem(stem);
            if title.is_empty() {
                log::warn!("Skipping chapter with blank name: {}", file.display());
                continue;
            }
            let content = read_chapter_file(&file)?;
            let fields = to_fields(&ChapterFields {
                title: &title,
                content: &content,
                index,
            })
            .map_err(|e| import_error(&file, e))?;
            store.insert(&collection, stem, fields);
            imported += 1;
        }
        log::debug!("Imported story {title:?} with {imported} chapters");
    }

    Ok(Library::new(store))
}

fn import_error(path: &Path, source: serde_json::Error) -> IoError {
    IoError::Library {
        path: path.to_path_buf(),
        source: LibraryError::Encode(source),
    }
}

fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>, IoError> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(IoError::Io)? {
        paths.push(entry.map_err(IoError::Io)?.path());
    }
    paths.sort();
    Ok(paths)
}

fn visible_name(path: &Path) -> Option<&str> {
    path.file_name()
        .and_then(|name| name.to_str())
        .filter(|name| !name.starts_with('.'))
}

fn is_chapter_file(path: &Path) -> bool {
    path.is_file()
        && visible_name(path).is_some()
        && path
            .extension()
            .is_some_and(|ext| ext == CHAPTER_EXTENSION)
}
