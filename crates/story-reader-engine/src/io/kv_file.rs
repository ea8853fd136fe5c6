use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::progress::{KeyValueStore, StorageError};

const TMP_EXTENSION: &str = "json.tmp";
const CORRUPT_EXTENSION: &str = "json.corrupt";

/// Key-value store persisted as one JSON object on disk.
///
/// The whole file is rewritten on every change; it only ever holds a handful
/// of reading progress entries.
#[derive(Debug)]
pub struct FileKeyValueStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileKeyValueStore {
    /// Opens the store at `path`. A missing file is an empty store.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StorageError> {
        let path = path.as_ref().to_path_buf();
        let entries = if path.exists() {
            let content = fs::read_to_string(&path).map_err(|source| StorageError::Io {
                path: path.clone(),
                source,
            })?;
            serde_json::from_str(&content)?
        } else {
            BTreeMap::new()
        };
        log::debug!(
            "Opened key-value store at {} with {} entries",
            path.display(),
            entries.len()
        );
        Ok(Self { path, entries })
    }

    /// Opens the store at `path`, starting empty if the file cannot be used.
    ///
    /// An unreadable or corrupt file is moved aside to `*.json.corrupt` so the
    /// next save does not overwrite it, and the failure is logged.
    pub fn open_or_reset<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        match Self::open(&path) {
            Ok(store) => store,
            Err(e) => {
                log::warn!("Ignoring unusable store at {}: {e}", path.display());
                let aside = path.with_extension(CORRUPT_EXTENSION);
                if let Err(e) = fs::rename(&path, &aside) {
                    log::warn!("Failed to move {} aside: {e}", path.display());
                }
                Self {
                    path,
                    entries: BTreeMap::new(),
                }
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes the entries to a temp file next to the store, then renames it
    /// over the store so a crash mid-write leaves the old file intact.
    fn persist(&self) -> Result<(), StorageError> {
        let io_err = |source| StorageError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let content = serde_json::to_string_pretty(&self.entries)?;
        let tmp_path = self.path.with_extension(TMP_EXTENSION);
        fs::write(&tmp_path, content).map_err(io_err)?;
        fs::rename(&tmp_path, &self.path).map_err(io_err)
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn set(&mut self, key: &str, value: String) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value);
        self.persist()
    }

    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        if self.entries.remove(key).is_some() {
            self.persist()?;
        }
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, StorageError> {
        Ok(self.entries.keys().cloned().collect())
    }
}
