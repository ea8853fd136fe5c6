use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Days a reading position is remembered unless configured otherwise.
pub const DEFAULT_PROGRESS_MAX_AGE_DAYS: u32 = 30;

pub const MIN_FONT_SIZE: u8 = 14;
pub const MAX_FONT_SIZE: u8 = 24;
pub const DEFAULT_FONT_SIZE: u8 = 18;

/// Terminal columns available at the default font size.
const BASE_COLUMNS: u16 = 80;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub library_path: PathBuf,
    #[serde(default = "default_progress_max_age_days")]
    pub progress_max_age_days: u32,
    /// Local user the reader signs in as. Only this user may create, rename
    /// or delete stories they own.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default)]
    pub reader: ReaderSettings,
}

fn default_progress_max_age_days() -> u32 {
    DEFAULT_PROGRESS_MAX_AGE_DAYS
}

/// Display preferences for the chapter view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderSettings {
    pub font_size: u8,
}

impl Default for ReaderSettings {
    fn default() -> Self {
        Self {
            font_size: DEFAULT_FONT_SIZE,
        }
    }
}

impl ReaderSettings {
    /// Sets the font size, clamped to the supported range.
    pub fn set_font_size(&mut self, size: u8) {
        self.font_size = size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
    }

    pub fn increase_font_size(&mut self) {
        self.set_font_size(self.font_size.saturating_add(1));
    }

    pub fn decrease_font_size(&mut self) {
        self.set_font_size(self.font_size.saturating_sub(1));
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Width of the reading column in terminal cells.
    ///
    /// Terminals cannot scale their font, so a larger size narrows the column
    /// instead: 80 cells at the default size, fewer above it, more below.
    pub fn column_width(&self) -> u16 {
        let size = u16::from(self.font_size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE));
        BASE_COLUMNS * u16::from(DEFAULT_FONT_SIZE) / size
    }
}

impl Config {
    pub fn new(library_path: PathBuf) -> Self {
        Self {
            library_path,
            progress_max_age_days: DEFAULT_PROGRESS_MAX_AGE_DAYS,
            user_id: None,
            reader: ReaderSettings::default(),
        }
    }

    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the loaded library path
        config.library_path =
            Self::expand_path(&config.library_path).unwrap_or(config.library_path);
        let font_size = config.reader.font_size;
        config.reader.set_font_size(font_size);

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_dir() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/story-reader");
        PathBuf::from(config_dir.as_ref())
    }

    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// File holding saved reading positions.
    pub fn progress_path() -> PathBuf {
        Self::config_dir().join("progress.json")
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
