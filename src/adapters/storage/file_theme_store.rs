//! File-based Theme Store Adapter
//!
//! Persists the color-scheme preference as a small JSON file.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::theme::ColorScheme;
use crate::ports::{ThemeStore, ThemeStoreError};

/// On-disk shape of the preference file.
#[derive(Debug, Serialize, Deserialize)]
struct StoredPreference {
    scheme: ColorScheme,
}

/// Theme store backed by a JSON file.
#[derive(Debug, Clone)]
pub struct FileThemeStore {
    path: PathBuf,
}

impl FileThemeStore {
    /// Creates a store persisting to the given path.
    ///
    /// Parent directories are created on first save.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// The file this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ThemeStore for FileThemeStore {
    fn load(&self) -> Result<Option<ColorScheme>, ThemeStoreError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let json =
            fs::read_to_string(&self.path).map_err(|e| ThemeStoreError::Io(e.to_string()))?;

        let stored: StoredPreference = serde_json::from_str(&json)
            .map_err(|e| ThemeStoreError::DeserializationFailed(e.to_string()))?;

        Ok(Some(stored.scheme))
    }

    fn save(&self, scheme: ColorScheme) -> Result<(), ThemeStoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| ThemeStoreError::Io(e.to_string()))?;
        }

        let json = serde_json::to_string_pretty(&StoredPreference { scheme })
            .map_err(|e| ThemeStoreError::SerializationFailed(e.to_string()))?;

        fs::write(&self.path, json).map_err(|e| ThemeStoreError::Io(e.to_string()))
    }
}
