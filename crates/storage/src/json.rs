//! File-backed store, one pretty-printed JSON document per key.

use std::fs;
use std::path::PathBuf;

use serde_json::Value;
use tracing::debug;

use crate::error::{Result, StorageError};
use crate::KeyValueStore;

/// Persists each key as a JSON file in one directory.
///
/// Keys are sanitized to safe file names, so distinct keys that sanitize to
/// the same name share a file. Callers use plain identifiers like
/// `search_history`, which pass through unchanged.
#[derive(Debug)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Create a store rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error when the directory cannot be created.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Create a store under the platform data directory.
    ///
    /// Falls back to a `.musika` directory in the working directory when the
    /// platform has no data directory.
    ///
    /// # Errors
    ///
    /// Returns an error when the directory cannot be created.
    pub fn default_store() -> Result<Self> {
        let dir = match dirs::data_dir() {
            Some(base) => base.join("musika"),
            None => PathBuf::from(".musika"),
        };
        Self::new(dir)
    }

    /// Directory this store writes into.
    #[must_use]
    pub fn dir(&self) -> &std::path::Path {
        &self.dir
    }

    fn key_path(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty() {
            return Err(StorageError::InvalidKey("empty key".to_string()));
        }

        let safe: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();

        Ok(self.dir.join(format!("{safe}.json")))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get_raw(&self, key: &str) -> Result<Option<Value>> {
        let path = self.key_path(key)?;
        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&path)?;
        let value: Value = serde_json::from_str(&contents)?;
        debug!(key, path = %path.display(), "Loaded value from disk");
        Ok(Some(value))
    }

    fn set_raw(&self, key: &str, value: Value) -> Result<()> {
        let path = self.key_path(key)?;
        fs::write(&path, serde_json::to_string_pretty(&value)?)?;
        debug!(key, path = %path.display(), "Saved value to disk");
        Ok(())
    }
}
