//! In-memory store for tests and ephemeral sessions.

use std::collections::HashMap;
use std::sync::RwLock;

use serde_json::Value;

use crate::error::{Result, StorageError};
use crate::KeyValueStore;

/// Thread-safe in-memory store. Contents are lost on drop.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, Value>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently held.
    ///
    /// # Errors
    ///
    /// Returns an error when the store lock is poisoned.
    pub fn len(&self) -> Result<usize> {
        let guard = self
            .entries
            .read()
            .map_err(|_| StorageError::Lock("read"))?;
        Ok(guard.len())
    }

    /// Whether the store holds no keys.
    ///
    /// # Errors
    ///
    /// Returns an error when the store lock is poisoned.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

impl KeyValueStore for MemoryStore {
    fn get_raw(&self, key: &str) -> Result<Option<Value>> {
        let guard = self
            .entries
            .read()
            .map_err(|_| StorageError::Lock("read"))?;
        Ok(guard.get(key).cloned())
    }

    fn set_raw(&self, key: &str, value: Value) -> Result<()> {
        let mut guard = self
            .entries
            .write()
            .map_err(|_| StorageError::Lock("write"))?;
        guard.insert(key.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_set_and_get() {
        let store = MemoryStore::new();

        store.set_raw("key", json!({"a": 1})).unwrap();
        let value = store.get_raw("key").unwrap();

        assert_eq!(value, Some(json!({"a": 1})));
    }

    #[test]
    fn test_overwrite_replaces_value() {
        let store = MemoryStore::new();

        store.set_raw("key", json!(1)).unwrap();
        store.set_raw("key", json!(2)).unwrap();

        assert_eq!(store.get_raw("key").unwrap(), Some(json!(2)));
        assert_eq!(store.len().unwrap(), 1);
    }

    #[test]
    fn test_get_missing() {
        let store = MemoryStore::new();
        assert!(store.get_raw("nothing").unwrap().is_none());
        assert!(store.is_empty().unwrap());
    }
}
