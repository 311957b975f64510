//! Key-value persistence for Musika search state.
//!
//! This crate provides:
//! - An object-safe [`KeyValueStore`] trait the search engine depends on
//! - A typed [`StoreExt`] extension for serde round-trips
//! - [`JsonFileStore`]: one JSON document per key on disk
//! - [`MemoryStore`]: thread-safe ephemeral store for tests and sessions
//!
//! # Example
//!
//! ```
//! use musika_storage::{MemoryStore, StoreExt};
//!
//! let store = MemoryStore::new();
//! store.set("greeting", &"mhoro".to_string()).unwrap();
//!
//! let value: Option<String> = store.get("greeting").unwrap();
//! assert_eq!(value.as_deref(), Some("mhoro"));
//! ```

#![warn(missing_docs)]

mod error;
mod json;
mod memory;

pub use error::{Result, StorageError};
pub use json::JsonFileStore;
pub use memory::MemoryStore;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

/// Object-safe key-value store contract.
///
/// Implementations exchange raw [`serde_json::Value`]s so the trait can be
/// used as `dyn KeyValueStore`; typed access goes through [`StoreExt`].
/// Absence of a key is `Ok(None)`, never an error.
pub trait KeyValueStore: Send + Sync {
    /// Fetch the raw value stored under `key`, or `None` when absent.
    fn get_raw(&self, key: &str) -> Result<Option<Value>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set_raw(&self, key: &str, value: Value) -> Result<()>;
}

/// Typed access on top of any [`KeyValueStore`], including trait objects.
pub trait StoreExt {
    /// Fetch and deserialize the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error when the store fails or the stored value does not
    /// deserialize into `T`.
    fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>>;

    /// Serialize `value` and store it under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error when serialization or the store itself fails.
    fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> StoreExt for S {
    fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.get_raw(key)? {
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => Ok(None),
        }
    }

    fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        self.set_raw(key, serde_json::to_value(value)?)
    }
}
