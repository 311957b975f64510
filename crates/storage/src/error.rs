//! Error types for storage operations.

use thiserror::Error;

/// Errors that can occur while reading or writing a store.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying file I/O failed
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A value could not be serialized or deserialized
    #[error("Storage serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// The key cannot be mapped to a storage location
    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    /// A store lock was poisoned by a panicking writer
    #[error("Failed to acquire store {0} lock")]
    Lock(&'static str),
}

/// Convenience alias for storage results.
pub type Result<T> = std::result::Result<T, StorageError>;
