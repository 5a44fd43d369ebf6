//! Key-value store collaborator.

use rustc_hash::FxHashMap;
use thiserror::Error;

/// Failures a store backend can report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No storage is available at all.
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// The key exists but could not be read.
    #[error("failed to read {key}: {reason}")]
    Read { key: String, reason: String },

    /// The value could not be written.
    #[error("failed to write {key}: {reason}")]
    Write { key: String, reason: String },
}

/// String key-value storage.
pub trait RecordStore {
    /// Read a value; `Ok(None)` when the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write a value, replacing any existing one.
    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError>;
}

/// In-memory store, the default for headless hosts and tests.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: FxHashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store preloaded with one entry.
    #[must_use]
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Raw value under a key.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl RecordStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}
