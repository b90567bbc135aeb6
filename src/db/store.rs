//! Key-value persistence port and an in-memory adapter.

use std::collections::HashMap;

use tracing::{debug, instrument};

use crate::db::StoreError;

/// Minimal durable key-value storage.
///
/// Values are opaque strings; callers own the serialization format.
pub trait KeyValueStore {
    /// Reads the value under `key`, or `None` if nothing is stored.
    fn get(&mut self, key: &str) -> Result<Option<String>, StoreError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Process-local store backed by a `HashMap`.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding one entry.
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.into(), value.into());
        Self { entries }
    }

    /// Reads without requiring mutable access.
    pub fn peek(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    #[instrument(skip(self))]
    fn get(&mut self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    #[instrument(skip(self, value))]
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        debug!(bytes = value.len(), "Storing entry in memory");
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
