//! Key-value store abstraction
//!
//! The persistence collaborator is a plain key-value store of JSON strings.
//! Each budget collection is stored whole under a fixed key.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::{TallyError, TallyResult};

/// A key-value store of serialized JSON collections
pub trait KeyValueStore {
    /// Fetch the value for a key, if one has been stored
    fn get(&self, key: &str) -> TallyResult<Option<String>>;

    /// Store a value under a key, replacing any previous value
    fn set(&self, key: &str, value: &str) -> TallyResult<()>;
}

/// In-memory store backed by a map, used in tests
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> TallyResult<Option<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> TallyResult<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_missing_key() {
        let store = MemoryStore::new();
        assert_eq!(store.get("absent").unwrap(), None);
    }

    #[test]
    fn test_set_and_get() {
        let store = MemoryStore::new();
        store.set("budget-income", r#"{"monthly":300000}"#).unwrap();

        assert_eq!(
            store.get("budget-income").unwrap().as_deref(),
            Some(r#"{"monthly":300000}"#)
        );
    }

    #[test]
    fn test_set_replaces_value() {
        let store = MemoryStore::new();
        store.set("key", "one").unwrap();
        store.set("key", "two").unwrap();

        assert_eq!(store.get("key").unwrap().as_deref(), Some("two"));
    }
}
