//! Key-value store abstraction
//!
//! The persistence adapter is written against this narrow get/set/remove
//! interface so the rest of the crate stays testable without touching the
//! real filesystem.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::BudgetError;

/// A minimal string key-value store
pub trait KeyValueStore {
    /// Read the value under `key`, if any
    fn get(&self, key: &str) -> Result<Option<String>, BudgetError>;

    /// Write `value` under `key`, overwriting any prior value
    fn set(&self, key: &str, value: &str) -> Result<(), BudgetError>;

    /// Remove `key` if present; removing an absent key is not an error
    fn remove(&self, key: &str) -> Result<(), BudgetError>;
}

/// In-memory store for tests and ephemeral sessions
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, BudgetError> {
        let entries = self
            .entries
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), BudgetError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), BudgetError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_unset_key() {
        let store = MemoryStore::new();
        assert_eq!(store.get("missing").unwrap(), None);
    }

    #[test]
    fn test_set_get_overwrite() {
        let store = MemoryStore::new();
        store.set("k", "v1").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v1"));

        store.set("k", "v2").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v2"));
    }

    #[test]
    fn test_remove_is_idempotent() {
        let store = MemoryStore::new();
        store.set("k", "v").unwrap();

        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);

        // Removing again is a no-op, not an error
        store.remove("k").unwrap();
    }
}
