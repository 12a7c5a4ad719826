//! File-backed key-value store with atomic writes
//!
//! Each key maps to one file in the data directory. Writes go to a temp file
//! first and are renamed into place, so a crash mid-write never corrupts a
//! previously saved value.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::BudgetError;

use super::kv::KeyValueStore;

/// Key-value store persisting each key as `<dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `dir`, creating the directory if needed
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, BudgetError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| {
            BudgetError::Storage(format!(
                "Failed to create store directory {}: {}",
                dir.display(),
                e
            ))
        })?;
        Ok(Self { dir })
    }

    /// The directory this store writes into
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, BudgetError> {
        // Keys become file names, so restrict them to path-safe characters
        let safe = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));
        if !safe {
            return Err(BudgetError::Storage(format!("Invalid store key: {:?}", key)));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, BudgetError> {
        let path = self.path_for(key)?;

        if !path.exists() {
            return Ok(None);
        }

        let value = fs::read_to_string(&path).map_err(|e| {
            BudgetError::Storage(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Ok(Some(value))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), BudgetError> {
        let path = self.path_for(key)?;

        // Temp file in the same directory, so the rename stays atomic
        let temp_path = path.with_extension("json.tmp");

        let file = File::create(&temp_path)
            .map_err(|e| BudgetError::Storage(format!("Failed to create temp file: {}", e)))?;

        let mut writer = BufWriter::new(file);
        writer
            .write_all(value.as_bytes())
            .map_err(|e| BudgetError::Storage(format!("Failed to write data: {}", e)))?;

        writer
            .flush()
            .map_err(|e| BudgetError::Storage(format!("Failed to flush data: {}", e)))?;

        // Sync to disk before rename
        writer
            .get_ref()
            .sync_all()
            .map_err(|e| BudgetError::Storage(format!("Failed to sync data: {}", e)))?;

        fs::rename(&temp_path, &path).map_err(|e| {
            // Try to clean up temp file if rename fails
            let _ = fs::remove_file(&temp_path);
            BudgetError::Storage(format!("Failed to rename temp file: {}", e))
        })?;

        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), BudgetError> {
        let path = self.path_for(key)?;

        if !path.exists() {
            return Ok(());
        }

        fs::remove_file(&path).map_err(|e| {
            BudgetError::Storage(format!("Failed to remove {}: {}", path.display(), e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_get_missing_key() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::open(temp_dir.path()).unwrap();

        assert_eq!(store.get("missing").unwrap(), None);
    }

    #[test]
    fn test_set_and_get() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::open(temp_dir.path()).unwrap();

        store.set("budget", r#"{"buckets":[]}"#).unwrap();
        assert_eq!(
            store.get("budget").unwrap().as_deref(),
            Some(r#"{"buckets":[]}"#)
        );
        assert!(temp_dir.path().join("budget.json").exists());
    }

    #[test]
    fn test_atomic_write_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::open(temp_dir.path()).unwrap();

        store.set("state", "value").unwrap();

        assert!(temp_dir.path().join("state.json").exists());
        assert!(!temp_dir.path().join("state.json.tmp").exists());
    }

    #[test]
    fn test_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::open(temp_dir.path()).unwrap();

        store.set("k", "old").unwrap();
        store.set("k", "new").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("new"));
    }

    #[test]
    fn test_remove() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::open(temp_dir.path()).unwrap();

        store.set("k", "v").unwrap();
        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);

        // Removing an absent key is fine
        store.remove("k").unwrap();
    }

    #[test]
    fn test_open_creates_directory() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b");

        let store = FileStore::open(&nested).unwrap();
        assert!(nested.exists());
        store.set("k", "v").unwrap();
    }

    #[test]
    fn test_rejects_unsafe_keys() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::open(temp_dir.path()).unwrap();

        assert!(store.set("../escape", "v").is_err());
        assert!(store.get("a/b").is_err());
        assert!(store.set("", "v").is_err());
    }
}
