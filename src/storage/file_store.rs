//! File-backed key-value store with atomic writes
//!
//! Each key maps to `<data_dir>/<key>.json`. Writes go to a temp file in
//! the same directory followed by a rename, so a file is either completely
//! written or not modified at all.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{TallyError, TallyResult};

use super::kv::KeyValueStore;

/// Key-value store persisting each key as a JSON file on disk
#[derive(Debug, Clone)]
pub struct FileStore {
    data_dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at the given data directory
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> TallyResult<Option<String>> {
        let path = self.path_for(key);

        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&path).map_err(|e| {
            TallyError::Storage(format!("Failed to read {}: {}", path.display(), e))
        })?;

        Ok(Some(contents))
    }

    fn set(&self, key: &str, value: &str) -> TallyResult<()> {
        let path = self.path_for(key);
        write_atomic(&path, value)
    }
}

/// Write a string to a file atomically (write to temp, then rename)
fn write_atomic(path: &Path, contents: &str) -> TallyResult<()> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            TallyError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Temp file in same directory (important for atomic rename)
    let temp_path = path.with_extension("json.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| TallyError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    writer
        .write_all(contents.as_bytes())
        .map_err(|e| TallyError::Storage(format!("Failed to write data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| TallyError::Storage(format!("Failed to flush data: {}", e)))?;

    // Sync to disk before rename
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| TallyError::Storage(format!("Failed to sync data: {}", e)))?;

    // Atomic rename
    fs::rename(&temp_path, path).map_err(|e| {
        // Try to clean up temp file if rename fails
        let _ = fs::remove_file(&temp_path);
        TallyError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_get_missing_key() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().to_path_buf());

        assert_eq!(store.get("budget-income").unwrap(), None);
    }

    #[test]
    fn test_set_and_get() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().to_path_buf());

        store.set("budget-loans", "[]").unwrap();
        assert_eq!(store.get("budget-loans").unwrap().as_deref(), Some("[]"));
        assert!(temp_dir.path().join("budget-loans.json").exists());
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().to_path_buf());

        store.set("budget-savings", "[]").unwrap();

        assert!(!temp_dir.path().join("budget-savings.json.tmp").exists());
    }

    #[test]
    fn test_creates_data_dir_on_first_write() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("nested").join("data");
        let store = FileStore::new(nested.clone());

        store.set("budget-expenses", "{}").unwrap();
        assert!(nested.join("budget-expenses.json").exists());
    }
}
