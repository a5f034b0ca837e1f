//! # Key-Value Storage
//!
//! A tiny string-to-string store, shaped like browser `localStorage`.
//!
//! `FileStorage` keeps each key in its own file (`<dir>/<key>.json`).
//! All writes use atomic rename (write `.tmp`, then `rename()`) for crash safety.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use log::debug;

/// String key-value persistence.
pub trait Storage {
    /// Read the value stored under `key`. `Ok(None)` when nothing was ever written.
    fn get_item(&self, key: &str) -> io::Result<Option<String>>;

    /// Overwrite the value stored under `key`.
    fn set_item(&mut self, key: &str, value: &str) -> io::Result<()>;
}

/// Directory-backed storage, one JSON file per key.
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> io::Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(key);
        let tmp_path = path.with_extension("tmp");
        fs::write(&tmp_path, value)?;
        fs::rename(&tmp_path, &path)?;
        debug!("Wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }
}

/// Volatile storage for tests.
#[derive(Default)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `value` already stored under `key`.
    pub fn with_item(key: &str, value: &str) -> Self {
        let mut storage = Self::new();
        storage.items.insert(key.to_string(), value.to_string());
        storage
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> io::Result<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> io::Result<()> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_get_missing() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get_item("tickets").unwrap(), None);
    }

    #[test]
    fn test_memory_storage_overwrites() {
        let mut storage = MemoryStorage::with_item("tickets", "[]");
        storage.set_item("tickets", "[1]").unwrap();
        assert_eq!(storage.get_item("tickets").unwrap().as_deref(), Some("[1]"));
    }

    #[test]
    fn test_file_storage_missing_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());
        assert_eq!(storage.get_item("tickets").unwrap(), None);
    }

    #[test]
    fn test_file_storage_creates_dir_and_leaves_no_tmp() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested").join("data");
        let mut storage = FileStorage::new(&nested);

        storage.set_item("tickets", "[]").unwrap();

        assert!(nested.join("tickets.json").exists());
        assert!(!nested.join("tickets.tmp").exists());
        assert_eq!(storage.get_item("tickets").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_file_storage_keys_are_independent() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::new(dir.path());
        storage.set_item("a", "1").unwrap();
        storage.set_item("b", "2").unwrap();
        assert_eq!(storage.get_item("a").unwrap().as_deref(), Some("1"));
        assert_eq!(storage.get_item("b").unwrap().as_deref(), Some("2"));
    }
}
