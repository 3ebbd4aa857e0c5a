//! Key/value backend stored as one JSON object on disk.
//!
//! The whole document is rewritten on every `set`/`remove`. Parent
//! directories are created on the first write. When the rewrite fails the
//! in-memory entries are put back to match the file.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use fb_core::errors::CoreError;
use fb_core::kv::KeyValueStore;

use crate::error::StoreError;

#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl JsonFileStore {
    /// Open (or lazily create) the store at `path`.
    ///
    /// A file that is not a JSON object of strings is ignored with a warning
    /// and replaced on the next write.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Storage` if an existing file cannot be read.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let entries = if path.exists() {
            let raw = fs::read_to_string(&path)
                .map_err(|e| CoreError::storage(path.display().to_string(), e))?;
            serde_json::from_str(&raw).unwrap_or_else(|error| {
                tracing::warn!(path = %path.display(), %error, "storage file is corrupt; starting empty");
                BTreeMap::new()
            })
        } else {
            BTreeMap::new()
        };
        tracing::debug!(path = %path.display(), keys = entries.len(), "opened storage file");

        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self, key: &str, entries: &BTreeMap<String, String>) -> Result<(), CoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| CoreError::storage(key, e))?;
        }
        let json = serde_json::to_string_pretty(entries).map_err(|e| CoreError::storage(key, e))?;
        fs::write(&self.path, json).map_err(|e| {
            CoreError::storage(key, format!("failed to write {}: {e}", self.path.display()))
        })
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
        let entries = self
            .entries
            .lock()
            .map_err(|e| CoreError::storage(key, e))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CoreError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| CoreError::storage(key, e))?;
        let previous = entries.insert(key.to_string(), value.to_string());
        if let Err(error) = self.flush(key, &entries) {
            match previous {
                Some(old) => entries.insert(key.to_string(), old),
                None => entries.remove(key),
            };
            return Err(error);
        }
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), CoreError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| CoreError::storage(key, e))?;
        if let Some(old) = entries.remove(key)
            && let Err(error) = self.flush(key, &entries)
        {
            entries.insert(key.to_string(), old);
            return Err(error);
        }
        Ok(())
    }
}
