//! Key/value storage location.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const STORAGE_FILE_NAME: &str = "storage.json";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Explicit storage file. Defaults to `<data dir>/freebird/storage.json`.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl StorageConfig {
    /// The storage file to open, falling back to the platform data directory
    /// and finally to `.freebird/storage.json` in the working directory.
    #[must_use]
    pub fn resolved_path(&self) -> PathBuf {
        if let Some(path) = &self.path {
            return path.clone();
        }
        dirs::data_dir().map_or_else(
            || PathBuf::from(".freebird").join(STORAGE_FILE_NAME),
            |dir| dir.join("freebird").join(STORAGE_FILE_NAME),
        )
    }
}
