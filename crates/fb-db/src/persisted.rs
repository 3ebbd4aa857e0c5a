//! Load/save of insertion-ordered JSON maps under one storage key.

use fb_core::kv::{self, KeyValueStore};
use indexmap::IndexMap;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::StoreError;

/// Read the map stored at `key`. Absent or unparseable values load empty.
pub(crate) fn load_map<T: DeserializeOwned>(
    storage: &dyn KeyValueStore,
    key: &str,
) -> Result<IndexMap<String, T>, StoreError> {
    let Some(raw) = storage.get(key)? else {
        return Ok(IndexMap::new());
    };
    match serde_json::from_str(&raw) {
        Ok(map) => Ok(map),
        Err(error) => {
            tracing::warn!(key, %error, "stored collection is corrupt; starting empty");
            Ok(IndexMap::new())
        }
    }
}

/// Rewrite the whole map at `key`.
pub(crate) fn save_map<T: Serialize>(
    storage: &dyn KeyValueStore,
    key: &str,
    map: &IndexMap<String, T>,
) -> Result<(), StoreError> {
    kv::put_json(storage, key, map)?;
    Ok(())
}
