//! Key/value storage contract.
//!
//! Stands in for browser local storage: string keys, string (JSON) values,
//! synchronous read-after-write. Implementations use interior mutability so a
//! single backend can be shared as `Arc<dyn KeyValueStore>` by the session,
//! subscriber and message stores.

use std::collections::BTreeMap;
use std::sync::Mutex;

use serde::Serialize;

use crate::errors::CoreError;

/// Storage keys written by Freebird.
pub mod keys {
    /// Encoded session token.
    pub const AUTH_TOKEN: &str = "freebird_auth_token";
    /// Cached public profile of the signed-in user.
    pub const USER: &str = "freebird_user";
    /// `{ email: Subscriber }`
    pub const SUBSCRIBERS: &str = "freebird_subscribers";
    /// `{ id: ContactMessage }`
    pub const MESSAGES: &str = "freebird_messages";
}

/// A string key/value backend.
pub trait KeyValueStore: Send + Sync {
    /// Read a value. `Ok(None)` when the key is absent.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Storage` if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, CoreError>;

    /// Insert or replace a value.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Storage` if the backend cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), CoreError>;

    /// Remove a key. Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Storage` if the backend cannot be written.
    fn remove(&self, key: &str) -> Result<(), CoreError>;
}

/// Serialize `value` as JSON and store it under `key`.
///
/// # Errors
///
/// Returns `CoreError::Storage` if serialization or the write fails.
pub fn put_json<T: Serialize + ?Sized>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), CoreError> {
    let json = serde_json::to_string(value).map_err(|e| CoreError::storage(key, e))?;
    store.set(key, &json)
}

/// In-process store. Contents vanish with the value.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().map_or(0, |entries| entries.len())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
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
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), CoreError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| CoreError::storage(key, e))?;
        entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_remove_cycle() {
        let store = MemoryStore::new();
        assert!(store.get(keys::USER).unwrap().is_none());

        store.set(keys::USER, "{}").unwrap();
        assert_eq!(store.get(keys::USER).unwrap().as_deref(), Some("{}"));
        assert_eq!(store.len(), 1);

        store.remove(keys::USER).unwrap();
        assert!(store.get(keys::USER).unwrap().is_none());
        store.remove(keys::USER).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn put_json_writes_serialized_value() {
        let store = MemoryStore::new();
        put_json(&store, "numbers", &[1, 2, 3]).unwrap();
        assert_eq!(store.get("numbers").unwrap().as_deref(), Some("[1,2,3]"));
    }
}
