use std::sync::Arc;

use chrono::{DateTime, Utc};
use fb_core::entities::Subscriber;
use fb_core::kv::{KeyValueStore, keys};
use indexmap::IndexMap;

use crate::error::StoreError;
use crate::persisted::{load_map, save_map};

/// Newsletter sign-ups keyed by email, persisted under
/// [`keys::SUBSCRIBERS`].
pub struct SubscriberStore {
    storage: Arc<dyn KeyValueStore>,
    subscribers: IndexMap<String, Subscriber>,
}

impl SubscriberStore {
    /// Load the persisted map. A corrupt stored value loads as empty.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Storage` if the backend cannot be read.
    pub fn open(storage: Arc<dyn KeyValueStore>) -> Result<Self, StoreError> {
        let subscribers = load_map(storage.as_ref(), keys::SUBSCRIBERS)?;
        Ok(Self {
            storage,
            subscribers,
        })
    }

    /// Add `email`. Returns `false`, writing nothing, if it is already
    /// subscribed. A failed write leaves the store as it was.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the map cannot be persisted.
    pub fn add_subscriber(&mut self, email: &str) -> Result<bool, StoreError> {
        self.add_subscriber_at(email, Utc::now())
    }

    /// [`add_subscriber`](Self::add_subscriber) with an explicit timestamp.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the map cannot be persisted.
    pub fn add_subscriber_at(
        &mut self,
        email: &str,
        subscribed_at: DateTime<Utc>,
    ) -> Result<bool, StoreError> {
        if self.subscribers.contains_key(email) {
            tracing::debug!(email, "already subscribed");
            return Ok(false);
        }
        self.subscribers.insert(
            email.to_string(),
            Subscriber {
                email: email.to_string(),
                subscribed_at,
            },
        );
        let saved = save_map(self.storage.as_ref(), keys::SUBSCRIBERS, &self.subscribers);
        if let Err(error) = saved {
            self.subscribers.pop();
            return Err(error);
        }
        tracing::debug!(email, "subscribed");
        Ok(true)
    }

    #[must_use]
    pub fn contains(&self, email: &str) -> bool {
        self.subscribers.contains_key(email)
    }

    /// Subscribers in sign-up order.
    pub fn subscribers(&self) -> impl Iterator<Item = &Subscriber> {
        self.subscribers.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persisted::testing::WriteFailStore;
    use fb_core::kv::MemoryStore;
    use pretty_assertions::assert_eq;

    fn store() -> (SubscriberStore, Arc<MemoryStore>) {
        let storage = Arc::new(MemoryStore::new());
        (SubscriberStore::open(storage.clone()).unwrap(), storage)
    }

    #[test]
    fn second_add_reports_existing() {
        let (mut subs, _) = store();
        assert!(subs.add_subscriber("a@example.com").unwrap());
        assert!(!subs.add_subscriber("a@example.com").unwrap());
        assert_eq!(subs.len(), 1);
    }

    #[test]
    fn persisted_as_email_keyed_object() {
        let (mut subs, storage) = store();
        let at = DateTime::from_timestamp(1_729_000_000, 0).unwrap();
        subs.add_subscriber_at("a@example.com", at).unwrap();
        let raw = storage.get(keys::SUBSCRIBERS).unwrap().unwrap();
        assert_eq!(
            raw,
            r#"{"a@example.com":{"email":"a@example.com","subscribedAt":"2024-10-15T13:46:40Z"}}"#
        );
    }

    #[test]
    fn corrupt_value_loads_empty() {
        let storage = Arc::new(MemoryStore::new());
        storage.set(keys::SUBSCRIBERS, "[oops").unwrap();
        let subs = SubscriberStore::open(storage).unwrap();
        assert!(subs.is_empty());
    }

    #[test]
    fn keeps_sign_up_order() {
        let (mut subs, _) = store();
        for email in ["c@x.com", "a@x.com", "b@x.com"] {
            subs.add_subscriber(email).unwrap();
        }
        let emails: Vec<_> = subs.subscribers().map(|s| s.email.as_str()).collect();
        assert_eq!(emails, ["c@x.com", "a@x.com", "b@x.com"]);
        assert!(subs.contains("a@x.com"));
    }

    #[test]
    fn failed_write_does_not_count_as_subscribed() {
        let storage = Arc::new(WriteFailStore::default());
        let mut subs = SubscriberStore::open(storage.clone()).unwrap();

        storage.fail_writes(true);
        assert!(subs.add_subscriber("a@example.com").is_err());
        assert!(subs.is_empty());
        assert!(!subs.contains("a@example.com"));

        storage.fail_writes(false);
        assert!(subs.add_subscriber("a@example.com").unwrap());
        assert!(!subs.add_subscriber("a@example.com").unwrap());
        assert_eq!(subs.len(), 1);
    }
}
