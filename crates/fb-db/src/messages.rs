use std::sync::Arc;

use chrono::{DateTime, Utc};
use fb_core::entities::{ContactMessage, NewContactMessage};
use fb_core::kv::{KeyValueStore, keys};
use indexmap::IndexMap;

use crate::error::StoreError;
use crate::persisted::{load_map, save_map};

/// Contact-form messages keyed by id, persisted under [`keys::MESSAGES`].
pub struct MessageStore {
    storage: Arc<dyn KeyValueStore>,
    messages: IndexMap<String, ContactMessage>,
}

impl MessageStore {
    /// Load the persisted map. A corrupt stored value loads as empty.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Storage` if the backend cannot be read.
    pub fn open(storage: Arc<dyn KeyValueStore>) -> Result<Self, StoreError> {
        let messages = load_map(storage.as_ref(), keys::MESSAGES)?;
        Ok(Self { storage, messages })
    }

    /// Store a message and return its id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the map cannot be persisted.
    pub fn add_message(&mut self, payload: NewContactMessage) -> Result<String, StoreError> {
        self.add_message_at(payload, Utc::now())
    }

    /// [`add_message`](Self::add_message) with an explicit clock. The id is
    /// `now` in epoch milliseconds, moved forward one millisecond at a time
    /// until it is unused.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the map cannot be persisted.
    pub fn add_message_at(
        &mut self,
        payload: NewContactMessage,
        now: DateTime<Utc>,
    ) -> Result<String, StoreError> {
        let mut millis = now.timestamp_millis();
        while self.messages.contains_key(&millis.to_string()) {
            millis += 1;
        }
        let id = millis.to_string();

        let message = ContactMessage::new(id.clone(), payload, now);
        self.messages.insert(id.clone(), message);
        if let Err(error) = save_map(self.storage.as_ref(), keys::MESSAGES, &self.messages) {
            self.messages.pop();
            return Err(error);
        }
        tracing::debug!(%id, "stored contact message");
        Ok(id)
    }

    /// Flag a message as read. Returns `false` if no message has `id`.
    /// The flag is reverted if the write fails.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the map cannot be persisted.
    pub fn mark_as_read(&mut self, id: &str) -> Result<bool, StoreError> {
        let Some(message) = self.messages.get_mut(id) else {
            return Ok(false);
        };
        let was_read = std::mem::replace(&mut message.is_read, true);
        if let Err(error) = save_map(self.storage.as_ref(), keys::MESSAGES, &self.messages) {
            if let Some(message) = self.messages.get_mut(id) {
                message.is_read = was_read;
            }
            return Err(error);
        }
        tracing::debug!(id, "marked message read");
        Ok(true)
    }

    #[must_use]
    pub fn message(&self, id: &str) -> Option<&ContactMessage> {
        self.messages.get(id)
    }

    /// Messages in arrival order.
    pub fn messages(&self) -> impl Iterator<Item = &ContactMessage> {
        self.messages.values()
    }

    #[must_use]
    pub fn unread_count(&self) -> usize {
        self.messages.values().filter(|m| !m.is_read).count()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persisted::testing::WriteFailStore;
    use fb_core::kv::MemoryStore;
    use pretty_assertions::assert_eq;

    fn payload(subject: &str) -> NewContactMessage {
        NewContactMessage {
            name: "Sam".into(),
            email: "sam@example.com".into(),
            subject: subject.into(),
            message: "Hello".into(),
        }
    }

    fn store() -> (MessageStore, Arc<MemoryStore>) {
        let storage = Arc::new(MemoryStore::new());
        (MessageStore::open(storage.clone()).unwrap(), storage)
    }

    #[test]
    fn same_millisecond_ids_do_not_collide() {
        let (mut messages, _) = store();
        let now = DateTime::from_timestamp_millis(1_729_000_000_000).unwrap();
        let first = messages.add_message_at(payload("one"), now).unwrap();
        let second = messages.add_message_at(payload("two"), now).unwrap();
        assert_eq!(first, "1729000000000");
        assert_eq!(second, "1729000000001");
        assert_eq!(messages.len(), 2);
        assert_eq!(messages.message(&first).unwrap().subject, "one");
    }

    #[test]
    fn mark_as_read_updates_and_persists() {
        let (mut messages, storage) = store();
        let id = messages.add_message(payload("hi")).unwrap();
        assert_eq!(messages.unread_count(), 1);
        assert!(messages.mark_as_read(&id).unwrap());
        assert_eq!(messages.unread_count(), 0);

        let reopened = MessageStore::open(storage).unwrap();
        assert!(reopened.message(&id).unwrap().is_read);
    }

    #[test]
    fn mark_missing_is_noop() {
        let (mut messages, storage) = store();
        assert!(!messages.mark_as_read("404").unwrap());
        assert!(storage.is_empty());
    }

    #[test]
    fn legacy_records_load_unread() {
        let storage = Arc::new(MemoryStore::new());
        storage
            .set(
                keys::MESSAGES,
                r#"{"1":{"id":"1","name":"A","email":"a@x.com","subject":"S","message":"M","timestamp":"2024-10-01T00:00:00Z"}}"#,
            )
            .unwrap();
        let messages = MessageStore::open(storage).unwrap();
        assert_eq!(messages.unread_count(), 1);
    }

    #[test]
    fn failed_writes_leave_messages_untouched() {
        let storage = Arc::new(WriteFailStore::default());
        let mut messages = MessageStore::open(storage.clone()).unwrap();
        let now = DateTime::from_timestamp_millis(1_729_000_000_000).unwrap();
        let id = messages.add_message_at(payload("kept"), now).unwrap();

        storage.fail_writes(true);
        assert!(messages.add_message_at(payload("lost"), now).is_err());
        assert_eq!(messages.len(), 1);
        assert!(messages.mark_as_read(&id).is_err());
        assert_eq!(messages.unread_count(), 1);

        storage.fail_writes(false);
        let retried = messages.add_message_at(payload("retried"), now).unwrap();
        assert_eq!(retried, "1729000000001");
        let reopened = MessageStore::open(storage).unwrap();
        assert_eq!(reopened.len(), 2);
        assert!(!reopened.message(&id).unwrap().is_read);
    }
}
