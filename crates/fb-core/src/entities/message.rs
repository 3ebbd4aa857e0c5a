use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Contact form payload.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// A stored contact message.
///
/// Older stored records carry `timestamp` instead of `createdAt` and no
/// `isRead` flag; both still load.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    /// Epoch-millisecond timestamp rendered as a string.
    pub id: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    #[serde(alias = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub is_read: bool,
}

impl ContactMessage {
    #[must_use]
    pub fn new(id: String, payload: NewContactMessage, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: payload.name,
            email: payload.email,
            subject: payload.subject,
            message: payload.message,
            created_at,
            is_read: false,
        }
    }
}
