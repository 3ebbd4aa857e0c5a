use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ArticleCategory;

/// A knowledge-hub entry. Premium articles are only readable in full by
/// admins and paying subscribers.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    /// Markdown-like body.
    pub content: String,
    pub category: ArticleCategory,
    pub tags: Vec<String>,
    pub featured_image: String,
    /// Estimated reading time in minutes.
    pub read_time: u32,
    pub author: String,
    pub is_published: bool,
    pub is_premium: bool,
    pub created_at: DateTime<Utc>,
}

impl Article {
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}
