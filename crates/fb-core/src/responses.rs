//! Response shapes shared by the stores and the `freebird` CLI.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Article, PublicUser};
use crate::enums::ArticleCategory;

/// Result of a successful login or registration.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AuthResponse {
    pub user: PublicUser,
    pub token: String,
}

/// Admin dashboard counters.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SiteStats {
    pub total_projects: usize,
    pub published_projects: usize,
    pub total_articles: usize,
    pub published_articles: usize,
    pub active_subscribers: usize,
    pub total_messages: usize,
    pub unread_messages: usize,
}

/// Published article count for one category.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CategoryCount {
    pub category: ArticleCategory,
    pub count: usize,
}

/// An article as shown to a specific reader.
///
/// When `locked` is set the reader lacks premium access and `content` is
/// withheld; only the excerpt is readable.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ArticleView {
    #[serde(flatten)]
    pub article: Article,
    pub locked: bool,
}
