//! Roles, subscription tiers, article categories and sort orders.
//!
//! All enums serialize as lowercase strings, matching the stored JSON shapes.
//! `Role` and `SubscriptionTier` expose a numeric `level()` used by access checks.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// Account role.
///
/// ```text
/// user (1) < subscriber (2) < admin (3)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Subscriber,
    Admin,
}

impl Role {
    /// Position in the role hierarchy.
    #[must_use]
    pub const fn level(self) -> u8 {
        match self {
            Self::User => 1,
            Self::Subscriber => 2,
            Self::Admin => 3,
        }
    }

    /// Whether this role satisfies `required`.
    #[must_use]
    pub const fn at_least(self, required: Self) -> bool {
        self.level() >= required.level()
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Subscriber => "subscriber",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// SubscriptionTier
// ---------------------------------------------------------------------------

/// Paid plan attached to a user.
///
/// ```text
/// free (0) < starter (1) < pro (2) < enterprise (3)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionTier {
    Free,
    Starter,
    Pro,
    Enterprise,
}

impl SubscriptionTier {
    #[must_use]
    pub const fn level(self) -> u8 {
        match self {
            Self::Free => 0,
            Self::Starter => 1,
            Self::Pro => 2,
            Self::Enterprise => 3,
        }
    }

    #[must_use]
    pub const fn at_least(self, required: Self) -> bool {
        self.level() >= required.level()
    }

    /// Any tier other than `free` is a paid plan.
    #[must_use]
    pub const fn is_paid(self) -> bool {
        !matches!(self, Self::Free)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Starter => "starter",
            Self::Pro => "pro",
            Self::Enterprise => "enterprise",
        }
    }
}

impl fmt::Display for SubscriptionTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ArticleCategory
// ---------------------------------------------------------------------------

/// Kind of knowledge-hub entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ArticleCategory {
    Article,
    Tutorial,
    Tip,
}

impl ArticleCategory {
    pub const ALL: [Self; 3] = [Self::Article, Self::Tutorial, Self::Tip];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Article => "article",
            Self::Tutorial => "tutorial",
            Self::Tip => "tip",
        }
    }
}

impl fmt::Display for ArticleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ProjectSort
// ---------------------------------------------------------------------------

/// Ordering applied to project listings before pagination.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ProjectSort {
    /// Newest `createdAt` first.
    #[default]
    Newest,
    Oldest,
    /// Case-insensitive alphabetical by title.
    Title,
}

impl ProjectSort {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Oldest => "oldest",
            Self::Title => "title",
        }
    }
}

impl fmt::Display for ProjectSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
