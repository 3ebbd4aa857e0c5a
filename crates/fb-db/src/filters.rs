//! Query parameters for list views.
//!
//! Empty strings count as "no filter", and `page`/`page_size` of 0 fall back
//! to the first page and the store default respectively.

use fb_core::entities::{Article, Project};
use fb_core::enums::ProjectSort;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectFilter {
    /// Exact, case-sensitive category.
    pub category: Option<String>,
    /// Case-insensitive substring of title or overview.
    pub search: Option<String>,
    #[serde(default)]
    pub sort: ProjectSort,
    #[serde(default)]
    pub page: usize,
    #[serde(default)]
    pub page_size: usize,
}

impl ProjectFilter {
    #[must_use]
    pub fn matches(&self, project: &Project) -> bool {
        if let Some(category) = non_empty(self.category.as_deref())
            && project.category != category
        {
            return false;
        }
        if let Some(needle) = non_empty(self.search.as_deref()) {
            let needle = needle.to_lowercase();
            return project.title.to_lowercase().contains(&needle)
                || project.overview.to_lowercase().contains(&needle);
        }
        true
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArticleFilter {
    /// `article`, `tutorial`, `tip`, or `all` for no filter.
    pub category: Option<String>,
    /// Case-insensitive substring of title or excerpt.
    pub search: Option<String>,
    /// Exact tag membership.
    pub tag: Option<String>,
    #[serde(default)]
    pub page: usize,
    #[serde(default)]
    pub page_size: usize,
}

impl ArticleFilter {
    #[must_use]
    pub fn matches(&self, article: &Article) -> bool {
        if let Some(category) = non_empty(self.category.as_deref())
            && category != "all"
            && article.category.as_str() != category
        {
            return false;
        }
        if let Some(tag) = non_empty(self.tag.as_deref())
            && !article.has_tag(tag)
        {
            return false;
        }
        if let Some(needle) = non_empty(self.search.as_deref()) {
            let needle = needle.to_lowercase();
            return article.title.to_lowercase().contains(&needle)
                || article.excerpt.to_lowercase().contains(&needle);
        }
        true
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Order projects in place. The sort is stable, so ties keep store order.
pub fn sort_projects(projects: &mut [&Project], sort: ProjectSort) {
    match sort {
        ProjectSort::Newest => projects.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        ProjectSort::Oldest => projects.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        ProjectSort::Title => projects.sort_by_cached_key(|p| p.title.to_lowercase()),
    }
}
