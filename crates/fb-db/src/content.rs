//! Project and article queries.
//!
//! Public views only ever see published records. Admin views
//! (`all_projects`, `all_articles`) and deletes see everything.

use std::collections::HashSet;

use fb_core::entities::{Article, Project};
use fb_core::enums::ArticleCategory;
use fb_core::page::Page;
use fb_core::responses::CategoryCount;

use crate::error::StoreError;
use crate::filters::{ArticleFilter, ProjectFilter, sort_projects};
use crate::fixtures::Seed;

pub const DEFAULT_PROJECT_PAGE_SIZE: usize = 6;
pub const DEFAULT_ARTICLE_PAGE_SIZE: usize = 9;
pub const DEFAULT_RECENT_LIMIT: usize = 5;

#[derive(Debug, Clone)]
pub struct ContentStore {
    projects: Vec<Project>,
    articles: Vec<Article>,
    project_page_size: usize,
    article_page_size: usize,
}

impl ContentStore {
    /// Build a store, rejecting duplicate ids or slugs within a collection.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::DuplicateKey` naming the first repeated value.
    pub fn new(projects: Vec<Project>, articles: Vec<Article>) -> Result<Self, StoreError> {
        ensure_unique("projects", "id", projects.iter().map(|p| p.id.as_str()))?;
        ensure_unique("projects", "slug", projects.iter().map(|p| p.slug.as_str()))?;
        ensure_unique("articles", "id", articles.iter().map(|a| a.id.as_str()))?;
        ensure_unique("articles", "slug", articles.iter().map(|a| a.slug.as_str()))?;

        Ok(Self {
            projects,
            articles,
            project_page_size: DEFAULT_PROJECT_PAGE_SIZE,
            article_page_size: DEFAULT_ARTICLE_PAGE_SIZE,
        })
    }

    /// # Errors
    ///
    /// Same as [`new`](Self::new).
    pub fn from_seed(seed: &Seed) -> Result<Self, StoreError> {
        Self::new(seed.projects.clone(), seed.articles.clone())
    }

    /// Override the default page sizes. Zero keeps the current value.
    #[must_use]
    pub fn with_page_sizes(mut self, project_page_size: usize, article_page_size: usize) -> Self {
        if project_page_size > 0 {
            self.project_page_size = project_page_size;
        }
        if article_page_size > 0 {
            self.article_page_size = article_page_size;
        }
        self
    }

    // -- projects ----------------------------------------------------------

    /// Published projects matching `filter`, sorted, then paginated.
    #[must_use]
    pub fn list_projects(&self, filter: &ProjectFilter) -> Page<Project> {
        let mut matched: Vec<&Project> = self
            .published_projects()
            .filter(|p| filter.matches(p))
            .collect();
        sort_projects(&mut matched, filter.sort);
        let page_size = resolve_page_size(filter.page_size, self.project_page_size);
        Page::from_items(matched, filter.page, page_size).map(Project::clone)
    }

    #[must_use]
    pub fn all_projects(&self) -> &[Project] {
        &self.projects
    }

    #[must_use]
    pub fn project_by_slug(&self, slug: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.slug == slug)
    }

    #[must_use]
    pub fn project_by_id(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Resolve `relatedProjectIds` in order, skipping ids that are unknown or
    /// unpublished. An unknown `id` yields an empty list.
    #[must_use]
    pub fn related_projects(&self, id: &str) -> Vec<&Project> {
        let Some(project) = self.project_by_id(id) else {
            return Vec::new();
        };
        project
            .related_project_ids
            .iter()
            .filter_map(|related| self.project_by_id(related))
            .filter(|p| p.is_published)
            .collect()
    }

    #[must_use]
    pub fn featured_projects(&self) -> Vec<&Project> {
        self.published_projects().filter(|p| p.is_featured).collect()
    }

    #[must_use]
    pub fn projects_by_category(&self, category: &str) -> Vec<&Project> {
        self.published_projects()
            .filter(|p| p.category == category)
            .collect()
    }

    /// Distinct categories of published projects, first-seen order.
    #[must_use]
    pub fn project_categories(&self) -> Vec<&str> {
        distinct(self.published_projects().map(|p| p.category.as_str()))
    }

    /// Remove a project from this store. Returns `false` if absent.
    pub fn delete_project(&mut self, id: &str) -> bool {
        let before = self.projects.len();
        self.projects.retain(|p| p.id != id);
        let removed = self.projects.len() != before;
        if removed {
            tracing::debug!(id, "deleted project");
        }
        removed
    }

    // -- articles ----------------------------------------------------------

    /// Published articles matching `filter`, newest first, then paginated.
    #[must_use]
    pub fn list_articles(&self, filter: &ArticleFilter) -> Page<Article> {
        let mut matched: Vec<&Article> = self
            .published_articles()
            .filter(|a| filter.matches(a))
            .collect();
        matched.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        let page_size = resolve_page_size(filter.page_size, self.article_page_size);
        Page::from_items(matched, filter.page, page_size).map(Article::clone)
    }

    #[must_use]
    pub fn all_articles(&self) -> &[Article] {
        &self.articles
    }

    #[must_use]
    pub fn article_by_slug(&self, slug: &str) -> Option<&Article> {
        self.articles.iter().find(|a| a.slug == slug)
    }

    #[must_use]
    pub fn article_by_id(&self, id: &str) -> Option<&Article> {
        self.articles.iter().find(|a| a.id == id)
    }

    /// Published articles, newest first, at most `limit`.
    #[must_use]
    pub fn recent_articles(&self, limit: usize) -> Vec<&Article> {
        let mut recent: Vec<&Article> = self.published_articles().collect();
        recent.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        recent.truncate(limit);
        recent
    }

    #[must_use]
    pub fn public_articles(&self) -> Vec<&Article> {
        self.published_articles().filter(|a| !a.is_premium).collect()
    }

    #[must_use]
    pub fn premium_articles(&self) -> Vec<&Article> {
        self.published_articles().filter(|a| a.is_premium).collect()
    }

    #[must_use]
    pub fn articles_by_tag(&self, tag: &str) -> Vec<&Article> {
        self.published_articles().filter(|a| a.has_tag(tag)).collect()
    }

    /// First published premium article, else the first published one.
    #[must_use]
    pub fn featured_article(&self) -> Option<&Article> {
        self.published_articles()
            .find(|a| a.is_premium)
            .or_else(|| self.published_articles().next())
    }

    /// Distinct tags of published articles, first-seen order.
    #[must_use]
    pub fn article_tags(&self) -> Vec<&str> {
        distinct(
            self.published_articles()
                .flat_map(|a| a.tags.iter().map(String::as_str)),
        )
    }

    /// Published article count per category, zeros included.
    #[must_use]
    pub fn article_counts_by_category(&self) -> Vec<CategoryCount> {
        ArticleCategory::ALL
            .iter()
            .map(|&category| CategoryCount {
                category,
                count: self
                    .published_articles()
                    .filter(|a| a.category == category)
                    .count(),
            })
            .collect()
    }

    /// Remove an article from this store. Returns `false` if absent.
    pub fn delete_article(&mut self, id: &str) -> bool {
        let before = self.articles.len();
        self.articles.retain(|a| a.id != id);
        let removed = self.articles.len() != before;
        if removed {
            tracing::debug!(id, "deleted article");
        }
        removed
    }

    fn published_projects(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter().filter(|p| p.is_published)
    }

    fn published_articles(&self) -> impl Iterator<Item = &Article> {
        self.articles.iter().filter(|a| a.is_published)
    }
}

const fn resolve_page_size(requested: usize, default: usize) -> usize {
    if requested == 0 { default } else { requested }
}

fn ensure_unique<'a>(
    collection: &'static str,
    field: &'static str,
    values: impl Iterator<Item = &'a str>,
) -> Result<(), StoreError> {
    let mut seen = HashSet::new();
    for value in values {
        if !seen.insert(value) {
            return Err(StoreError::DuplicateKey {
                collection,
                field,
                value: value.to_string(),
            });
        }
    }
    Ok(())
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    values.filter(|v| seen.insert(*v)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn seeded() -> ContentStore {
        ContentStore::from_seed(&Seed::load().unwrap()).unwrap()
    }

    fn slugs<'a>(items: impl IntoIterator<Item = &'a Project>) -> Vec<&'a str> {
        items.into_iter().map(|p| p.slug.as_str()).collect()
    }

    #[test]
    fn duplicate_slug_rejected() {
        let seed = Seed::load().unwrap();
        let mut projects = seed.projects.clone();
        projects[1].slug = projects[0].slug.clone();
        let err = ContentStore::new(projects, seed.articles).unwrap_err();
        assert_eq!(
            err.to_string(),
            "duplicate slug 'echoes-of-tomorrow' in projects"
        );
    }

    #[test]
    fn default_listing_is_newest_first_page_one() {
        let page = seeded().list_projects(&ProjectFilter::default());
        assert_eq!(page.total, 6);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.current_page, 1);
        assert_eq!(
            slugs(&page.items),
            [
                "echoes-of-tomorrow",
                "urban-solitude",
                "harmonic-resonance",
                "metamorphosis",
                "digital-dreamscape",
                "essence-brand-identity",
            ]
        );
    }

    #[test]
    fn unpublished_projects_hidden_from_public_views() {
        let mut seed = Seed::load().unwrap();
        seed.projects[1].is_published = false;
        let store = ContentStore::from_seed(&seed).unwrap();
        assert_eq!(store.list_projects(&ProjectFilter::default()).total, 5);
        assert_eq!(slugs(store.related_projects("1")), ["essence-brand-identity"]);
        assert_eq!(store.featured_projects().len(), 2);
        assert_eq!(store.all_projects().len(), 6);
    }

    #[test]
    fn related_projects_skip_dangling_ids() {
        let mut seed = Seed::load().unwrap();
        seed.projects[0].related_project_ids = vec!["99".into(), "4".into()];
        let store = ContentStore::from_seed(&seed).unwrap();
        assert_eq!(slugs(store.related_projects("1")), ["metamorphosis"]);
        assert!(store.related_projects("missing").is_empty());
    }

    #[test]
    fn page_size_override_and_zero_fallback() {
        let store = seeded().with_page_sizes(4, 0);
        let page = store.list_projects(&ProjectFilter {
            page: 2,
            ..ProjectFilter::default()
        });
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.total_pages, 2);
        let articles = store.list_articles(&ArticleFilter::default());
        assert_eq!(articles.items.len(), 6);
    }

    #[test]
    fn featured_and_categories() {
        let store = seeded();
        assert_eq!(
            slugs(store.featured_projects()),
            ["echoes-of-tomorrow", "urban-solitude", "metamorphosis"]
        );
        assert_eq!(
            store.project_categories(),
            ["Film", "Photography", "Music", "Animation", "Branding", "Design"]
        );
        assert_eq!(slugs(store.projects_by_category("Music")), ["harmonic-resonance"]);
    }

    #[test]
    fn article_views() {
        let store = seeded();
        assert_eq!(store.public_articles().len(), 4);
        assert_eq!(store.premium_articles().len(), 2);
        assert_eq!(
            store.featured_article().map(|a| a.slug.as_str()),
            Some("mastering-color-grading")
        );
        let quick: Vec<_> = store
            .articles_by_tag("quick tips")
            .iter()
            .map(|a| a.id.as_str())
            .collect();
        assert_eq!(quick, ["3", "6"]);
        assert_eq!(store.article_tags().len(), 21);
        assert_eq!(store.recent_articles(DEFAULT_RECENT_LIMIT).len(), 5);
        assert_eq!(store.recent_articles(2)[0].slug, "art-of-visual-storytelling");
    }

    #[test]
    fn featured_article_falls_back_to_first_published() {
        let mut seed = Seed::load().unwrap();
        for article in &mut seed.articles {
            article.is_premium = false;
        }
        let store = ContentStore::from_seed(&seed).unwrap();
        assert_eq!(store.featured_article().map(|a| a.id.as_str()), Some("1"));

        let empty = ContentStore::new(vec![], vec![]).unwrap();
        assert!(empty.featured_article().is_none());
    }

    #[test]
    fn counts_include_every_category() {
        let counts = seeded().article_counts_by_category();
        let pairs: Vec<_> = counts.iter().map(|c| (c.category, c.count)).collect();
        assert_eq!(
            pairs,
            [
                (ArticleCategory::Article, 2),
                (ArticleCategory::Tutorial, 2),
                (ArticleCategory::Tip, 2),
            ]
        );
    }

    #[test]
    fn deletes_only_touch_live_store() {
        let mut store = seeded();
        assert!(store.delete_project("3"));
        assert!(!store.delete_project("3"));
        assert!(store.project_by_slug("harmonic-resonance").is_none());
        assert!(store.delete_article("2"));
        assert!(store.article_by_id("2").is_none());

        let fresh = seeded();
        assert!(fresh.project_by_id("3").is_some());
        assert!(fresh.article_by_id("2").is_some());
    }
}
