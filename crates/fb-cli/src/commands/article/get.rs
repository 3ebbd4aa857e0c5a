use anyhow::Context;
use fb_auth::access::view_article;
use fb_core::entities::{Article, PublicUser};
use fb_core::responses::ArticleView;
use fb_db::ContentStore;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Recent articles shown under the one being read.
const MORE_ARTICLES: usize = 3;

#[derive(Debug, Serialize)]
struct ArticleDetailResponse {
    article: ArticleView,
    more: Vec<ArticleView>,
}

pub fn run(slug: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let article = ctx
        .content
        .article_by_slug(slug)
        .with_context(|| format!("article not found: {slug}"))?;
    let response = detail(&ctx.content, article, ctx.session.current_user());
    output(&response, flags.format)
}

fn detail(
    content: &ContentStore,
    article: &Article,
    reader: Option<&PublicUser>,
) -> ArticleDetailResponse {
    let more = content
        .recent_articles(MORE_ARTICLES + 1)
        .into_iter()
        .filter(|other| other.id != article.id)
        .take(MORE_ARTICLES)
        .map(|other| view_article(other.clone(), reader))
        .collect();

    ArticleDetailResponse {
        article: view_article(article.clone(), reader),
        more,
    }
}
