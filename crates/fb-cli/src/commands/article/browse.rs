use fb_auth::access::view_article;
use fb_core::responses::ArticleView;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

pub fn recent(limit: Option<u32>, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let limit = effective_limit(limit, flags.limit, ctx.config.content.recent_limit);
    let reader = ctx.session.current_user();
    let articles = ctx
        .content
        .recent_articles(limit)
        .into_iter()
        .map(|article| view_article(article.clone(), reader))
        .collect::<Vec<_>>();
    output(&articles, flags.format)
}

pub fn featured(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let featured: Option<ArticleView> = ctx
        .content
        .featured_article()
        .map(|article| view_article(article.clone(), ctx.session.current_user()));
    output(&featured, flags.format)
}

pub fn tags(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&ctx.content.article_tags(), flags.format)
}

pub fn counts(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&ctx.content.article_counts_by_category(), flags.format)
}
