use fb_auth::access::view_article;
use fb_db::ArticleFilter;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ArticleListArgs;
use crate::context::AppContext;
use crate::output::output;

pub fn run(args: &ArticleListArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let filter = ArticleFilter {
        category: args.category.clone(),
        search: args.search.clone(),
        tag: args.tag.clone(),
        page: args.page.unwrap_or(1),
        page_size: args.page_size.unwrap_or(0),
    };
    let reader = ctx.session.current_user();
    let page = ctx
        .content
        .list_articles(&filter)
        .map(|article| view_article(article, reader));
    output(&page, flags.format)
}
