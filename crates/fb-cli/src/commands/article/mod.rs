mod browse;
mod get;
mod list;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ArticleCommands;
use crate::context::AppContext;

/// Handle `freebird article`.
pub fn handle(
    action: &ArticleCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ArticleCommands::List(args) => list::run(args, ctx, flags),
        ArticleCommands::Get { slug } => get::run(slug, ctx, flags),
        ArticleCommands::Recent { limit } => browse::recent(*limit, ctx, flags),
        ArticleCommands::Featured => browse::featured(ctx, flags),
        ArticleCommands::Tags => browse::tags(ctx, flags),
        ArticleCommands::Counts => browse::counts(ctx, flags),
    }
}
