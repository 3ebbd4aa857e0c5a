mod browse;
mod get;
mod list;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ProjectCommands;
use crate::context::AppContext;

/// Handle `freebird project`.
pub fn handle(
    action: &ProjectCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ProjectCommands::List(args) => list::run(args, ctx, flags),
        ProjectCommands::Get { slug } => get::run(slug, ctx, flags),
        ProjectCommands::Related { id } => browse::related(id, ctx, flags),
        ProjectCommands::Featured => browse::featured(ctx, flags),
        ProjectCommands::Categories => browse::categories(ctx, flags),
    }
}
