mod content;
mod inbox;
mod users;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AdminCommands;
use crate::commands::shared::session::require_admin;
use crate::context::AppContext;
use crate::output::output;

/// Handle `freebird admin`. Every action needs a signed-in admin.
pub fn handle(
    action: &AdminCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let admin_id = require_admin(ctx)?.id.clone();
    tracing::debug!(%admin_id, ?action, "admin command");

    match action {
        AdminCommands::Stats => output(
            &fb_db::stats::collect(&ctx.content, &ctx.subscribers, &ctx.messages),
            flags.format,
        ),
        AdminCommands::Users => users::list(ctx, flags),
        AdminCommands::SetTier { user_id, tier } => users::set_tier(user_id, tier, ctx, flags),
        AdminCommands::Messages { unread } => inbox::messages(*unread, ctx, flags),
        AdminCommands::Read { id } => inbox::read(id, ctx, flags),
        AdminCommands::Subscribers => inbox::subscribers(ctx, flags),
        AdminCommands::DeleteProject { id } => content::delete_project(id, ctx, flags),
        AdminCommands::DeleteArticle { id } => content::delete_article(id, ctx, flags),
    }
}
