use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(
    command: Commands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Project { action } => commands::project::handle(&action, ctx, flags),
        Commands::Article { action } => commands::article::handle(&action, ctx, flags),
        Commands::Auth { action } => commands::auth::handle(&action, ctx, flags),
        Commands::Subscribe(args) => commands::subscribe::handle(&args, ctx, flags),
        Commands::Contact(args) => commands::contact::handle(&args, ctx, flags),
        Commands::Tiers => commands::tiers::handle(ctx, flags),
        Commands::Admin { action } => commands::admin::handle(&action, ctx, flags),
    }
}
