mod login;
mod logout;
mod profile;
mod status;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthCommands;
use crate::context::AppContext;

/// Handle `freebird auth <subcommand>`.
pub fn handle(
    action: &AuthCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        AuthCommands::Login(args) => login::login(args, ctx, flags),
        AuthCommands::Register(args) => login::register(args, ctx, flags),
        AuthCommands::Logout => logout::handle(ctx, flags),
        AuthCommands::Status => status::handle(ctx, flags),
        AuthCommands::Update(args) => profile::update(args, ctx, flags),
        AuthCommands::Upgrade { tier } => profile::upgrade(tier, ctx, flags),
    }
}
