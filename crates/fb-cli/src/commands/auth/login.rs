use fb_core::entities::NewUser;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{AuthLoginArgs, AuthRegisterArgs};
use crate::context::AppContext;
use crate::output::output;

pub fn login(
    args: &AuthLoginArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let response = ctx.session.login(&args.email, &args.password)?;
    tracing::info!(user_id = %response.user.id, "logged in");
    output(&response, flags.format)
}

pub fn register(
    args: &AuthRegisterArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if args.name.trim().is_empty() {
        anyhow::bail!("auth register: --name must not be empty");
    }
    let response = ctx.session.register(NewUser {
        email: args.email.clone(),
        password: args.password.clone(),
        name: args.name.clone(),
        avatar: args.avatar.clone(),
    })?;
    tracing::info!(user_id = %response.user.id, "registered");
    output(&response, flags.format)
}
