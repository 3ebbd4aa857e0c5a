use fb_core::entities::UserUpdate;
use fb_core::enums::SubscriptionTier;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthUpdateArgs;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub fn update(
    args: &AuthUpdateArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let update = to_update(args);
    if update.is_empty() {
        anyhow::bail!("auth update: pass at least one of --name, --email, --avatar, --password");
    }
    let user = ctx.session.update_user(&update)?;
    output(&user, flags.format)
}

pub fn upgrade(tier: &str, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let tier = parse_enum::<SubscriptionTier>(tier, "tier")?;
    if !tier.is_paid() {
        anyhow::bail!("auth upgrade: choose a paid tier (starter, pro, enterprise)");
    }
    let user = ctx.session.upgrade(tier)?;
    tracing::info!(user_id = %user.id, %tier, "upgraded subscription");
    output(&user, flags.format)
}

fn to_update(args: &AuthUpdateArgs) -> UserUpdate {
    UserUpdate {
        email: args.email.clone(),
        password: args.password.clone(),
        name: args.name.clone(),
        avatar: args.avatar.clone(),
        ..UserUpdate::default()
    }
}
