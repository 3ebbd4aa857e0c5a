use anyhow::Context;
use fb_core::entities::UserUpdate;
use fb_core::enums::SubscriptionTier;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub fn list(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&ctx.session.directory().all_public(), flags.format)
}

pub fn set_tier(
    user_id: &str,
    tier: &str,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let tier = parse_enum::<SubscriptionTier>(tier, "tier")?;

    // The signed-in admin's own record also lives in the session cache.
    if ctx.session.current_user().is_some_and(|u| u.id == user_id) {
        let user = ctx.session.update_user(&UserUpdate {
            subscription_tier: Some(tier),
            ..UserUpdate::default()
        })?;
        return output(&user, flags.format);
    }

    let user = ctx
        .session
        .directory_mut()
        .set_subscription_tier(user_id, tier)
        .with_context(|| format!("user not found: {user_id}"))?;
    tracing::info!(%user_id, %tier, "subscription tier changed");
    output(&user, flags.format)
}
