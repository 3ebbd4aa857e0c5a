use fb_auth::AccessRequirement;
use fb_core::entities::PublicUser;

use crate::context::AppContext;

/// Resolve the signed-in admin, or fail with the access error.
pub fn require_admin(ctx: &AppContext) -> anyhow::Result<&PublicUser> {
    let user = fb_auth::access::require(ctx.session.current_user(), AccessRequirement::admin())?;
    Ok(user)
}
