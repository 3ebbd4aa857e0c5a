use chrono::Utc;
use fb_core::entities::PublicUser;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthStatusResponse {
    authenticated: bool,
    user: Option<PublicUser>,
    premium: bool,
    expires_at: Option<String>,
    expires_in_hours: Option<i64>,
}

pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let user = ctx.session.current_user();
    let claims = if user.is_some() { ctx.session.claims()? } else { None };
    let now = Utc::now();

    let status = AuthStatusResponse {
        authenticated: user.is_some(),
        user: user.cloned(),
        premium: fb_auth::access::can_access_premium(user),
        expires_at: claims.as_ref().map(|c| c.expires_at.to_rfc3339()),
        expires_in_hours: claims.as_ref().map(|c| c.remaining(now).num_hours()),
    };

    output(&status, flags.format)
}
