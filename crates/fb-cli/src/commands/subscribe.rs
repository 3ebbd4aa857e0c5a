use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SubscribeArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct SubscribeResponse {
    email: String,
    subscribed: bool,
    message: &'static str,
}

/// Handle `freebird subscribe <email>`.
pub fn handle(
    args: &SubscribeArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let email = args.email.trim();
    if !looks_like_email(email) {
        anyhow::bail!("subscribe: '{email}' is not an email address");
    }

    let subscribed = ctx.subscribers.add_subscriber(email)?;
    let message = if subscribed {
        "subscribed to the newsletter"
    } else {
        "already subscribed"
    };
    output(
        &SubscribeResponse {
            email: email.to_string(),
            subscribed,
            message,
        },
        flags.format,
    )
}

pub(crate) fn looks_like_email(value: &str) -> bool {
    value.split_once('@').is_some_and(|(local, domain)| {
        !local.is_empty()
            && domain.contains('.')
            && !domain.starts_with('.')
            && !domain.ends_with('.')
    }) && !value.contains(char::is_whitespace)
}
