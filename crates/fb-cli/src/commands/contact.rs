use fb_core::entities::NewContactMessage;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ContactArgs;
use crate::commands::subscribe::looks_like_email;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ContactResponse {
    id: String,
    sent: bool,
}

/// Handle `freebird contact`.
pub fn handle(args: &ContactArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let payload = to_payload(args)?;
    let id = ctx.messages.add_message(payload)?;
    output(&ContactResponse { id, sent: true }, flags.format)
}

fn to_payload(args: &ContactArgs) -> anyhow::Result<NewContactMessage> {
    for (field, value) in [
        ("name", &args.name),
        ("subject", &args.subject),
        ("message", &args.message),
    ] {
        if value.trim().is_empty() {
            anyhow::bail!("contact: --{field} must not be empty");
        }
    }
    if !looks_like_email(args.email.trim()) {
        anyhow::bail!("contact: '{}' is not an email address", args.email);
    }

    Ok(NewContactMessage {
        name: args.name.trim().to_string(),
        email: args.email.trim().to_string(),
        subject: args.subject.trim().to_string(),
        message: args.message.clone(),
    })
}
