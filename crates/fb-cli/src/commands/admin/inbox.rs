use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct MarkReadResponse {
    id: String,
    marked: bool,
}

pub fn messages(unread_only: bool, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let messages = ctx
        .messages
        .messages()
        .filter(|message| !unread_only || !message.is_read)
        .collect::<Vec<_>>();
    output(&messages, flags.format)
}

pub fn read(id: &str, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if !ctx.messages.mark_as_read(id)? {
        anyhow::bail!("message not found: {id}");
    }
    output(
        &MarkReadResponse {
            id: id.to_string(),
            marked: true,
        },
        flags.format,
    )
}

pub fn subscribers(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&ctx.subscribers.subscribers().collect::<Vec<_>>(), flags.format)
}
