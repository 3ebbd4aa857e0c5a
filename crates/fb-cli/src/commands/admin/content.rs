use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct DeleteResponse {
    id: String,
    deleted: bool,
    note: &'static str,
}

const NOTE: &str = "removed for this run only; seed content is restored on the next start";

pub fn delete_project(id: &str, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if !ctx.content.delete_project(id) {
        anyhow::bail!("project not found: {id}");
    }
    respond(id, flags)
}

pub fn delete_article(id: &str, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if !ctx.content.delete_article(id) {
        anyhow::bail!("article not found: {id}");
    }
    respond(id, flags)
}

fn respond(id: &str, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(
        &DeleteResponse {
            id: id.to_string(),
            deleted: true,
            note: NOTE,
        },
        flags.format,
    )
}
