use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub fn related(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&ctx.content.related_projects(id), flags.format)
}

pub fn featured(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&ctx.content.featured_projects(), flags.format)
}

pub fn categories(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&ctx.content.project_categories(), flags.format)
}
