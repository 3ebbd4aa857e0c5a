use anyhow::Context;
use fb_core::entities::Project;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ProjectDetailResponse<'a> {
    project: &'a Project,
    related: Vec<&'a Project>,
}

pub fn run(slug: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let project = ctx
        .content
        .project_by_slug(slug)
        .with_context(|| format!("project not found: {slug}"))?;
    let related = ctx.content.related_projects(&project.id);
    output(&ProjectDetailResponse { project, related }, flags.format)
}
