use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `freebird tiers`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&ctx.tiers, flags.format)
}
