use std::path::PathBuf;

use fb_config::FreebirdConfig;

use crate::cli::GlobalFlags;

/// Load layered config (with `.env`), then apply command-line overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<FreebirdConfig> {
    let mut config = FreebirdConfig::load_with_dotenv()?;
    apply_overrides(&mut config, flags);
    tracing::debug!(storage = %config.storage.resolved_path().display(), "config loaded");
    Ok(config)
}

fn apply_overrides(config: &mut FreebirdConfig, flags: &GlobalFlags) {
    if let Some(path) = &flags.storage {
        config.storage.path = Some(PathBuf::from(path));
    }
}
