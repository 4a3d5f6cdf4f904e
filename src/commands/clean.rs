use crate::config::{AppConfig, Overrides};
use anyhow::{Context, Result, bail};
use std::fs;
use std::path::Path;

/// Execute the clean command
pub fn clean(config: Option<&str>, overrides: &Overrides, yes: bool) -> Result<()> {
    let cfg = AppConfig::load(config.map(Path::new), overrides).context("failed to load config")?;
    let out = cfg.out_abs();
    if out.exists() {
        if !yes {
            bail!("refusing to remove {} without --yes", out.display());
        }
        tracing::info!("removing {}", out.display());
        fs::remove_dir_all(&out).with_context(|| format!("failed to remove {}", out.display()))?;
    }
    Ok(())
}
