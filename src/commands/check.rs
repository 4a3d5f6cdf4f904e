use crate::config::{AppConfig, Overrides};
use crate::generate::run;
use anyhow::{Context, Result};
use std::path::Path;

/// Execute the check command: report the files `generate` would write.
pub fn check(config: Option<&str>, overrides: &Overrides) -> Result<()> {
    let cfg = AppConfig::load(config.map(Path::new), overrides).context("failed to load config")?;
    let mut project = cfg.project();
    let report = run(&cfg.generate_config(true), &mut project)?;

    for file in &report.files {
        println!("{}", file.display());
    }
    tracing::info!(
        "missing package-info.java: {} (already present: {}, without matching rule: {})",
        report.files.len(),
        report.already_existing,
        report.unmatched
    );
    Ok(())
}
