use crate::config::{AppConfig, Overrides};
use crate::generate::run;
use anyhow::{Context, Result};
use std::path::Path;

/// Execute the generate command. Prints the resulting compile roots, one per line.
pub fn generate(config: Option<&str>, overrides: &Overrides) -> Result<()> {
    let cfg = AppConfig::load(config.map(Path::new), overrides).context("failed to load config")?;
    tracing::info!(
        base = %cfg.base_dir.display(),
        out = %cfg.out_abs().display(),
        rules = cfg.packages.len(),
        "generate start"
    );

    let mut project = cfg.project();
    let report = run(&cfg.generate_config(false), &mut project)?;
    if !report.files.is_empty() {
        tracing::info!("generated package-info.java: {}", report.files.len());
    }

    for root in project.resolved_compile_source_roots() {
        println!("{}", root.display());
    }
    Ok(())
}
