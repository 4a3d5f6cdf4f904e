//! Generates `package-info.java` files for Java packages that lack one.
//!
//! Every source root is walked; each directory that directly holds a `.java`
//! file is a package. When none of the source roots already contains a
//! `package-info.java` for it, the first configured rule whose pattern fully
//! matches the package name supplies the header written above the package
//! statement.

pub(crate) mod cli;
pub(crate) mod commands;
pub mod config;
pub mod emitter;
pub mod error;
pub mod existence;
pub mod generate;
pub mod naming;
pub mod project;
pub mod rules;
pub mod walker;

use anyhow::Result;

pub use error::GenerateError;
pub use generate::{GenerateConfig, Outcome, Report, run};
pub use project::Project;
pub use rules::{PackageRule, RuleSet};

/// Main entry point for CLI usage
pub fn run_cli() -> Result<()> {
    cli::run_cli()
}

/// Entry point for CLI usage with custom arguments
pub fn run_cli_with<I, S>(args: I) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    cli::run_cli_with(args)
}
