use crate::emitter::{PACKAGE_INFO_FILE, TextEncoding, emit, render};
use crate::error::GenerateError;
use crate::existence::exists_in_any_root;
use crate::naming::{make_absolute, to_package_identifier};
use crate::project::Project;
use crate::rules::{PackageRule, RuleSet};
use crate::walker::walk;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Everything a generation run needs, resolved up front.
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    pub base_dir: PathBuf,
    pub output_dir: PathBuf,
    pub source_roots: Vec<PathBuf>,
    pub rules: Vec<PackageRule>,
    pub encoding: TextEncoding,
    /// Compute targets without touching the filesystem.
    pub dry_run: bool,
}

impl GenerateConfig {
    pub fn output_dir_abs(&self) -> PathBuf {
        make_absolute(&self.base_dir, &self.output_dir)
    }
}

/// What happened to a single package-bearing directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    DefaultPackage,
    AlreadyExists,
    NoMatchingRule,
    Planned(PathBuf),
    Generated(PathBuf),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    /// Files written, or in dry-run mode the files that would be written.
    pub files: Vec<PathBuf>,
    pub already_existing: usize,
    pub unmatched: usize,
}

impl Report {
    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::DefaultPackage => {}
            Outcome::AlreadyExists => self.already_existing += 1,
            Outcome::NoMatchingRule => self.unmatched += 1,
            Outcome::Planned(path) | Outcome::Generated(path) => self.files.push(path),
        }
    }
}

pub struct Generator<'a> {
    cfg: &'a GenerateConfig,
    rules: &'a RuleSet,
    output_dir: PathBuf,
}

impl<'a> Generator<'a> {
    pub fn new(cfg: &'a GenerateConfig, rules: &'a RuleSet) -> Self {
        Self {
            cfg,
            rules,
            output_dir: cfg.output_dir_abs(),
        }
    }

    /// Produce the package-info.java for the package at `relative_path`
    /// (relative to its source root) if one is needed.
    pub fn generate_package_info(&self, relative_path: &str) -> Result<Outcome, GenerateError> {
        if relative_path.is_empty() {
            // the default package can't have a package-info.java
            return Ok(Outcome::DefaultPackage);
        }

        let candidate = Path::new(relative_path).join(PACKAGE_INFO_FILE);
        if exists_in_any_root(&candidate, &self.cfg.source_roots, &self.cfg.base_dir) {
            tracing::debug!(file = %candidate.display(), "already present in a source root");
            return Ok(Outcome::AlreadyExists);
        }

        let package = to_package_identifier(relative_path);
        let Some(rule) = self.rules.first_match(&package) else {
            tracing::debug!(%package, "no rule matches");
            return Ok(Outcome::NoMatchingRule);
        };

        let target = self.output_dir.join(&candidate);
        if self.cfg.dry_run {
            return Ok(Outcome::Planned(target));
        }

        emit(
            &target,
            &render(rule.lines(), &package),
            self.cfg.encoding,
        )?;
        tracing::debug!(%package, pattern = rule.pattern(), file = %target.display(), "generated");
        Ok(Outcome::Generated(target))
    }

    /// Walk one source root and generate for every package-bearing directory.
    pub fn process_root(&self, root: &Path, report: &mut Report) -> Result<(), GenerateError> {
        walk(root, |relative| {
            let outcome = self.generate_package_info(relative)?;
            report.record(outcome);
            Ok(())
        })
    }
}

/// Generate missing package-info.java files for all source roots and, on
/// success, register the output directory as a compile root of `project`.
///
/// A configuration without rules does nothing; the output directory is not
/// registered in that case.
pub fn run(cfg: &GenerateConfig, project: &mut Project) -> Result<Report> {
    if cfg.rules.is_empty() {
        tracing::warn!("no packages given: not generating any package-info.java files");
        return Ok(Report::default());
    }

    let rules = RuleSet::compile(&cfg.rules).context("could not generate package-info.java")?;
    tracing::debug!(rules = rules.len(), "compiled package rules");
    let generator = Generator::new(cfg, &rules);
    let mut report = Report::default();

    for root in &cfg.source_roots {
        let root = make_absolute(&cfg.base_dir, root);
        tracing::debug!("checking {} for missing package-info.java files", root.display());
        generator
            .process_root(&root, &mut report)
            .context("could not generate package-info.java")?;
    }

    if !cfg.dry_run {
        project.add_compile_source_root(&cfg.output_dir_abs());
    }

    tracing::info!(
        files = report.files.len(),
        existing = report.already_existing,
        unmatched = report.unmatched,
        dry_run = cfg.dry_run,
        "package-info generation finished"
    );
    Ok(report)
}
