use crate::emitter::{TextEncoding, resolve_encoding};
use crate::generate::GenerateConfig;
use crate::naming::make_absolute;
use crate::project::Project;
use crate::rules::{DEFAULT_PATTERN, PackageRule};
use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "package-info.toml";
pub const DEFAULT_SOURCE_ROOT: &str = "src/main/java";
pub const DEFAULT_OUTPUT_DIR: &str = "target/generated-sources/package-info";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub base_dir: PathBuf,
    pub source_roots: Vec<PathBuf>,
    pub out: PathBuf,
    pub encoding: TextEncoding,
    pub packages: Vec<PackageRule>,
}

/// Values given on the command line; they take precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub base_dir: Option<PathBuf>,
    pub out: Option<PathBuf>,
    pub source_roots: Vec<PathBuf>,
    pub encoding: Option<String>,
}

// --- Raw TOML structures ---
#[derive(Deserialize)]
struct ConfigFile {
    package_info: Option<PackageInfoToml>,
}

#[derive(Deserialize)]
struct PackageInfoToml {
    base_dir: Option<String>,
    source_roots: Option<Vec<String>>,
    out: Option<String>,
    encoding: Option<String>,
    packages: Option<Vec<PackageToml>>,
}

#[derive(Deserialize)]
struct PackageToml {
    #[serde(alias = "regex")]
    pattern: Option<String>,
    #[serde(alias = "annotations")]
    lines: Option<Vec<String>>,
}

impl PackageToml {
    fn into_rule(self) -> PackageRule {
        PackageRule {
            pattern: self.pattern.unwrap_or_else(|| DEFAULT_PATTERN.to_string()),
            lines: self.lines.unwrap_or_default(),
        }
    }
}

impl AppConfig {
    pub fn load(config_path: Option<&Path>, overrides: &Overrides) -> Result<Self> {
        let path = match config_path {
            Some(p) => p.to_path_buf(),
            None => PathBuf::from(DEFAULT_CONFIG_FILE),
        };
        let content = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let root: ConfigFile = toml::from_str(&content)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        let Some(raw) = root.package_info else {
            bail!("[package_info] not found in {}", path.display());
        };

        // Relative paths in the file are relative to the file itself.
        let config_dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        let config_dir = std::path::absolute(&config_dir)
            .with_context(|| format!("failed to resolve {}", config_dir.display()))?;

        let base_dir = match overrides.base_dir.as_ref() {
            Some(dir) => std::path::absolute(dir)
                .with_context(|| format!("failed to resolve {}", dir.display()))?,
            None => raw
                .base_dir
                .map(|d| make_absolute(&config_dir, Path::new(&d)))
                .unwrap_or(config_dir),
        };

        let source_roots = if !overrides.source_roots.is_empty() {
            overrides.source_roots.clone()
        } else {
            raw.source_roots
                .filter(|roots| !roots.is_empty())
                .unwrap_or_else(|| vec![DEFAULT_SOURCE_ROOT.to_string()])
                .into_iter()
                .map(PathBuf::from)
                .collect()
        };

        let out = overrides
            .out
            .clone()
            .or_else(|| raw.out.map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

        let encoding_label = overrides.encoding.as_deref().or(raw.encoding.as_deref());
        let encoding = resolve_encoding(encoding_label).context("invalid encoding")?;

        let packages = raw
            .packages
            .unwrap_or_default()
            .into_iter()
            .map(PackageToml::into_rule)
            .collect();

        Ok(Self {
            base_dir,
            source_roots,
            out,
            encoding,
            packages,
        })
    }

    pub fn out_abs(&self) -> PathBuf {
        make_absolute(&self.base_dir, &self.out)
    }

    pub fn project(&self) -> Project {
        Project::new(&self.base_dir, self.source_roots.clone())
    }

    pub fn generate_config(&self, dry_run: bool) -> GenerateConfig {
        GenerateConfig {
            base_dir: self.base_dir.clone(),
            output_dir: self.out.clone(),
            source_roots: self.source_roots.clone(),
            rules: self.packages.clone(),
            encoding: self.encoding,
            dry_run,
        }
    }
}
