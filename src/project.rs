use crate::naming::make_absolute;
use std::path::{Path, PathBuf};

/// The build the generator runs inside of: a base directory and the roots it
/// compiles sources from.
#[derive(Debug, Clone)]
pub struct Project {
    base_dir: PathBuf,
    compile_source_roots: Vec<PathBuf>,
}

impl Project {
    pub fn new(base_dir: impl Into<PathBuf>, compile_source_roots: Vec<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            compile_source_roots,
        }
    }

    pub fn compile_source_roots(&self) -> &[PathBuf] {
        &self.compile_source_roots
    }

    /// Compile roots resolved against the base directory.
    pub fn resolved_compile_source_roots(&self) -> Vec<PathBuf> {
        self.compile_source_roots
            .iter()
            .map(|r| make_absolute(&self.base_dir, r))
            .collect()
    }

    /// Register an additional compile root. Returns `false` when an equal
    /// root (after resolving against the base directory) is already present.
    pub fn add_compile_source_root(&mut self, root: &Path) -> bool {
        let root = make_absolute(&self.base_dir, root);
        let present = self
            .compile_source_roots
            .iter()
            .any(|r| make_absolute(&self.base_dir, r) == root);
        if present {
            return false;
        }
        tracing::debug!(root = %root.display(), "adding compile source root");
        self.compile_source_roots.push(root);
        true
    }
}
