use crate::naming::relativize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Suffix (compared lower-cased) that marks a file as compilable source.
pub const SOURCE_SUFFIX: &str = ".java";

/// Immediate children of `dir`.
pub fn list_children(dir: &Path) -> io::Result<Vec<PathBuf>> {
    fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect()
}

pub fn is_source_file(path: &Path) -> bool {
    if !path.is_file() {
        return false;
    }
    path.file_name()
        .map(|n| n.to_string_lossy().to_lowercase().ends_with(SOURCE_SUFFIX))
        .unwrap_or(false)
}

/// A directory is package-bearing when one of its direct children is a source file.
pub fn contains_source_file(children: &[PathBuf]) -> bool {
    children.iter().any(|c| is_source_file(c))
}

/// Visit every package-bearing directory below (and including) `root`.
///
/// `visit` receives the directory path relative to `root`; the root itself is
/// reported as the empty string. Unreadable directories are treated as empty.
/// The first error returned by `visit` stops the walk.
pub fn walk<F, E>(root: &Path, visit: F) -> Result<(), E>
where
    F: FnMut(&str) -> Result<(), E>,
{
    walk_with(root, list_children, visit)
}

/// [`walk`] with the directory listing supplied by the caller.
pub(crate) fn walk_with<L, F, E>(root: &Path, mut list: L, mut visit: F) -> Result<(), E>
where
    L: FnMut(&Path) -> io::Result<Vec<PathBuf>>,
    F: FnMut(&str) -> Result<(), E>,
{
    let walker = WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(e) => Some(e),
            Err(err) => {
                tracing::debug!("skipping unreadable entry: {}", err);
                None
            }
        });

    for entry in walker {
        if !entry.file_type().is_dir() {
            continue;
        }
        let dir = entry.path();
        let children = list(dir).unwrap_or_else(|err| {
            tracing::debug!(dir = %dir.display(), "cannot list directory, treating as empty: {}", err);
            Vec::new()
        });
        if contains_source_file(&children) {
            let relative = relativize(root, dir);
            tracing::trace!(dir = %dir.display(), %relative, "package-bearing directory");
            visit(&relative)?;
        }
    }
    Ok(())
}
