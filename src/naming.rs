use std::path::{MAIN_SEPARATOR, Path, PathBuf};

/// Convert a directory path relative to a source root into a dotted package
/// identifier, e.g. `de/shadowhunt/maven/` -> `de.shadowhunt.maven`.
pub fn to_package_identifier(relative: &str) -> String {
    relative
        .trim_matches(MAIN_SEPARATOR)
        .replace(MAIN_SEPARATOR, ".")
}

/// Return the part of `path` below `root`, without a leading separator.
///
/// Both paths are made absolute lexically, so neither needs to exist.
/// `relativize(root, root)` is the empty string.
pub fn relativize(root: &Path, path: &Path) -> String {
    let root_abs = absolutize(root);
    let path_abs = absolutize(path);
    match path_abs.strip_prefix(&root_abs) {
        Ok(rel) => rel.to_string_lossy().into_owned(),
        Err(_) => {
            // Not below root: fall back to a plain textual prefix removal.
            let root_str = root_abs.to_string_lossy();
            let path_str = path_abs.to_string_lossy();
            let rest = path_str
                .strip_prefix(root_str.as_ref())
                .unwrap_or(path_str.as_ref());
            rest.trim_start_matches(MAIN_SEPARATOR).to_string()
        }
    }
}

/// Resolve `path` against `base` unless it is already absolute.
pub fn make_absolute(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

fn absolutize(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Join path segments with the host separator.
#[cfg(test)]
pub(crate) fn join_segments(segments: &[&str]) -> String {
    segments.join(std::path::MAIN_SEPARATOR_STR)
}
