use crate::naming::make_absolute;
use std::path::{Path, PathBuf};

/// Whether `relative_file` is already present as a regular file in one of
/// `roots`. Relative roots are resolved against `base`; roots are probed in
/// order and the first hit wins.
pub fn exists_in_any_root(relative_file: &Path, roots: &[PathBuf], base: &Path) -> bool {
    roots.iter().any(|root| {
        let candidate = make_absolute(base, root).join(relative_file);
        let found = candidate.is_file();
        if found {
            tracing::trace!(path = %candidate.display(), "found existing file");
        }
        found
    })
}
