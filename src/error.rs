use std::path::PathBuf;
use thiserror::Error;

/// Fatal failures raised while generating package-info.java files.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("invalid package pattern `{pattern}`")]
    PatternCompilation {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error(
        "could not create all necessary but nonexistent parent directories for {}",
        path.display()
    )]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("content of {} cannot be represented in {encoding}", path.display())]
    Unencodable {
        path: PathBuf,
        encoding: &'static str,
    },
}
