//! CLI-level errors. The engine itself only ever answers match or
//! no-match; everything that can actually fail lives out here.

use std::path::PathBuf;

/// Fatal failures surfaced by the search commands. Per-file read problems
/// are downgraded to stderr warnings and never reach this type.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("cannot walk {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
