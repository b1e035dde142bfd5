//! Branch head collection.
//!
//! Reads the files under `refs/heads/` and maps each target commit to the
//! branch names pointing at it. Nested directories become `/`-separated
//! name segments, so `refs/heads/feature/login` is the branch
//! `feature/login`.

mod heads;

pub use heads::BranchHeads;

use std::path::PathBuf;

/// Errors from branch head collection.
#[derive(Debug, thiserror::Error)]
pub enum RefError {
    #[error("I/O error on {path}: {source}")]
    IoPath {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
