//! Repository discovery and path layout.
//!
//! Finds the repository metadata directory by walking up from a starting
//! point and hands out the paths the rest of the pipeline reads from. No
//! state is loaded here; the objects and refs directories are only read
//! by their own crates.

mod discover;
mod error;

pub use error::RepoError;

use std::path::{Path, PathBuf};

/// A located repository, reduced to its metadata directory.
#[derive(Debug, Clone)]
pub struct Repository {
    git_dir: PathBuf,
}

impl Repository {
    /// Walk up from `start` until a directory claims the repository.
    ///
    /// A directory claims it by containing an entry whose name ends in
    /// `.git`: the plain `.git` directory of a working checkout, or a
    /// bare-style `name.git`. When several such entries sit side by side
    /// the lexicographically smallest name wins, which makes `.git`
    /// itself beat any `name.git` sibling.
    pub fn discover(start: impl AsRef<Path>) -> Result<Self, RepoError> {
        let git_dir = discover::discover_git_dir(start.as_ref())?;
        Ok(Self { git_dir })
    }

    /// Use `git_dir` directly instead of searching for it.
    ///
    /// The caller asserted a specific path, so unlike `discover` this
    /// checks the layout: the directory must hold `objects/` and `refs/`.
    pub fn open(git_dir: impl AsRef<Path>) -> Result<Self, RepoError> {
        let path = git_dir.as_ref();
        let git_dir =
            std::fs::canonicalize(path).map_err(|_| RepoError::NotFound(path.to_path_buf()))?;
        if !git_dir.join("objects").is_dir() || !git_dir.join("refs").is_dir() {
            return Err(RepoError::InvalidGitDir {
                path: git_dir,
                reason: "missing objects/ or refs/".to_string(),
            });
        }
        Ok(Self { git_dir })
    }

    /// The repository metadata directory.
    pub fn git_dir(&self) -> &Path {
        &self.git_dir
    }

    /// Where loose objects live.
    pub fn objects_dir(&self) -> PathBuf {
        self.git_dir.join("objects")
    }

    /// Where branch head files live.
    pub fn heads_dir(&self) -> PathBuf {
        self.git_dir.join("refs").join("heads")
    }
}
