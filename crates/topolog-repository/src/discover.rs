use std::fs;
use std::path::{Path, PathBuf};

use crate::RepoError;

/// Walk up from `start` looking for a metadata directory.
pub(crate) fn discover_git_dir(start: &Path) -> Result<PathBuf, RepoError> {
    let start = fs::canonicalize(start).map_err(|_| RepoError::NotFound(start.to_path_buf()))?;

    let mut current = start.clone();
    loop {
        if let Some(git_dir) = metadata_dir_in(&current) {
            return Ok(git_dir);
        }
        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => return Err(RepoError::NotFound(start)),
        }
    }
}

/// The `.git`-suffixed subdirectory of `dir` with the smallest name, if any.
///
/// Unreadable directories count as having none, so the search keeps
/// climbing rather than failing partway up the tree.
fn metadata_dir_in(dir: &Path) -> Option<PathBuf> {
    let entries = fs::read_dir(dir).ok()?;
    let mut best: Option<String> = None;
    for entry in entries.flatten() {
        let name = match entry.file_name().into_string() {
            Ok(name) => name,
            Err(_) => continue,
        };
        if !name.ends_with(".git") {
            continue;
        }
        if !entry.file_type().map(|t| t.is_dir()).unwrap_or(false) {
            continue;
        }
        match &best {
            Some(current) if *current <= name => {}
            _ => best = Some(name),
        }
    }
    best.map(|name| dir.join(name))
}
