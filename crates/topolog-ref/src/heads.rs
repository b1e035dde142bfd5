use std::collections::HashMap;
use std::fs;
use std::path::Path;

use topolog_id::CommitId;

use crate::RefError;

/// Branch names keyed by the commit they point at.
///
/// The name list for one commit stays sorted ascending, which is the
/// order the output format appends decorations in.
#[derive(Debug, Default)]
pub struct BranchHeads {
    heads: HashMap<CommitId, Vec<String>>,
}

impl BranchHeads {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect branch heads from a `refs/heads` directory.
    ///
    /// A missing directory reads as no branches. Files without a 40-hex
    /// target line (symbolic refs, empty or garbled files) are ignored,
    /// as are `.lock` files and entries with non-UTF-8 names.
    pub fn read(heads_dir: impl AsRef<Path>) -> Result<Self, RefError> {
        let mut heads = Self::new();
        collect_heads_recursive(heads_dir.as_ref(), "", &mut heads)?;
        Ok(heads)
    }

    /// Associate `name` with `id`, keeping the name list sorted.
    pub fn insert(&mut self, id: CommitId, name: impl Into<String>) {
        let names = self.heads.entry(id).or_default();
        let name = name.into();
        if let Err(pos) = names.binary_search(&name) {
            names.insert(pos, name);
        }
    }

    /// The branch names pointing at `id`, ascending, if any.
    pub fn names_for(&self, id: &CommitId) -> Option<&[String]> {
        self.heads.get(id).map(Vec::as_slice)
    }

    /// Whether any branch points at `id`.
    pub fn contains(&self, id: &CommitId) -> bool {
        self.heads.contains_key(id)
    }

    /// Number of distinct commits with at least one branch on them.
    pub fn len(&self) -> usize {
        self.heads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heads.is_empty()
    }
}

fn collect_heads_recursive(
    dir: &Path,
    prefix: &str,
    heads: &mut BranchHeads,
) -> Result<(), RefError> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
        Err(e) => {
            return Err(RefError::IoPath {
                path: dir.to_path_buf(),
                source: e,
            })
        }
    };

    for entry in entries {
        let entry = entry.map_err(|e| RefError::IoPath {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let name = match entry.file_name().into_string() {
            Ok(name) => name,
            // Branch names are printed verbatim, so skip what has no
            // clean text form.
            Err(_) => continue,
        };
        let path = entry.path();

        if path.is_dir() {
            collect_heads_recursive(&path, &format!("{prefix}{name}/"), heads)?;
        } else if path.is_file() {
            if name.ends_with(".lock") {
                continue;
            }
            if let Some(id) = read_head_target(&path)? {
                heads.insert(id, format!("{prefix}{name}"));
            }
        }
    }
    Ok(())
}

/// First line of the file that is exactly a 40-hex id, if any.
fn read_head_target(path: &Path) -> Result<Option<CommitId>, RefError> {
    let contents = fs::read(path).map_err(|e| RefError::IoPath {
        path: path.to_path_buf(),
        source: e,
    })?;
    for line in contents.split(|&b| b == b'\n') {
        if line.len() == CommitId::HEX_LEN {
            if let Ok(id) = CommitId::from_hex_bytes(line) {
                return Ok(Some(id));
            }
        }
    }
    Ok(None)
}
