//! Read side of the loose object store: enumerate, decompress, and parse
//! commit records.
//!
//! Each loose object lives at `objects/XX/YYYY...` where `XX` is the first
//! byte of the id in hex and `YYYY...` is the rest. The file content is
//! zlib-compressed `"<type> <size>\0<content>"`. An object's id is taken
//! from where it sits on disk, never recomputed from its content, and only
//! commit payloads are surfaced; everything else in the directory is
//! skipped.

mod enumerate;
mod read;
mod record;

pub use enumerate::LooseObjectIter;
pub use record::{CommitRecord, CommitRecordIter};

use std::path::{Path, PathBuf};

use topolog_id::CommitId;

/// Interface to a repository's loose object directory.
pub struct LooseObjectStore {
    /// Path to the objects directory.
    objects_dir: PathBuf,
}

impl LooseObjectStore {
    /// Open the loose object store at the given path.
    ///
    /// The directory is not touched until iteration or a read; a missing
    /// directory behaves like an empty store.
    pub fn open(objects_dir: impl AsRef<Path>) -> Self {
        Self {
            objects_dir: objects_dir.as_ref().to_path_buf(),
        }
    }

    /// The objects directory this store reads from.
    pub fn objects_dir(&self) -> &Path {
        &self.objects_dir
    }

    /// Get the file path for a given id.
    pub fn object_path(&self, id: &CommitId) -> PathBuf {
        self.objects_dir.join(id.loose_path())
    }
}

/// Errors from loose object scanning and reading.
#[derive(Debug, thiserror::Error)]
pub enum LooseError {
    #[error("cannot decompress {path}: {source}")]
    Decompress {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
