use std::fs;
use std::path::{Path, PathBuf};

use topolog_id::{hex, CommitId};

use crate::{LooseError, LooseObjectStore};

/// Iterator over the ids of every loose object in a store.
///
/// Walks the two-hex-char fan-out directories under the objects directory
/// and yields each id in ascending order. Entries that do not look like
/// object files (temp files, `pack/`, `info/`, stray names) are skipped.
pub struct LooseObjectIter {
    /// Sorted list of fan-out directory paths.
    shards: Vec<PathBuf>,
    shard_index: usize,
    /// Ids decoded from the current fan-out directory, sorted ascending.
    current_ids: Vec<CommitId>,
    id_index: usize,
}

impl LooseObjectIter {
    fn new(objects_dir: &Path) -> Result<Self, LooseError> {
        let mut shards: Vec<PathBuf> = Vec::new();
        if objects_dir.is_dir() {
            for entry in fs::read_dir(objects_dir)? {
                let entry = entry?;
                let name = entry.file_name();
                let name = name.to_string_lossy();
                // Fan-out directories are exactly 2 hex chars.
                if name.len() == 2
                    && hex::is_hex(name.as_bytes())
                    && entry.file_type()?.is_dir()
                {
                    shards.push(entry.path());
                }
            }
        }
        shards.sort();

        Ok(Self {
            shards,
            shard_index: 0,
            current_ids: Vec::new(),
            id_index: 0,
        })
    }

    /// Decode ids out of the next non-empty fan-out directory.
    fn advance_shard(&mut self) -> Result<bool, LooseError> {
        while self.shard_index < self.shards.len() {
            let shard_path = &self.shards[self.shard_index];
            self.shard_index += 1;
            let prefix = match shard_path.file_name() {
                Some(name) => name.to_string_lossy().to_lowercase(),
                None => continue,
            };

            let mut ids: Vec<CommitId> = Vec::new();
            for entry in fs::read_dir(shard_path)? {
                let entry = entry?;
                if !entry.file_type()?.is_file() {
                    continue;
                }
                let name = entry.file_name();
                let name = name.to_string_lossy();
                // The filename carries the remaining 38 hex chars of the id.
                if name.len() != CommitId::HEX_LEN - 2 || !hex::is_hex(name.as_bytes()) {
                    continue;
                }
                let hex_id = format!("{prefix}{name}");
                if let Ok(id) = CommitId::from_hex(&hex_id) {
                    ids.push(id);
                }
            }
            ids.sort_unstable();

            if !ids.is_empty() {
                self.current_ids = ids;
                self.id_index = 0;
                return Ok(true);
            }
        }
        Ok(false)
    }
}

impl Iterator for LooseObjectIter {
    type Item = Result<CommitId, LooseError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.id_index < self.current_ids.len() {
                let id = self.current_ids[self.id_index];
                self.id_index += 1;
                return Some(Ok(id));
            }

            match self.advance_shard() {
                Ok(true) => continue,
                Ok(false) => return None,
                Err(e) => return Some(Err(e)),
            }
        }
    }
}

impl LooseObjectStore {
    /// Iterate over all loose object ids, ascending.
    pub fn iter(&self) -> Result<LooseObjectIter, LooseError> {
        LooseObjectIter::new(&self.objects_dir)
    }
}
