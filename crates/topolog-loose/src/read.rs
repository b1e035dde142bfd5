use std::fs;
use std::io::Read;

use flate2::read::ZlibDecoder;
use topolog_id::CommitId;

use crate::{LooseError, LooseObjectStore};

impl LooseObjectStore {
    /// Check if an object file exists for `id`.
    pub fn contains(&self, id: &CommitId) -> bool {
        self.object_path(id).is_file()
    }

    /// Read and zlib-decompress one object's payload.
    ///
    /// Returns `Ok(None)` if no file exists for `id`, and
    /// `LooseError::Decompress` if the file is not valid zlib data.
    pub fn read_raw(&self, id: &CommitId) -> Result<Option<Vec<u8>>, LooseError> {
        let path = self.object_path(id);
        let compressed = match fs::read(&path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(LooseError::Io(e)),
        };

        let mut decoder = ZlibDecoder::new(compressed.as_slice());
        let mut payload = Vec::new();
        decoder
            .read_to_end(&mut payload)
            .map_err(|e| LooseError::Decompress { path, source: e })?;
        Ok(Some(payload))
    }
}
