use bstr::ByteSlice;
use topolog_id::CommitId;

use crate::{LooseError, LooseObjectIter, LooseObjectStore};

/// A commit pulled out of the store: its id plus the parent ids its
/// header lists, in header order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    pub id: CommitId,
    pub parents: Vec<CommitId>,
}

/// Parse a decompressed payload into a record. `None` unless it is a
/// well-formed commit.
pub(crate) fn parse_commit(id: CommitId, payload: &[u8]) -> Option<CommitRecord> {
    let content = commit_content(payload)?;
    let mut parents = Vec::new();
    for line in content.lines() {
        if line.is_empty() {
            break; // blank line ends the headers, the message follows
        }
        if let Some(rest) = line.strip_prefix(b"parent ") {
            // A parent field that is not exactly 40 hex chars is dropped;
            // the commit itself stays.
            if rest.len() == CommitId::HEX_LEN {
                if let Ok(parent) = CommitId::from_hex_bytes(rest) {
                    parents.push(parent);
                }
            }
        }
    }
    Some(CommitRecord { id, parents })
}

/// Split the `"commit <size>\0"` prefix off a payload, returning the
/// content when the type is `commit` and the declared size is honest.
fn commit_content(payload: &[u8]) -> Option<&[u8]> {
    let rest = payload.strip_prefix(b"commit ")?;
    let nul = rest.find_byte(0)?;
    let size: usize = std::str::from_utf8(&rest[..nul]).ok()?.parse().ok()?;
    let content = &rest[nul + 1..];
    if content.len() != size {
        return None;
    }
    Some(content)
}

/// Iterator over the commit records in a store.
///
/// Anything that fails to decompress, is not a commit, or carries a
/// malformed header is skipped. Only real I/O trouble surfaces as an error.
pub struct CommitRecordIter<'a> {
    store: &'a LooseObjectStore,
    ids: LooseObjectIter,
}

impl Iterator for CommitRecordIter<'_> {
    type Item = Result<CommitRecord, LooseError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let id = match self.ids.next()? {
                Ok(id) => id,
                Err(e) => return Some(Err(e)),
            };
            let payload = match self.store.read_raw(&id) {
                Ok(Some(payload)) => payload,
                // Deleted between enumeration and read.
                Ok(None) => continue,
                // Not zlib data, so not an object.
                Err(LooseError::Decompress { .. }) => continue,
                Err(e) => return Some(Err(e)),
            };
            if let Some(record) = parse_commit(id, &payload) {
                return Some(Ok(record));
            }
        }
    }
}

impl LooseObjectStore {
    /// Iterate over every commit in the store, ascending by id.
    pub fn commits(&self) -> Result<CommitRecordIter<'_>, LooseError> {
        Ok(CommitRecordIter {
            store: self,
            ids: self.iter()?,
        })
    }
}
