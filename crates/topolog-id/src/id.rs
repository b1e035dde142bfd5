use std::fmt;
use std::str::FromStr;

use crate::hex::{hex_decode, hex_to_string};
use crate::IdError;

/// A commit identifier: the 20-byte digest naming a commit object,
/// written as 40 lowercase hex characters.
///
/// `Ord` compares the raw bytes. Because both nibbles of a byte map to
/// single hex characters, that order is identical to lexicographic order
/// of the lowercase hex renderings, so sorting ids sorts their printed
/// forms too.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CommitId([u8; 20]);

impl CommitId {
    /// Length of the hex rendering.
    pub const HEX_LEN: usize = 40;

    /// Parse from a 40-character hex string. Accepts either case.
    pub fn from_hex(hex: &str) -> Result<Self, IdError> {
        Self::from_hex_bytes(hex.as_bytes())
    }

    /// Parse from 40 hex bytes, e.g. a slice of a decompressed payload
    /// or a pair of directory entry names.
    pub fn from_hex_bytes(hex: &[u8]) -> Result<Self, IdError> {
        let mut bytes = [0u8; 20];
        hex_decode(hex, &mut bytes)?;
        Ok(Self(bytes))
    }

    /// The raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// The hex rendering (lowercase).
    pub fn to_hex(&self) -> String {
        hex_to_string(&self.0)
    }

    /// The loose object path component: `"xx/xxxx..."`.
    pub fn loose_path(&self) -> String {
        let hex = self.to_hex();
        format!("{}/{}", &hex[..2], &hex[2..])
    }
}

impl fmt::Display for CommitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for CommitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CommitId({})", &self.to_hex()[..8])
    }
}

impl FromStr for CommitId {
    type Err = IdError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}
