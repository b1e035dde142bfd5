//! Commit identifiers for the topolog history tool.
//!
//! This crate provides the core `CommitId` type together with the hex
//! encoding/decoding it is built on. Ids are compared bytewise, which is
//! the same order as comparing their lowercase hex renderings; every
//! deterministic ordering in the tool leans on that equivalence.

mod error;
pub mod hex;
mod id;

pub use error::IdError;
pub use id::CommitId;
