//! Commit DAG assembly, ordering, pruning, and rendering.
//!
//! The graph is an arena: one table keyed by commit id, with parent and
//! child edge sets stored per node rather than as ownership links.
//! Ordering never mutates the graph; it runs on a transient table of
//! pending-parent counters, so the adjacency the pruner and renderer see
//! afterwards is exactly what construction built.

mod graph;
mod order;
mod prune;
mod render;

pub use graph::{CommitGraph, CommitNode};
pub use render::write_history;

/// Errors produced while assembling the commit graph.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error(transparent)]
    Loose(#[from] topolog_loose::LooseError),
}
