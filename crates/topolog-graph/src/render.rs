use std::collections::BTreeSet;
use std::io::{self, Write};

use topolog_id::CommitId;
use topolog_ref::BranchHeads;

use crate::CommitGraph;

/// Write the history for a construction-ordered sequence, most-derived
/// commit first.
///
/// Adjacent lines are parent-linked unless separated by a discontinuity
/// block: the earlier printed commit's parent ids followed by `=`, a
/// blank line, then `=` followed by the later commit's child ids. Empty
/// id sets leave a bare `=`. A commit some branch points at gets the
/// branch names appended after its hash, ascending.
///
/// Pure presentation: reads the adjacency, mutates nothing.
pub fn write_history<W: Write>(
    out: &mut W,
    graph: &CommitGraph,
    order: &[CommitId],
    heads: &BranchHeads,
) -> io::Result<()> {
    let mut previous: Option<&CommitId> = None;
    let mut at_boundary = false;

    for id in order.iter().rev() {
        if let Some(prev) = previous {
            let prev_node = graph.node(prev);
            let linked = prev_node.map_or(false, |node| node.parents.contains(id));
            if !linked {
                let parent_ids = prev_node.map(|node| join_ids(&node.parents)).unwrap_or_default();
                writeln!(out, "{parent_ids}=")?;
                writeln!(out)?;
                at_boundary = true;
            }
        }

        if at_boundary {
            let child_ids = graph
                .node(id)
                .map(|node| join_ids(&node.children))
                .unwrap_or_default();
            writeln!(out, "={child_ids}")?;
            at_boundary = false;
        }

        match heads.names_for(id) {
            Some(names) => writeln!(out, "{} {}", id, names.join(" "))?,
            None => writeln!(out, "{id}")?,
        }
        previous = Some(id);
    }
    Ok(())
}

fn join_ids(ids: &BTreeSet<CommitId>) -> String {
    ids.iter()
        .map(CommitId::to_hex)
        .collect::<Vec<_>>()
        .join(" ")
}
