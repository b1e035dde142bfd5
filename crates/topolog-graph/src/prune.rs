use topolog_id::CommitId;
use topolog_ref::BranchHeads;

use crate::CommitGraph;

impl CommitGraph {
    /// Drop commits no branch head can reach.
    ///
    /// Sweeps the construction order from the most-derived end toward the
    /// roots, removing every node that is neither a head target nor a
    /// parent of a surviving commit. Children always sit later in the
    /// order than their parents, so each removal exposes the next
    /// candidate before the sweep reaches it; one backward pass leaves
    /// exactly the ancestors of the heads. Removed nodes leave both the
    /// order and the graph.
    pub fn prune_unreachable(&mut self, order: &mut Vec<CommitId>, heads: &BranchHeads) {
        let mut index = order.len();
        while index > 0 {
            index -= 1;
            let id = order[index];
            if heads.contains(&id) {
                continue;
            }
            let childless = self.node(&id).map_or(true, |node| node.is_leaf());
            if childless {
                order.remove(index);
                self.remove(&id);
            }
        }
    }
}
