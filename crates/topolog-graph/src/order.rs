use std::collections::HashMap;

use topolog_id::CommitId;

use crate::CommitGraph;

impl CommitGraph {
    /// Layered topological order over the whole graph.
    ///
    /// Roots form the first generation; a commit joins the generation
    /// after the one that emitted its last remaining parent. Each
    /// generation is sorted ascending by id, so the sequence runs roots
    /// first and most-derived commits last, every parent strictly before
    /// all of its children. Printed history is this sequence reversed.
    ///
    /// The graph itself is untouched: frontier state lives in a table of
    /// pending-parent counters, decremented as ancestors are emitted.
    pub fn topo_order(&self) -> Vec<CommitId> {
        let mut pending: HashMap<CommitId, usize> = HashMap::with_capacity(self.len());
        for (id, node) in self.nodes() {
            pending.insert(*id, node.parents.len());
        }

        let mut order: Vec<CommitId> = Vec::with_capacity(self.len());
        let mut generation = self.roots();
        while !generation.is_empty() {
            let mut next: Vec<CommitId> = Vec::new();
            for id in &generation {
                order.push(*id);
                let node = match self.node(id) {
                    Some(node) => node,
                    None => continue,
                };
                for child in &node.children {
                    if let Some(count) = pending.get_mut(child) {
                        *count = count.saturating_sub(1);
                        if *count == 0 {
                            next.push(*child);
                        }
                    }
                }
            }
            next.sort_unstable();
            generation = next;
        }
        order
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cid(n: u8) -> CommitId {
        CommitId::from_hex(&format!("{n:040x}")).unwrap()
    }

    fn position(order: &[CommitId], id: CommitId) -> usize {
        order.iter().position(|&x| x == id).unwrap()
    }

    #[test]
    fn empty_graph_orders_nothing() {
        let graph = CommitGraph::new();
        assert!(graph.topo_order().is_empty());
    }

    #[test]
    fn single_root() {
        let mut graph = CommitGraph::new();
        graph.add_commit(cid(1), &[]);
        assert_eq!(graph.topo_order(), vec![cid(1)]);
    }

    #[test]
    fn linear_chain_runs_root_to_tip() {
        let mut graph = CommitGraph::new();
        graph.add_commit(cid(1), &[]);
        graph.add_commit(cid(2), &[cid(1)]);
        graph.add_commit(cid(3), &[cid(2)]);
        assert_eq!(graph.topo_order(), vec![cid(1), cid(2), cid(3)]);
    }

    #[test]
    fn parents_always_precede_children() {
        let mut graph = CommitGraph::new();
        graph.add_commit(cid(1), &[]);
        graph.add_commit(cid(2), &[cid(1)]);
        graph.add_commit(cid(3), &[cid(1)]);
        graph.add_commit(cid(4), &[cid(2), cid(3)]);
        graph.add_commit(cid(5), &[cid(4), cid(1)]);

        let order = graph.topo_order();
        assert_eq!(order.len(), 5);
        for (id, node) in
            order.iter().map(|id| (*id, graph.node(id).unwrap()))
        {
            for parent in &node.parents {
                assert!(position(&order, *parent) < position(&order, id));
            }
        }
    }

    #[test]
    fn generations_sort_ascending_by_id() {
        // Diamond with the higher-id branch added first.
        let mut graph = CommitGraph::new();
        graph.add_commit(cid(1), &[]);
        graph.add_commit(cid(9), &[cid(1)]);
        graph.add_commit(cid(2), &[cid(1)]);
        graph.add_commit(cid(5), &[cid(9), cid(2)]);

        // Generations: [1], [2, 9], [5].
        assert_eq!(
            graph.topo_order(),
            vec![cid(1), cid(2), cid(9), cid(5)]
        );
    }

    #[test]
    fn commit_waits_for_its_last_parent() {
        // 4's parents sit in different generations: 1 (gen 0) and 3 (gen 2).
        let mut graph = CommitGraph::new();
        graph.add_commit(cid(1), &[]);
        graph.add_commit(cid(2), &[cid(1)]);
        graph.add_commit(cid(3), &[cid(2)]);
        graph.add_commit(cid(4), &[cid(1), cid(3)]);

        assert_eq!(
            graph.topo_order(),
            vec![cid(1), cid(2), cid(3), cid(4)]
        );
    }

    #[test]
    fn disjoint_components_interleave_by_generation() {
        let mut graph = CommitGraph::new();
        graph.add_commit(cid(1), &[]);
        graph.add_commit(cid(3), &[cid(1)]);
        graph.add_commit(cid(2), &[]);
        graph.add_commit(cid(4), &[cid(2)]);

        // Both roots are generation zero, both tips generation one.
        assert_eq!(
            graph.topo_order(),
            vec![cid(1), cid(2), cid(3), cid(4)]
        );
    }

    #[test]
    fn ordering_leaves_the_graph_untouched() {
        let mut graph = CommitGraph::new();
        graph.add_commit(cid(1), &[]);
        graph.add_commit(cid(2), &[cid(1)]);
        graph.add_commit(cid(3), &[cid(1), cid(2)]);

        let before = graph.clone();
        let _ = graph.topo_order();
        assert_eq!(graph, before);
    }

    #[test]
    fn repeated_runs_agree() {
        let mut graph = CommitGraph::new();
        graph.add_commit(cid(1), &[]);
        graph.add_commit(cid(7), &[cid(1)]);
        graph.add_commit(cid(4), &[cid(1)]);
        graph.add_commit(cid(9), &[cid(7), cid(4)]);

        assert_eq!(graph.topo_order(), graph.topo_order());
    }
}
