//! Property checks over randomly generated DAGs.
//!
//! Node `i` may only pick parents among `0..i`, so generated edge lists
//! can never contain a cycle and every generated graph must order
//! completely.

use std::collections::{HashMap, HashSet};

use proptest::prelude::*;
use topolog_graph::CommitGraph;
use topolog_id::CommitId;
use topolog_ref::BranchHeads;

fn cid(n: usize) -> CommitId {
    CommitId::from_hex(&format!("{n:040x}")).unwrap()
}

fn build(parent_lists: &[Vec<usize>]) -> CommitGraph {
    let mut graph = CommitGraph::new();
    for (i, parents) in parent_lists.iter().enumerate() {
        let parent_ids: Vec<CommitId> = parents.iter().map(|&p| cid(p)).collect();
        graph.add_commit(cid(i), &parent_ids);
    }
    graph
}

fn heads_on(indices: &[usize]) -> BranchHeads {
    let mut heads = BranchHeads::new();
    for &i in indices {
        heads.insert(cid(i), format!("branch{i}"));
    }
    heads
}

/// Every id reachable from the given heads by following parent edges,
/// heads included.
fn reachable_from(graph: &CommitGraph, head_indices: &[usize]) -> HashSet<CommitId> {
    let mut seen: HashSet<CommitId> = HashSet::new();
    let mut stack: Vec<CommitId> = head_indices.iter().map(|&i| cid(i)).collect();
    while let Some(id) = stack.pop() {
        if !seen.insert(id) {
            continue;
        }
        if let Some(node) = graph.node(&id) {
            for parent in &node.parents {
                stack.push(*parent);
            }
        }
    }
    seen
}

fn dag_strategy() -> impl Strategy<Value = Vec<Vec<usize>>> {
    (1usize..24).prop_flat_map(|n| {
        let mut per_node = Vec::with_capacity(n);
        for i in 0..n {
            let candidates: Vec<usize> = (0..i).collect();
            per_node.push(proptest::sample::subsequence(candidates, 0..=i.min(3)));
        }
        per_node
    })
}

fn dag_with_heads() -> impl Strategy<Value = (Vec<Vec<usize>>, Vec<usize>)> {
    dag_strategy().prop_flat_map(|dag| {
        let n = dag.len();
        let candidates: Vec<usize> = (0..n).collect();
        let heads = proptest::sample::subsequence(candidates, 0..=n);
        (Just(dag), heads)
    })
}

proptest! {
    #[test]
    fn order_covers_every_node_once(dag in dag_strategy()) {
        let graph = build(&dag);
        let order = graph.topo_order();
        prop_assert_eq!(order.len(), graph.len());
        let unique: HashSet<CommitId> = order.iter().copied().collect();
        prop_assert_eq!(unique.len(), order.len());
    }

    #[test]
    fn parents_precede_children_in_construction_order(dag in dag_strategy()) {
        let graph = build(&dag);
        let order = graph.topo_order();
        let position: HashMap<CommitId, usize> =
            order.iter().enumerate().map(|(i, id)| (*id, i)).collect();
        for (i, parents) in dag.iter().enumerate() {
            for &p in parents {
                prop_assert!(position[&cid(p)] < position[&cid(i)]);
            }
        }
    }

    #[test]
    fn edge_symmetry_holds(dag in dag_strategy()) {
        let graph = build(&dag);
        for id in graph.ids() {
            let node = graph.node(&id).unwrap();
            for child in &node.children {
                prop_assert!(graph.node(child).unwrap().parents.contains(&id));
            }
            for parent in &node.parents {
                prop_assert!(graph.node(parent).unwrap().children.contains(&id));
            }
        }
    }

    #[test]
    fn ordering_never_mutates_the_graph(dag in dag_strategy()) {
        let graph = build(&dag);
        let before = graph.clone();
        let _ = graph.topo_order();
        prop_assert_eq!(graph, before);
    }

    #[test]
    fn ordering_is_deterministic(dag in dag_strategy()) {
        let graph = build(&dag);
        prop_assert_eq!(graph.topo_order(), graph.topo_order());
    }

    #[test]
    fn pruned_order_is_exactly_the_head_ancestry((dag, heads) in dag_with_heads()) {
        let mut graph = build(&dag);
        let expected = reachable_from(&graph, &heads);

        let mut order = graph.topo_order();
        graph.prune_unreachable(&mut order, &heads_on(&heads));

        let kept: HashSet<CommitId> = order.iter().copied().collect();
        prop_assert_eq!(kept.len(), order.len());
        prop_assert_eq!(kept, expected);
        prop_assert_eq!(graph.len(), order.len());
    }

    #[test]
    fn pruning_is_idempotent((dag, heads) in dag_with_heads()) {
        let mut graph = build(&dag);
        let heads = heads_on(&heads);

        let mut order = graph.topo_order();
        graph.prune_unreachable(&mut order, &heads);
        let first = (order.clone(), graph.clone());

        graph.prune_unreachable(&mut order, &heads);
        prop_assert_eq!((order, graph), first);
    }

    #[test]
    fn surviving_edges_still_respect_the_order((dag, heads) in dag_with_heads()) {
        let mut graph = build(&dag);
        let mut order = graph.topo_order();
        graph.prune_unreachable(&mut order, &heads_on(&heads));

        let position: HashMap<CommitId, usize> =
            order.iter().enumerate().map(|(i, id)| (*id, i)).collect();
        for id in &order {
            let node = graph.node(id).unwrap();
            for parent in &node.parents {
                prop_assert!(position[parent] < position[id]);
            }
        }
    }
}
