use std::collections::{BTreeSet, HashMap};

use topolog_id::CommitId;
use topolog_loose::LooseObjectStore;

use crate::GraphError;

/// One commit in the DAG. Edges run both ways: `parents` are the commits
/// this one descends from, `children` the commits that list this one as
/// a parent.
///
/// Ordered sets keep every edge iteration ascending by id, which is the
/// tie-break order the whole output format is defined in.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CommitNode {
    pub parents: BTreeSet<CommitId>,
    pub children: BTreeSet<CommitId>,
}

impl CommitNode {
    /// A commit with no parents.
    pub fn is_root(&self) -> bool {
        self.parents.is_empty()
    }

    /// A commit nothing descends from.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// The commit DAG, stored as one arena table keyed by id.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CommitGraph {
    nodes: HashMap<CommitId, CommitNode>,
}

impl CommitGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the graph from every commit record in a loose object store.
    pub fn from_store(store: &LooseObjectStore) -> Result<Self, GraphError> {
        let mut graph = Self::new();
        for record in store.commits()? {
            let record = record?;
            graph.add_commit(record.id, &record.parents);
        }
        Ok(graph)
    }

    /// Record one commit and its parent edges.
    ///
    /// Nodes are created on first sight from either side of an edge. A
    /// parent hash whose own object never shows up in the store stays a
    /// node with no parents of its own, so it reads as a synthetic root.
    /// Duplicate parent entries collapse into the one edge.
    pub fn add_commit(&mut self, id: CommitId, parents: &[CommitId]) {
        self.nodes.entry(id).or_default();
        for parent in parents {
            self.nodes.entry(*parent).or_default().children.insert(id);
            self.nodes.entry(id).or_default().parents.insert(*parent);
        }
    }

    /// Look up a node by id.
    pub fn node(&self, id: &CommitId) -> Option<&CommitNode> {
        self.nodes.get(id)
    }

    pub fn contains(&self, id: &CommitId) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All node ids, ascending.
    pub fn ids(&self) -> Vec<CommitId> {
        let mut ids: Vec<CommitId> = self.nodes.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Ids of all parentless nodes, ascending. These seed the first
    /// generation of the topological order.
    pub fn roots(&self) -> Vec<CommitId> {
        let mut roots: Vec<CommitId> = self
            .nodes
            .iter()
            .filter(|(_, node)| node.is_root())
            .map(|(id, _)| *id)
            .collect();
        roots.sort_unstable();
        roots
    }

    /// Remove a node, stripping it from every neighbor's edge sets.
    ///
    /// Returns false if the node was not present.
    pub fn remove(&mut self, id: &CommitId) -> bool {
        let node = match self.nodes.remove(id) {
            Some(node) => node,
            None => return false,
        };
        for parent in &node.parents {
            if let Some(parent_node) = self.nodes.get_mut(parent) {
                parent_node.children.remove(id);
            }
        }
        for child in &node.children {
            if let Some(child_node) = self.nodes.get_mut(child) {
                child_node.parents.remove(id);
            }
        }
        true
    }

    pub(crate) fn nodes(&self) -> &HashMap<CommitId, CommitNode> {
        &self.nodes
    }
}
