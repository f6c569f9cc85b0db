//! Path — an undirected simple path through the DAG.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::VarId;

/// An ordered sequence of distinct variables where each consecutive pair is
/// connected by an edge in either direction. A path never revisits a
/// variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path {
    /// Variables along the path. Always non-empty.
    nodes: SmallVec<[VarId; 8]>,
}

impl Path {
    /// A path consisting of a single variable.
    pub fn single(start: VarId) -> Self {
        let mut nodes = SmallVec::new();
        nodes.push(start);
        Self { nodes }
    }

    /// Number of edges on the path.
    pub fn len(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn start(&self) -> VarId {
        *self.nodes.first().expect("Path always has at least one node")
    }

    pub fn end(&self) -> VarId {
        *self.nodes.last().expect("Path always has at least one node")
    }

    pub fn contains(&self, id: VarId) -> bool {
        self.nodes.contains(&id)
    }

    /// Extend the path by one variable.
    pub fn push(&mut self, id: VarId) {
        self.nodes.push(id);
    }

    /// Variables along the path, in order.
    pub fn nodes(&self) -> &[VarId] {
        &self.nodes
    }

    /// Interior (predecessor, node, successor) triples, the unit the
    /// blocking rule classifies.
    pub fn interior(&self) -> impl Iterator<Item = (VarId, VarId, VarId)> + '_ {
        self.nodes.windows(3).map(|w| (w[0], w[1], w[2]))
    }
}

impl FromIterator<VarId> for Path {
    fn from_iter<I: IntoIterator<Item = VarId>>(iter: I) -> Self {
        let nodes: SmallVec<[VarId; 8]> = iter.into_iter().collect();
        assert!(!nodes.is_empty(), "Path always has at least one node");
        Self { nodes }
    }
}
