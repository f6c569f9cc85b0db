//! Variable (node) in the causal DAG.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Stable variable identifier — the row/column index of the variable in the
/// adjacency structure the graph was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VarId(pub usize);

impl std::fmt::Display for VarId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Role of a variable in the causal query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Treatment,
    Outcome,
    Covariate,
}

/// A variable in the causal DAG.
///
/// Relation sets are populated during graph construction and read-only
/// afterwards. Parent/child symmetry across an edge is maintained by the
/// graph's single edge-registration point, never by callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variable {
    pub id: VarId,
    /// Optional human-readable name, carried into reports.
    pub name: Option<String>,
    parents: BTreeSet<VarId>,
    children: BTreeSet<VarId>,
    /// Every variable this one descends from (the "ancestor-of" relation).
    ancestors: BTreeSet<VarId>,
}

impl Variable {
    pub fn new(id: VarId) -> Self {
        Self {
            id,
            name: None,
            parents: BTreeSet::new(),
            children: BTreeSet::new(),
            ancestors: BTreeSet::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Direct causes of this variable.
    pub fn parents(&self) -> &BTreeSet<VarId> {
        &self.parents
    }

    /// Direct effects of this variable.
    pub fn children(&self) -> &BTreeSet<VarId> {
        &self.children
    }

    /// Transitive causes: every variable with a directed path into this one.
    pub fn ancestors(&self) -> &BTreeSet<VarId> {
        &self.ancestors
    }

    pub fn has_parent(&self, id: VarId) -> bool {
        self.parents.contains(&id)
    }

    pub fn has_child(&self, id: VarId) -> bool {
        self.children.contains(&id)
    }

    /// True if this variable descends from `id`.
    pub fn descends_from(&self, id: VarId) -> bool {
        self.ancestors.contains(&id)
    }

    /// Idempotent: returns false if the relation already existed.
    pub(crate) fn add_parent(&mut self, id: VarId) -> bool {
        self.parents.insert(id)
    }

    pub(crate) fn add_child(&mut self, id: VarId) -> bool {
        self.children.insert(id)
    }

    pub(crate) fn set_ancestors(&mut self, ancestors: BTreeSet<VarId>) {
        self.ancestors = ancestors;
    }
}
