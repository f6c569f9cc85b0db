//! The causal DAG — an arena of variables with index-based relations.
//!
//! Construction is fail-fast: every entry point validates the complete input
//! before the first mutation, so a failed call never leaks a partially built
//! graph. Ancestor sets are computed by an explicit closure pass over the
//! parent relation after all edges are registered, which makes the result
//! independent of edge insertion order.
//!
//! Acyclicity is assumed, not verified.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::model::{ConditioningSet, Path, Role, VarId, Variable};
use crate::{Error, Result, blocking, paths, search};

// ============================================================================
// DagDescription
// ============================================================================

/// Caller-supplied DAG description — the JSON/API input shape.
///
/// `edges` are (parent, child) index pairs. `names` is an optional
/// index → display-name map carried through to reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DagDescription {
    pub variables: usize,
    pub edges: Vec<(usize, usize)>,
    pub treatment: usize,
    pub outcome: usize,
    #[serde(default)]
    pub names: BTreeMap<usize, String>,
}

// ============================================================================
// Dag
// ============================================================================

/// A directed acyclic graph over variables, with one designated treatment
/// and one designated outcome. All remaining variables are covariates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dag {
    variables: Vec<Variable>,
    treatment: VarId,
    outcome: VarId,
}

impl Dag {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Build from a square 0/1 adjacency matrix: `matrix[i][j] != 0` is an
    /// edge i → j.
    pub fn from_adjacency(matrix: &[Vec<u8>], treatment: usize, outcome: usize) -> Result<Self> {
        let n = matrix.len();
        for (row, cols) in matrix.iter().enumerate() {
            if cols.len() != n {
                return Err(Error::NonSquareMatrix { row, got: cols.len(), expected: n });
            }
        }

        let mut edges = Vec::new();
        for (i, cols) in matrix.iter().enumerate() {
            for (j, &cell) in cols.iter().enumerate() {
                if cell != 0 {
                    edges.push((i, j));
                }
            }
        }
        Self::from_edges(n, &edges, treatment, outcome)
    }

    /// Build from an edge list of (parent, child) index pairs.
    pub fn from_edges(
        count: usize,
        edges: &[(usize, usize)],
        treatment: usize,
        outcome: usize,
    ) -> Result<Self> {
        // Validate everything before mutating anything.
        if count < 2 {
            return Err(Error::TooFewVariables(count));
        }
        if treatment == outcome {
            return Err(Error::TreatmentIsOutcome(treatment));
        }
        for index in [treatment, outcome] {
            if index >= count {
                return Err(Error::IndexOutOfRange { index, count });
            }
        }
        for &(parent, child) in edges {
            for index in [parent, child] {
                if index >= count {
                    return Err(Error::IndexOutOfRange { index, count });
                }
            }
            if parent == child {
                return Err(Error::SelfLoop(parent));
            }
        }

        let mut dag = Self {
            variables: (0..count).map(|i| Variable::new(VarId(i))).collect(),
            treatment: VarId(treatment),
            outcome: VarId(outcome),
        };
        for &(parent, child) in edges {
            dag.add_edge(VarId(parent), VarId(child));
        }
        dag.close_ancestors();
        Ok(dag)
    }

    /// Build from a caller-supplied description (e.g. a deserialized API
    /// payload).
    pub fn from_description(desc: &DagDescription) -> Result<Self> {
        for &index in desc.names.keys() {
            if index >= desc.variables {
                return Err(Error::IndexOutOfRange { index, count: desc.variables });
            }
        }
        let mut dag = Self::from_edges(desc.variables, &desc.edges, desc.treatment, desc.outcome)?;
        for (&index, name) in &desc.names {
            dag.variables[index].name = Some(name.clone());
        }
        Ok(dag)
    }

    /// Parse a JSON [`DagDescription`] and build the graph.
    pub fn from_json(json: &str) -> Result<Self> {
        let desc: DagDescription = serde_json::from_str(json)?;
        Self::from_description(&desc)
    }

    /// Register `child` as a child of `parent` and `parent` as a parent of
    /// `child`. Re-adding an existing edge is a no-op.
    fn add_edge(&mut self, parent: VarId, child: VarId) {
        self.variables[child.0].add_parent(parent);
        self.variables[parent.0].add_child(child);
    }

    /// Transitive closure over the parent relation. Order-independent, so
    /// it runs once after all edges are registered.
    fn close_ancestors(&mut self) {
        for index in 0..self.variables.len() {
            let mut seen: BTreeSet<VarId> = BTreeSet::new();
            let mut frontier: Vec<VarId> =
                self.variables[index].parents().iter().copied().collect();
            while let Some(current) = frontier.pop() {
                if seen.insert(current) {
                    frontier.extend(self.variables[current.0].parents().iter().copied());
                }
            }
            self.variables[index].set_ancestors(seen);
        }
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn var_count(&self) -> usize {
        self.variables.len()
    }

    /// Look up a variable by id.
    pub fn variable(&self, id: VarId) -> Option<&Variable> {
        self.variables.get(id.0)
    }

    /// Indexed access for ids produced by this graph, which are always valid.
    pub(crate) fn var(&self, id: VarId) -> &Variable {
        &self.variables[id.0]
    }

    pub fn treatment(&self) -> VarId {
        self.treatment
    }

    pub fn outcome(&self) -> VarId {
        self.outcome
    }

    pub fn role(&self, id: VarId) -> Role {
        if id == self.treatment {
            Role::Treatment
        } else if id == self.outcome {
            Role::Outcome
        } else {
            Role::Covariate
        }
    }

    /// Every variable that is neither treatment nor outcome, ascending.
    pub fn covariates(&self) -> impl Iterator<Item = VarId> + '_ {
        let (treatment, outcome) = (self.treatment, self.outcome);
        self.variables
            .iter()
            .map(|v| v.id)
            .filter(move |&id| id != treatment && id != outcome)
    }

    pub fn parents(&self, id: VarId) -> &BTreeSet<VarId> {
        self.var(id).parents()
    }

    pub fn children(&self, id: VarId) -> &BTreeSet<VarId> {
        self.var(id).children()
    }

    pub fn ancestors(&self, id: VarId) -> &BTreeSet<VarId> {
        self.var(id).ancestors()
    }

    /// True if `id` descends from `ancestor`.
    pub fn is_descendant_of(&self, id: VarId, ancestor: VarId) -> bool {
        self.var(id).descends_from(ancestor)
    }

    pub fn has_edge(&self, parent: VarId, child: VarId) -> bool {
        self.var(parent).has_child(child)
    }

    /// Undirected neighbors for path traversal: children first, then
    /// parents, each in ascending id order. Deterministic, which makes path
    /// enumeration order deterministic too.
    pub(crate) fn neighbors(&self, id: VarId) -> impl Iterator<Item = VarId> + '_ {
        let v = self.var(id);
        v.children().iter().copied().chain(v.parents().iter().copied())
    }

    // ========================================================================
    // Adjustment set search
    // ========================================================================

    /// Every undirected simple path between treatment and outcome.
    pub fn treatment_outcome_paths(&self) -> Vec<Path> {
        paths::find_all_paths(self, self.treatment, self.outcome)
    }

    /// The back-door paths between treatment and outcome.
    pub fn backdoor_paths(&self) -> Vec<Path> {
        paths::backdoor_paths(self)
    }

    /// True if `path` is blocked under `set` per the d-separation rule.
    pub fn is_path_blocked(&self, path: &Path, set: &ConditioningSet) -> bool {
        blocking::is_path_blocked(self, path, set)
    }

    /// Every valid adjustment set: conditioning sets that contain no
    /// descendant of treatment and block every back-door path.
    ///
    /// Enumerates the full covariate powerset — exponential in covariate
    /// count, which is inherent to the criterion.
    pub fn valid_adjustment_sets(&self) -> Vec<ConditioningSet> {
        search::valid_adjustment_sets(self)
    }

    /// The valid adjustment sets of minimum cardinality. Empty when no valid
    /// set exists at all; contains the empty set when treatment and outcome
    /// are already unconfounded.
    pub fn minimal_adjustment_sets(&self) -> Vec<ConditioningSet> {
        search::minimal_adjustment_sets(self)
    }
}

// ============================================================================
// Tests
// ============================================================================
