//! # backdoor-rs — Covariate Adjustment Sets for Causal DAGs
//!
//! Identifies valid and minimal covariate adjustment sets for estimating the
//! causal effect of a treatment on an outcome in a directed acyclic graph,
//! via Pearl's back-door criterion.
//!
//! ## Design Principles
//!
//! 1. **Pure data model**: `Variable`, `Path`, `ConditioningSet` are clean DTOs
//! 2. **Index-based relations**: the `Dag` arena owns everything; no reference cycles
//! 3. **Deterministic traversal**: relation sets iterate in ascending id order
//! 4. **Results, not prints**: the search returns sets; rendering is a separate layer
//!
//! ## Quick Start
//!
//! ```rust
//! use backdoor_rs::Dag;
//!
//! # fn example() -> backdoor_rs::Result<()> {
//! // Variable 2 causes both treatment (index 0) and outcome (index 1):
//! // a classic confounder. Edges are (parent, child) pairs.
//! let dag = Dag::from_edges(3, &[(0, 1), (2, 0), (2, 1)], 0, 1)?;
//!
//! let minimal = dag.minimal_adjustment_sets();
//! assert_eq!(minimal.len(), 1);
//! assert_eq!(minimal[0].ids(), vec![2]);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Pipeline
//!
//! | Phase | Module | Description |
//! |-------|--------|-------------|
//! | Build | `dag` | Validate input, register edges, close ancestor sets |
//! | Enumerate | `paths` | All undirected simple paths treatment → outcome |
//! | Filter | `paths` | Keep the back-door paths |
//! | Search | `search` | Powerset of covariates, `blocking` check per path |

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod dag;
pub mod paths;
pub mod blocking;
pub mod search;
pub mod export;

// ============================================================================
// Re-exports: Model (the DTOs)
// ============================================================================

pub use model::{ConditioningSet, Path, Role, VarId, Variable};

// ============================================================================
// Re-exports: Graph
// ============================================================================

pub use dag::{Dag, DagDescription};

// ============================================================================
// Re-exports: Rendering
// ============================================================================

pub use export::{export_json, render_report};

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Adjacency matrix is not square: row {row} has {got} columns, expected {expected}")]
    NonSquareMatrix { row: usize, got: usize, expected: usize },

    #[error("Self-loop on variable {0}: a DAG edge cannot start and end at the same variable")]
    SelfLoop(usize),

    #[error("Variable index {index} out of range for a graph of {count} variables")]
    IndexOutOfRange { index: usize, count: usize },

    #[error("Treatment and outcome must be distinct variables, both given as {0}")]
    TreatmentIsOutcome(usize),

    #[error("Graph needs at least two variables (treatment and outcome), got {0}")]
    TooFewVariables(usize),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
