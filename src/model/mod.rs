//! # Causal Graph Model
//!
//! Clean DTOs shared by every phase: graph construction, path enumeration,
//! blocking evaluation, and the adjustment set search.
//!
//! Design rule: this module is pure data — no I/O, no traversal logic.
//! Relations between variables are index-based (`VarId`), so the `Dag`
//! arena owns every variable and nothing holds a reference to anything.

pub mod variable;
pub mod path;
pub mod conditioning;

pub use variable::{Role, VarId, Variable};
pub use path::Path;
pub use conditioning::ConditioningSet;
