//! Undirected path enumeration between two variables.
//!
//! Back-door paths may traverse edges against their causal direction, so the
//! search treats the DAG as undirected: from each partial path the frontier
//! extends to both children and parents of the tip.

use std::collections::VecDeque;

use tracing::debug;

use crate::dag::Dag;
use crate::model::{Path, VarId};

/// Every undirected simple path from `start` to `target`.
///
/// Breadth-first over partial paths: the queue is seeded with `[start]`; a
/// dequeued path ending at `target` is complete, otherwise it is extended by
/// each neighbor not already on it. Paths are simple, so the search
/// terminates on any finite graph. Result order is deterministic.
pub fn find_all_paths(dag: &Dag, start: VarId, target: VarId) -> Vec<Path> {
    let mut complete = Vec::new();
    let mut queue: VecDeque<Path> = VecDeque::new();
    queue.push_back(Path::single(start));

    while let Some(path) = queue.pop_front() {
        let tip = path.end();
        if tip == target {
            complete.push(path);
            continue;
        }
        for neighbor in dag.neighbors(tip) {
            // Simple paths only
            if path.contains(neighbor) {
                continue;
            }
            let mut extended = path.clone();
            extended.push(neighbor);
            queue.push_back(extended);
        }
    }

    complete
}

/// True if `path` leaves treatment against the causal direction — its second
/// node is a parent of treatment. The direct causal edge treatment → outcome
/// and every path starting along an outgoing edge of treatment are not
/// back-door paths.
pub fn is_backdoor(dag: &Dag, path: &Path) -> bool {
    let treatment = dag.treatment();
    path.start() == treatment
        && path
            .nodes()
            .get(1)
            .is_some_and(|second| dag.parents(treatment).contains(second))
}

/// All back-door paths between treatment and outcome.
pub fn backdoor_paths(dag: &Dag) -> Vec<Path> {
    let all = find_all_paths(dag, dag.treatment(), dag.outcome());
    let total = all.len();
    let backdoor: Vec<Path> = all.into_iter().filter(|p| is_backdoor(dag, p)).collect();
    debug!(total, backdoor = backdoor.len(), "enumerated treatment-outcome paths");
    backdoor
}

// ============================================================================
// Tests
// ============================================================================
