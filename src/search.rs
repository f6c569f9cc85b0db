//! Powerset search for valid and minimal adjustment sets.
//!
//! Candidates are enumerated by ascending cardinality, lexicographic within
//! each cardinality, so the search is deterministic and the minimum-size
//! sets surface first in the valid collection.

use tracing::debug;

use crate::dag::Dag;
use crate::model::{ConditioningSet, VarId};
use crate::{blocking, paths};

/// Every valid adjustment set for the graph's treatment/outcome pair.
///
/// A candidate is valid when it contains no descendant of treatment and
/// blocks every back-door path. The full covariate powerset is enumerated —
/// exponential in covariate count, which is inherent to the criterion.
pub fn valid_adjustment_sets(dag: &Dag) -> Vec<ConditioningSet> {
    let backdoor = paths::backdoor_paths(dag);
    let covariates: Vec<VarId> = dag.covariates().collect();
    let treatment = dag.treatment();

    let mut valid = Vec::new();
    let mut candidates = 0usize;
    for size in 0..=covariates.len() {
        for combo in Combinations::new(&covariates, size) {
            candidates += 1;
            // Never condition on a descendant of treatment
            if combo.iter().any(|&v| dag.is_descendant_of(v, treatment)) {
                continue;
            }
            let set: ConditioningSet = combo.into_iter().collect();
            if backdoor.iter().all(|path| blocking::is_path_blocked(dag, path, &set)) {
                valid.push(set);
            }
        }
    }
    debug!(candidates, valid = valid.len(), "searched covariate powerset");
    valid
}

/// The valid adjustment sets of minimum cardinality.
///
/// Empty when no valid set exists at all. When treatment and outcome are
/// already unconfounded the result is exactly the empty set.
pub fn minimal_adjustment_sets(dag: &Dag) -> Vec<ConditioningSet> {
    let valid = valid_adjustment_sets(dag);
    let Some(min_len) = valid.iter().map(ConditioningSet::len).min() else {
        return Vec::new();
    };
    let minimal: Vec<ConditioningSet> =
        valid.into_iter().filter(|s| s.len() == min_len).collect();
    debug!(cardinality = min_len, count = minimal.len(), "selected minimal adjustment sets");
    minimal
}

// ============================================================================
// Combinations
// ============================================================================

/// Lexicographic k-combinations of a slice.
struct Combinations<'a> {
    items: &'a [VarId],
    indices: Vec<usize>,
    done: bool,
}

impl<'a> Combinations<'a> {
    fn new(items: &'a [VarId], size: usize) -> Self {
        Self {
            items,
            indices: (0..size).collect(),
            done: size > items.len(),
        }
    }
}

impl Iterator for Combinations<'_> {
    type Item = Vec<VarId>;

    fn next(&mut self) -> Option<Vec<VarId>> {
        if self.done {
            return None;
        }
        let combo: Vec<VarId> = self.indices.iter().map(|&i| self.items[i]).collect();

        // Advance the rightmost index that can still move right.
        let k = self.indices.len();
        let n = self.items.len();
        let mut i = k;
        loop {
            if i == 0 {
                self.done = true;
                break;
            }
            i -= 1;
            if self.indices[i] != i + n - k {
                self.indices[i] += 1;
                for j in i + 1..k {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
                break;
            }
        }
        Some(combo)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(sets: &[ConditioningSet]) -> Vec<Vec<usize>> {
        let mut out: Vec<Vec<usize>> = sets.iter().map(ConditioningSet::ids).collect();
        out.sort();
        out
    }

    #[test]
    fn test_combinations_order() {
        let items = vec![VarId(2), VarId(3), VarId(4)];
        let pairs: Vec<Vec<VarId>> = Combinations::new(&items, 2).collect();
        assert_eq!(
            pairs,
            vec![
                vec![VarId(2), VarId(3)],
                vec![VarId(2), VarId(4)],
                vec![VarId(3), VarId(4)],
            ]
        );
    }

    #[test]
    fn test_combinations_boundaries() {
        let items = vec![VarId(2), VarId(3)];
        let empty: Vec<Vec<VarId>> = Combinations::new(&items, 0).collect();
        assert_eq!(empty, vec![Vec::<VarId>::new()]);
        let full: Vec<Vec<VarId>> = Combinations::new(&items, 2).collect();
        assert_eq!(full, vec![vec![VarId(2), VarId(3)]]);
        let over: Vec<Vec<VarId>> = Combinations::new(&items, 3).collect();
        assert!(over.is_empty());
    }

    #[test]
    fn test_single_confounder() {
        // 2 → 0, 2 → 1, 0 → 1
        let dag = Dag::from_edges(3, &[(2, 0), (2, 1), (0, 1)], 0, 1).unwrap();
        assert_eq!(ids(&minimal_adjustment_sets(&dag)), vec![vec![2]]);
    }

    #[test]
    fn test_two_confounders_need_both() {
        let dag =
            Dag::from_edges(4, &[(2, 0), (2, 1), (3, 0), (3, 1), (0, 1)], 0, 1).unwrap();
        assert_eq!(ids(&minimal_adjustment_sets(&dag)), vec![vec![2, 3]]);
    }

    #[test]
    fn test_tied_minimal_sets() {
        // 0 ← 2 → 3 → 1: either 2 or 3 closes the fork-chain path.
        let dag = Dag::from_edges(4, &[(2, 0), (2, 3), (3, 1), (0, 1)], 0, 1).unwrap();
        assert_eq!(ids(&minimal_adjustment_sets(&dag)), vec![vec![2], vec![3]]);
    }

    #[test]
    fn test_descendants_of_treatment_are_excluded() {
        // Confounder 2 plus mediator 3 (0 → 3 → 1): no valid set may
        // contain 3, even alongside 2.
        let dag =
            Dag::from_edges(4, &[(2, 0), (2, 1), (0, 3), (3, 1)], 0, 1).unwrap();
        let valid = valid_adjustment_sets(&dag);
        assert!(!valid.is_empty());
        assert!(valid.iter().all(|s| !s.contains(VarId(3))));
        assert_eq!(ids(&minimal_adjustment_sets(&dag)), vec![vec![2]]);
    }

    #[test]
    fn test_unconfounded_graph_needs_nothing() {
        // 0 → 1, isolated 2.
        let dag = Dag::from_edges(3, &[(0, 1)], 0, 1).unwrap();
        let expected: Vec<Vec<usize>> = vec![vec![]];
        assert_eq!(ids(&minimal_adjustment_sets(&dag)), expected);
    }

    #[test]
    fn test_unblockable_backdoor_yields_no_sets() {
        // 1 → 0: the backdoor path has no interior node to condition on.
        let dag = Dag::from_edges(3, &[(1, 0)], 0, 1).unwrap();
        assert!(valid_adjustment_sets(&dag).is_empty());
        assert!(minimal_adjustment_sets(&dag).is_empty());
    }

    #[test]
    fn test_valid_sets_include_supersets_of_minimal() {
        let dag = Dag::from_edges(4, &[(2, 0), (2, 1), (0, 1)], 0, 1).unwrap();
        let valid = ids(&valid_adjustment_sets(&dag));
        assert!(valid.contains(&vec![2]));
        assert!(valid.contains(&vec![2, 3]));
        assert!(!valid.contains(&vec![3]));
    }
}
