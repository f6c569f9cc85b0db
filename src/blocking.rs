//! D-separation blocking rule for a path under a conditioning set.

use crate::dag::Dag;
use crate::model::{ConditioningSet, Path, VarId};

/// True if `curr` is a collider between `prev` and `next`: both path
/// neighbors point into it.
pub fn is_collider(dag: &Dag, prev: VarId, curr: VarId, next: VarId) -> bool {
    let parents = dag.parents(curr);
    parents.contains(&prev) && parents.contains(&next)
}

/// Whether `path` is blocked under `set`.
///
/// Each interior node is classified against its path neighbors:
///
/// - **collider**: the segment is blocked unless the collider itself or one
///   of its direct children is conditioned on — conditioning opens it;
/// - **chain or fork**: the segment is blocked iff the node is conditioned on.
///
/// One blocking interior node blocks the whole path. A path with no interior
/// node (a direct edge) is never blocked.
pub fn is_path_blocked(dag: &Dag, path: &Path, set: &ConditioningSet) -> bool {
    for (prev, curr, next) in path.interior() {
        if is_collider(dag, prev, curr, next) {
            let opened =
                set.contains(curr) || dag.children(curr).iter().any(|&child| set.contains(child));
            if !opened {
                return true;
            }
        } else if set.contains(curr) {
            return true;
        }
    }
    false
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn path(ids: &[usize]) -> Path {
        ids.iter().map(|&i| VarId(i)).collect()
    }

    fn set(ids: &[usize]) -> ConditioningSet {
        ids.iter().map(|&i| VarId(i)).collect()
    }

    #[test]
    fn test_chain_blocked_by_conditioning_on_middle() {
        // 0 → 2 → 1
        let dag = Dag::from_edges(3, &[(0, 2), (2, 1)], 0, 1).unwrap();
        let p = path(&[0, 2, 1]);
        assert!(!is_path_blocked(&dag, &p, &set(&[])));
        assert!(is_path_blocked(&dag, &p, &set(&[2])));
    }

    #[test]
    fn test_fork_blocked_by_conditioning_on_middle() {
        // 0 ← 2 → 1
        let dag = Dag::from_edges(3, &[(2, 0), (2, 1)], 0, 1).unwrap();
        let p = path(&[0, 2, 1]);
        assert!(!is_path_blocked(&dag, &p, &set(&[])));
        assert!(is_path_blocked(&dag, &p, &set(&[2])));
    }

    #[test]
    fn test_collider_blocks_unconditioned() {
        // 0 → 2 ← 1
        let dag = Dag::from_edges(3, &[(0, 2), (1, 2)], 0, 1).unwrap();
        let p = path(&[0, 2, 1]);
        assert!(is_collider(&dag, VarId(0), VarId(2), VarId(1)));
        assert!(is_path_blocked(&dag, &p, &set(&[])));
    }

    #[test]
    fn test_conditioning_on_collider_opens() {
        let dag = Dag::from_edges(3, &[(0, 2), (1, 2)], 0, 1).unwrap();
        let p = path(&[0, 2, 1]);
        assert!(!is_path_blocked(&dag, &p, &set(&[2])));
    }

    #[test]
    fn test_conditioning_on_collider_child_opens() {
        // 0 → 2 ← 1 with 2 → 3.
        let dag = Dag::from_edges(4, &[(0, 2), (1, 2), (2, 3)], 0, 1).unwrap();
        let p = path(&[0, 2, 1]);
        assert!(is_path_blocked(&dag, &p, &set(&[])));
        assert!(!is_path_blocked(&dag, &p, &set(&[3])));
    }

    #[test]
    fn test_one_blocking_node_blocks_whole_path() {
        // 0 ← 2 → 3 → 1: conditioning on 3 blocks even though 2 stays open.
        let dag = Dag::from_edges(4, &[(2, 0), (2, 3), (3, 1)], 0, 1).unwrap();
        let p = path(&[0, 2, 3, 1]);
        assert!(is_path_blocked(&dag, &p, &set(&[3])));
    }

    #[test]
    fn test_direct_edge_is_never_blocked() {
        let dag = Dag::from_edges(3, &[(0, 1)], 0, 1).unwrap();
        let p = path(&[0, 1]);
        assert!(!is_path_blocked(&dag, &p, &set(&[2])));
    }

    #[test]
    fn test_mixed_path_collider_and_fork() {
        // 0 ← 2 → 3 ← 4 → 1: collider at 3 blocks under the empty set;
        // conditioning on 3 opens it, then 2 or 4 must close the path.
        let dag =
            Dag::from_edges(5, &[(2, 0), (2, 3), (4, 3), (4, 1)], 0, 1).unwrap();
        let p = path(&[0, 2, 3, 4, 1]);
        assert!(is_path_blocked(&dag, &p, &set(&[])));
        assert!(!is_path_blocked(&dag, &p, &set(&[3])));
        assert!(is_path_blocked(&dag, &p, &set(&[2, 3])));
        assert!(is_path_blocked(&dag, &p, &set(&[3, 4])));
    }
}
