//! Conditioning set — the covariates adjusted for.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::VarId;

/// An unordered, duplicate-free set of covariates considered for
/// conditioning. A valid adjustment set is a conditioning set that contains
/// no descendant of treatment and blocks every back-door path.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ConditioningSet(BTreeSet<VarId>);

impl ConditioningSet {
    /// The empty conditioning set.
    pub fn new() -> Self {
        Self(BTreeSet::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, id: VarId) -> bool {
        self.0.contains(&id)
    }

    /// Idempotent: returns false if the member already existed.
    pub fn insert(&mut self, id: VarId) -> bool {
        self.0.insert(id)
    }

    /// Members in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = VarId> + '_ {
        self.0.iter().copied()
    }

    /// Sorted raw indices — the shape callers compare against.
    pub fn ids(&self) -> Vec<usize> {
        self.0.iter().map(|v| v.0).collect()
    }
}

impl FromIterator<VarId> for ConditioningSet {
    fn from_iter<I: IntoIterator<Item = VarId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Renders the sorted id list: `[2, 4]`; the empty set as `[]`.
impl fmt::Display for ConditioningSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, id) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{id}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_sorted_ids() {
        let set: ConditioningSet = [VarId(4), VarId(2), VarId(9)].into_iter().collect();
        assert_eq!(set.to_string(), "[2, 4, 9]");
        assert_eq!(set.ids(), vec![2, 4, 9]);
    }

    #[test]
    fn test_display_empty() {
        assert_eq!(ConditioningSet::new().to_string(), "[]");
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut set = ConditioningSet::new();
        assert!(set.insert(VarId(3)));
        assert!(!set.insert(VarId(3)));
        assert_eq!(set.len(), 1);
    }
}
