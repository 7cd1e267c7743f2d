//! Path reconstruction from backlinks

use std::collections::HashMap;
use std::hash::Hash;

/// Follow backlinks from `goal` to `start` and return the forward path.
///
/// Returns an empty path when the chain breaks before reaching `start`.
pub(crate) fn reconstruct_path<V, F>(start: &V, goal: &V, mut incoming: F) -> Vec<V>
where
    V: Clone + Eq,
    F: FnMut(&V) -> Option<V>,
{
    let mut path = vec![goal.clone()];
    let mut current = goal.clone();

    while current != *start {
        match incoming(&current) {
            Some(pred) => {
                path.push(pred.clone());
                current = pred;
            }
            None => return Vec::new(),
        }
    }

    path.reverse();
    path
}

/// `reconstruct_path` over a plain predecessor map
pub(crate) fn reconstruct_from_map<V>(start: &V, goal: &V, predecessors: &HashMap<V, V>) -> Vec<V>
where
    V: Clone + Eq + Hash,
{
    reconstruct_path(start, goal, |v| predecessors.get(v).cloned())
}
