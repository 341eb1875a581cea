//! Generic best-first search over a priority queue, together with the
//! predecessor-walk path reconstruction shared with the breadth-first solver.
//! Visited-state bookkeeping lives in an insertion-ordered [IndexMap] so that
//! frontier entries can refer to nodes by index instead of cloning them.

use fxhash::FxBuildHasher;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use num_traits::Zero;

pub type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

/// One frontier entry. `seq` is a strictly increasing insertion counter used
/// as the tie-break between equal estimated costs, so ordering is decided by
/// insertion order rather than by node identity.
struct FrontierEntry<K> {
    estimated_cost: K,
    cost: K,
    seq: usize,
    index: usize,
}

impl<K: PartialEq> Eq for FrontierEntry<K> {}

impl<K: PartialEq> PartialEq for FrontierEntry<K> {
    fn eq(&self, other: &Self) -> bool {
        self.estimated_cost.eq(&other.estimated_cost) && self.seq.eq(&other.seq)
    }
}

impl<K: Ord> PartialOrd for FrontierEntry<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for FrontierEntry<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap, so comparisons are reversed: smallest
        // estimated cost first, earliest insertion first among equals.
        match other.estimated_cost.cmp(&self.estimated_cost) {
            Ordering::Equal => other.seq.cmp(&self.seq),
            s => s,
        }
    }
}

/// Walks predecessor indices from `start` back to the search origin and
/// returns the traversed nodes in origin-to-`start` order.
pub fn reverse_path<N, V, F>(parents: &FxIndexMap<N, V>, mut parent: F, start: usize) -> Vec<N>
where
    N: Eq + Hash + Clone,
    F: FnMut(&V) -> usize,
{
    let mut path: Vec<N> = itertools::unfold(start, |i| {
        parents.get_index(*i).map(|(node, value)| {
            *i = parent(value);
            node.clone()
        })
    })
    .collect();
    path.reverse();
    path
}

/// Expands nodes in order of `cost so far + heuristic`, returning the first
/// path that satisfies `success` along with its cost, or [None] when the
/// frontier empties first. With an admissible heuristic the returned path is
/// optimal.
///
/// Superseded frontier entries are never removed from the heap; a popped
/// entry whose carried cost exceeds the node's best known cost is simply
/// skipped.
pub fn best_first_search<N, C, FN, IN, FH, FS>(
    start: &N,
    mut successors: FN,
    mut heuristic: FH,
    mut success: FS,
) -> Option<(Vec<N>, C)>
where
    N: Eq + Hash + Clone,
    C: Zero + Ord + Copy,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, C)>,
    FH: FnMut(&N) -> C,
    FS: FnMut(&N) -> bool,
{
    let mut frontier = BinaryHeap::new();
    let mut counter: usize = 0;
    frontier.push(FrontierEntry {
        estimated_cost: Zero::zero(),
        cost: Zero::zero(),
        seq: counter,
        index: 0,
    });
    let mut parents: FxIndexMap<N, (usize, C)> = FxIndexMap::default();
    parents.insert(start.clone(), (usize::MAX, Zero::zero()));
    while let Some(FrontierEntry { cost, index, .. }) = frontier.pop() {
        let successors = {
            let (node, &(_, c)) = parents.get_index(index).unwrap();
            if success(node) {
                let path = reverse_path(&parents, |&(p, _)| p, index);
                return Some((path, cost));
            }
            // A node is pushed again each time a cheaper way to it is found.
            // Entries left behind by a later improvement carry an outdated
            // cost and are discarded here.
            if cost > c {
                continue;
            }
            successors(node)
        };
        for (successor, move_cost) in successors {
            let new_cost = cost + move_cost;
            let h; // heuristic(&successor)
            let n; // index for successor
            match parents.entry(successor) {
                Vacant(e) => {
                    h = heuristic(e.key());
                    n = e.index();
                    e.insert((index, new_cost));
                }
                Occupied(mut e) => {
                    if e.get().1 > new_cost {
                        h = heuristic(e.key());
                        n = e.index();
                        e.insert((index, new_cost));
                    } else {
                        continue;
                    }
                }
            }
            counter += 1;
            frontier.push(FrontierEntry {
                estimated_cost: new_cost + h,
                cost: new_cost,
                seq: counter,
                index: n,
            });
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Ties on estimated cost must pop in insertion order.
    #[test]
    fn frontier_tie_break_is_insertion_order() {
        let mut heap = BinaryHeap::new();
        for seq in [2usize, 0, 1] {
            heap.push(FrontierEntry {
                estimated_cost: 7,
                cost: 3,
                seq,
                index: seq,
            });
        }
        let order: Vec<usize> = std::iter::from_fn(|| heap.pop().map(|e| e.seq)).collect();
        assert_eq!(order, vec![0, 1, 2]);
    }

    #[test]
    fn frontier_orders_by_estimated_cost() {
        let mut heap = BinaryHeap::new();
        for (est, seq) in [(5, 0usize), (2, 1), (9, 2)] {
            heap.push(FrontierEntry {
                estimated_cost: est,
                cost: est,
                seq,
                index: seq,
            });
        }
        let order: Vec<i32> = std::iter::from_fn(|| heap.pop().map(|e| e.estimated_cost)).collect();
        assert_eq!(order, vec![2, 5, 9]);
    }

    /// Search on a line graph 0 - 1 - 2 - 3 with unit edges.
    #[test]
    fn line_graph_search() {
        let result = best_first_search(
            &0i32,
            |&n| {
                let mut succ = Vec::new();
                if n < 3 {
                    succ.push((n + 1, 1));
                }
                if n > 0 {
                    succ.push((n - 1, 1));
                }
                succ
            },
            |&n| 3 - n,
            |&n| n == 3,
        );
        let (path, cost) = result.unwrap();
        assert_eq!(path, vec![0, 1, 2, 3]);
        assert_eq!(cost, 3);
    }

    #[test]
    fn exhausted_frontier_returns_none() {
        let result = best_first_search(&0i32, |_| Vec::new(), |_| 0, |&n| n == 3);
        assert!(result.is_none());
    }
}
