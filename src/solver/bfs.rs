//! Unweighted breadth-first search: FIFO expansion over the discovery map.

use std::collections::VecDeque;

use grid_util::point::Point;
use indexmap::map::Entry::Vacant;

use crate::grid::{OccupancyGrid, NEIGHBOUR_ORDER};
use crate::search::{reverse_path, FxIndexMap};
use crate::solver::{trivial_path, PathSolver};

/// Breadth-first strategy. Explores cells in order of discovery, so the
/// first time the goal is dequeued the reconstructed path has minimum edge
/// count on the unit-cost grid.
#[derive(Clone, Debug, Default)]
pub struct BfsSolver;

impl BfsSolver {
    pub fn new() -> BfsSolver {
        BfsSolver
    }
}

impl PathSolver for BfsSolver {
    fn find_path(&self, grid: &OccupancyGrid, start: Point, goal: Point) -> Vec<Point> {
        if let Some(path) = trivial_path(grid, start, goal) {
            return path;
        }
        // The discovery map doubles as the came-from mapping: each cell maps
        // to the index of its predecessor, the start to usize::MAX.
        let mut parents: FxIndexMap<Point, usize> = FxIndexMap::default();
        parents.insert(start, usize::MAX);
        let mut queue: VecDeque<usize> = VecDeque::new();
        queue.push_back(0);
        while let Some(index) = queue.pop_front() {
            let (&node, _) = parents.get_index(index).unwrap();
            if node == goal {
                return reverse_path(&parents, |&p| p, index);
            }
            for (dx, dy) in NEIGHBOUR_ORDER {
                let neighbour = Point::new(node.x + dx, node.y + dy);
                if !grid.can_move_to(neighbour) {
                    continue;
                }
                if let Vacant(e) = parents.entry(neighbour) {
                    queue.push_back(e.index());
                    e.insert(index);
                }
            }
        }
        Vec::new()
    }
}
