//! Best-first search with the Manhattan-distance heuristic.

use grid_util::point::Point;

use crate::grid::OccupancyGrid;
use crate::search::best_first_search;
use crate::solver::{trivial_path, PathSolver};

/// Best-first strategy. Orders the frontier by accumulated step count plus
/// the Manhattan distance to the goal, which is admissible and consistent on
/// a 4-connected unit-cost grid, so the returned path is optimal. Ties on
/// the estimate break by frontier insertion order, making the result
/// deterministic.
#[derive(Clone, Debug, Default)]
pub struct BestFirstSolver;

impl BestFirstSolver {
    pub fn new() -> BestFirstSolver {
        BestFirstSolver
    }
}

fn manhattan_distance(a: &Point, b: &Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

impl PathSolver for BestFirstSolver {
    fn find_path(&self, grid: &OccupancyGrid, start: Point, goal: Point) -> Vec<Point> {
        if let Some(path) = trivial_path(grid, start, goal) {
            return path;
        }
        best_first_search(
            &start,
            |node| grid.open_neighbours(node),
            |node| manhattan_distance(node, &goal),
            |node| *node == goal,
        )
        .map(|(path, _cost)| path)
        .unwrap_or_default()
    }
}
