//! Search strategies for routing the pursuer across an [OccupancyGrid].
//!
//! A strategy is anything implementing [PathSolver]; the crate ships a
//! breadth-first and a best-first variant, both returning paths of minimum
//! edge count. Strategies hold no per-call state, so one instance can be
//! reused across an arbitrary number of searches.

use grid_util::point::Point;

use crate::grid::OccupancyGrid;

pub mod best_first;
pub mod bfs;

/// A pathfinding strategy over a 4-connected occupancy grid.
pub trait PathSolver {
    /// Computes a route from `start` (inclusive) to `goal` (inclusive) where
    /// consecutive cells differ by one orthogonal step and no cell is
    /// blocked. An empty vector means no path exists; `vec![start]` is the
    /// degenerate `start == goal` case, returned even if that cell is
    /// blocked. An empty grid (zero width or height) yields an empty path
    /// even when `start == goal`: with no cells to stand on there is no
    /// valid goal cell for a path to end at.
    ///
    /// Apart from an empty-grid check, callers are responsible for passing
    /// in-bounds coordinates. The grid is never mutated and no search state
    /// survives the call, so repeated invocations on an unchanged grid
    /// return identical paths.
    fn find_path(&self, grid: &OccupancyGrid, start: Point, goal: Point) -> Vec<Point>;
}

/// Handles the cases both strategies resolve without searching: an empty
/// grid yields no path, and `start == goal` is a trivial single-cell path.
pub(crate) fn trivial_path(grid: &OccupancyGrid, start: Point, goal: Point) -> Option<Vec<Point>> {
    use grid_util::grid::Grid;
    if grid.width() == 0 || grid.height() == 0 {
        return Some(Vec::new());
    }
    if start == goal {
        return Some(vec![start]);
    }
    None
}
