//! Occupancy grid model: blocked/free cells plus bounds predicates, with
//! 4-connected component tracking so a driver can test solvability of a
//! generated layout without running a search.

use core::fmt;
use grid_util::grid::{BoolGrid, Grid};
use grid_util::point::Point;
use log::info;
use petgraph::unionfind::UnionFind;

/// Fixed enumeration order of the four orthogonal neighbours. Affects only
/// tie-breaking between equal-length paths, so it must stay consistent for
/// the solvers to be deterministic.
pub const NEIGHBOUR_ORDER: [(i32, i32); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// [OccupancyGrid] stores per-cell occupancy in a [BoolGrid] ([true] meaning
/// blocked) and maintains the 4-connected components of the free cells in a
/// [UnionFind] structure. Implements [Grid] by building on [BoolGrid].
///
/// The solvers only read occupancy; the component structure exists for
/// driver-side queries such as [reachable](Self::reachable) and is kept
/// consistent lazily: blocking a cell marks the components dirty and
/// [update](Self::update) regenerates them on demand.
#[derive(Clone, Debug)]
pub struct OccupancyGrid {
    pub grid: BoolGrid,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
}

impl Default for OccupancyGrid {
    fn default() -> OccupancyGrid {
        OccupancyGrid {
            grid: BoolGrid::default(),
            components: UnionFind::new(0),
            components_dirty: false,
        }
    }
}

impl OccupancyGrid {
    /// True iff `(x, y)` lies within the grid bounds.
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && self.grid.index_in_bounds(x as usize, y as usize)
    }
    /// True iff the cell is occupied by an obstacle. The cell must be in
    /// bounds; check [in_bounds](Self::in_bounds) first.
    pub fn is_blocked(&self, pos: Point) -> bool {
        self.grid.get(pos.x as usize, pos.y as usize)
    }
    /// True iff the cell is in bounds and free.
    pub fn can_move_to(&self, pos: Point) -> bool {
        self.in_bounds(pos.x, pos.y) && !self.is_blocked(pos)
    }
    /// The free orthogonal neighbours of a cell with their unit step cost,
    /// enumerated in [NEIGHBOUR_ORDER].
    pub fn open_neighbours(&self, pos: &Point) -> Vec<(Point, i32)> {
        NEIGHBOUR_ORDER
            .iter()
            .map(|(dx, dy)| Point::new(pos.x + dx, pos.y + dy))
            .filter(|p| self.can_move_to(*p))
            .map(|p| (p, 1))
            .collect::<Vec<_>>()
    }
    fn cell_ix(&self, point: &Point) -> usize {
        self.grid.get_ix(point.x as usize, point.y as usize)
    }
    /// Retrieves the component id a given [Point] belongs to.
    pub fn get_component(&self, point: &Point) -> usize {
        self.components.find(self.cell_ix(point))
    }
    /// Checks if start and goal are on the same component.
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        !self.unreachable(start, goal)
    }
    /// Checks if start and goal are not on the same component. Out-of-bounds
    /// endpoints count as unreachable.
    pub fn unreachable(&self, start: &Point, goal: &Point) -> bool {
        if self.in_bounds(start.x, start.y) && self.in_bounds(goal.x, goal.y) {
            !self.components.equiv(self.cell_ix(start), self.cell_ix(goal))
        } else {
            true
        }
    }
    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            info!("Components are dirty: regenerating components");
            self.generate_components();
        }
    }
    /// Generates a new [UnionFind] structure and links up orthogonal grid
    /// neighbours to the same components.
    pub fn generate_components(&mut self) {
        info!("Generating connected components");
        let w = self.grid.width;
        let h = self.grid.height;
        self.components = UnionFind::new(w * h);
        self.components_dirty = false;
        for x in 0..w {
            for y in 0..h {
                if !self.grid.get(x, y) {
                    let point = Point::new(x as i32, y as i32);
                    let parent_ix = self.grid.get_ix(x, y);
                    // Linking east and south neighbours suffices to cover
                    // every orthogonal adjacency exactly once.
                    let neighbours = [
                        Point::new(point.x + 1, point.y),
                        Point::new(point.x, point.y + 1),
                    ]
                    .into_iter()
                    .filter(|p| self.can_move_to(*p))
                    .map(|p| self.grid.get_ix(p.x as usize, p.y as usize))
                    .collect::<Vec<usize>>();
                    for ix in neighbours {
                        self.components.union(parent_ix, ix);
                    }
                }
            }
        }
    }
}

impl fmt::Display for OccupancyGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Grid:")?;
        for y in 0..self.grid.height {
            let values = (0..self.grid.width)
                .map(|x| self.grid.get(x, y) as i32)
                .collect::<Vec<i32>>();
            writeln!(f, "{:?}", values)?;
        }
        Ok(())
    }
}

impl Grid<bool> for OccupancyGrid {
    fn new(width: usize, height: usize, default_value: bool) -> Self {
        OccupancyGrid {
            grid: BoolGrid::new(width, height, default_value),
            components: UnionFind::new(width * height),
            components_dirty: false,
        }
    }
    fn get(&self, x: usize, y: usize) -> bool {
        self.grid.get(x, y)
    }
    /// Updates a position on the grid. Joins newly connected components and
    /// flags the components as dirty if components are (potentially) broken
    /// apart into multiple.
    fn set(&mut self, x: usize, y: usize, blocked: bool) {
        let p = Point::new(x as i32, y as i32);
        if blocked {
            // Only a genuine free -> blocked transition can split a
            // component. A cell that is already blocked must not be unioned
            // with its neighbours either: it is what separates them.
            if !self.grid.get(x, y) {
                self.components_dirty = true;
            }
        } else {
            let p_ix = self.grid.get_ix(x, y);
            for (n, _) in self.open_neighbours(&p) {
                self.components.union(p_ix, self.cell_ix(&n));
            }
        }
        self.grid.set(x, y, blocked);
    }
    fn width(&self) -> usize {
        self.grid.width()
    }
    fn height(&self) -> usize {
        self.grid.height()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests whether points are correctly mapped to different connected
    /// components.
    #[test]
    fn test_component_generation() {
        // Corresponds to the following 3x2 grid:
        //  ___
        // | # |
        // | # |
        //  ___
        let mut grid = OccupancyGrid::new(3, 2, false);
        grid.grid.set(1, 0, true);
        grid.grid.set(1, 1, true);
        grid.generate_components();
        let p1 = Point::new(0, 0);
        let p2 = Point::new(0, 1);
        let p3 = Point::new(2, 0);
        assert_eq!(grid.get_component(&p1), grid.get_component(&p2));
        assert_ne!(grid.get_component(&p1), grid.get_component(&p3));
    }

    /// Diagonal adjacency must not join components on a 4-connected grid.
    #[test]
    fn diagonal_does_not_connect() {
        //  ___
        // | #|
        // |# |
        //  __
        let mut grid = OccupancyGrid::new(2, 2, true);
        grid.grid.set(0, 0, false);
        grid.grid.set(1, 1, false);
        grid.generate_components();
        assert!(grid.unreachable(&Point::new(0, 0), &Point::new(1, 1)));
    }

    #[test]
    fn reachable_around_obstacle() {
        // |S  |
        // | # |
        // |  G|
        //  ___
        let mut grid = OccupancyGrid::new(3, 3, false);
        grid.set(1, 1, true);
        grid.generate_components();
        assert!(grid.reachable(&Point::new(0, 0), &Point::new(2, 2)));
    }

    /// Unblocking a cell rejoins the components it bridges without a full
    /// regeneration.
    #[test]
    fn unblocking_rejoins_components() {
        let mut grid = OccupancyGrid::new(3, 1, false);
        grid.set(1, 0, true);
        grid.generate_components();
        let left = Point::new(0, 0);
        let right = Point::new(2, 0);
        assert!(grid.unreachable(&left, &right));
        grid.set(1, 0, false);
        assert!(grid.reachable(&left, &right));
    }

    /// Re-blocking an already blocked cell must neither bridge the
    /// components it separates nor mark them dirty.
    #[test]
    fn redundant_block_keeps_components_separate() {
        let mut grid = OccupancyGrid::new(3, 1, false);
        grid.set(1, 0, true);
        grid.generate_components();
        let left = Point::new(0, 0);
        let right = Point::new(2, 0);
        assert!(grid.unreachable(&left, &right));
        grid.set(1, 0, true);
        assert!(!grid.components_dirty);
        grid.update();
        assert!(grid.unreachable(&left, &right));
    }

    /// Blocking a cell marks components dirty; update() regenerates them.
    #[test]
    fn blocking_marks_dirty() {
        let mut grid = OccupancyGrid::new(3, 1, false);
        grid.generate_components();
        grid.set(1, 0, true);
        assert!(grid.components_dirty);
        grid.update();
        assert!(!grid.components_dirty);
        assert!(grid.unreachable(&Point::new(0, 0), &Point::new(2, 0)));
    }

    #[test]
    fn bounds_and_occupancy_predicates() {
        let mut grid = OccupancyGrid::new(2, 3, false);
        grid.set(1, 2, true);
        assert!(grid.in_bounds(0, 0));
        assert!(grid.in_bounds(1, 2));
        assert!(!grid.in_bounds(2, 0));
        assert!(!grid.in_bounds(0, 3));
        assert!(!grid.in_bounds(-1, 0));
        assert!(grid.is_blocked(Point::new(1, 2)));
        assert!(!grid.is_blocked(Point::new(0, 0)));
        assert!(grid.can_move_to(Point::new(0, 2)));
        assert!(!grid.can_move_to(Point::new(1, 2)));
        assert!(!grid.can_move_to(Point::new(-1, 1)));
    }

    #[test]
    fn open_neighbours_enumeration() {
        let mut grid = OccupancyGrid::new(3, 3, false);
        grid.set(1, 0, true);
        let neighbours = grid.open_neighbours(&Point::new(1, 1));
        let points: Vec<Point> = neighbours.iter().map(|(p, _)| *p).collect();
        // (1, 0) is blocked; the remaining three come out in enumeration order.
        assert_eq!(
            points,
            vec![Point::new(1, 2), Point::new(2, 1), Point::new(0, 1)]
        );
        assert!(neighbours.iter().all(|(_, c)| *c == 1));
    }

    /// Corner cells only have in-bounds neighbours listed.
    #[test]
    fn open_neighbours_at_corner() {
        let grid = OccupancyGrid::new(3, 3, false);
        let points: Vec<Point> = grid
            .open_neighbours(&Point::new(0, 0))
            .iter()
            .map(|(p, _)| *p)
            .collect();
        assert_eq!(points, vec![Point::new(0, 1), Point::new(1, 0)]);
    }
}
