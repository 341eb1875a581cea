use chase_pathfinding::{OccupancyGrid, PathSolver, SolverRegistry};
use grid_util::grid::Grid;
use grid_util::point::Point;

// In this example a path is found on a 3x3 grid with shape
//  ___
// |S  |
// | # |
// |  G|
//  ___
// where
// - # marks an obstacle
// - S marks the start
// - G marks the goal
//
// Cells have a 4-neighborhood; the solver is chosen by name through the
// registry, exactly as a game driver would do it.

fn main() {
    let mut grid = OccupancyGrid::new(3, 3, false);
    grid.set(1, 1, true);
    grid.generate_components();
    println!("{}", grid);
    let registry = SolverRegistry::with_defaults();
    let solver = registry.create("a_star").expect("a_star is registered");
    let start = Point::new(0, 0);
    let goal = Point::new(2, 2);
    let path = solver.find_path(&grid, start, goal);
    println!("Path:");
    for p in path {
        println!("{:?}", p);
    }
}
