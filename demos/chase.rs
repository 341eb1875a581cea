use chase_pathfinding::{OccupancyGrid, PathSolver, SolverRegistry};
use grid_util::grid::Grid;
use grid_util::point::Point;

// A miniature round of the chase game on the terminal: the mouse walks a
// scripted route towards the exit while the cat re-plans a route to the
// mouse every tick and advances one step along it. This mirrors the driver
// contract of the embedding game: plan on a cadence, move one step, repeat.

fn draw(grid: &OccupancyGrid, cat: Point, mouse: Point) {
    for y in 0..grid.height() as i32 {
        for x in 0..grid.width() as i32 {
            let p = Point::new(x, y);
            if p == cat {
                print!("C");
            } else if p == mouse {
                print!("M");
            } else if grid.is_blocked(p) {
                print!("#");
            } else {
                print!(".");
            }
        }
        println!();
    }
    println!();
}

fn main() {
    let mut grid = OccupancyGrid::new(7, 5, false);
    for (x, y) in [(2, 1), (2, 2), (2, 3), (4, 0), (4, 1), (4, 3)] {
        grid.set(x, y, true);
    }
    grid.generate_components();

    let registry = SolverRegistry::with_defaults();
    let solver = registry.create("a_star").expect("a_star is registered");

    let mut cat = Point::new(0, 4);
    let mut mouse = Point::new(0, 0);
    let exit = Point::new(6, 4);
    let mouse_route = [(1, 0), (1, 1), (1, 2), (1, 0), (1, 0), (1, 0), (0, 1), (0, 1)];

    for (tick, (dx, dy)) in mouse_route.into_iter().enumerate() {
        println!("tick {tick}:");
        draw(&grid, cat, mouse);
        // Re-plan against the mouse's current cell and take a single step.
        let path = solver.find_path(&grid, cat, mouse);
        if path.len() > 1 {
            cat = path[1];
        }
        if cat == mouse {
            println!("The cat caught the mouse at {:?}.", cat);
            return;
        }
        let next = Point::new(mouse.x + dx, mouse.y + dy);
        if grid.can_move_to(next) {
            mouse = next;
        }
        if mouse == exit {
            println!("The mouse reached the exit at {:?}.", exit);
            return;
        }
    }
    println!("Time ran out with the cat at {:?} and the mouse at {:?}.", cat, mouse);
}
