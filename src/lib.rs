//! # chase_pathfinding
//!
//! The pathfinding core of a grid chase game: a pursuer token repeatedly
//! plans a route to a moving target across a 2-D occupancy grid. Two
//! interchangeable strategies are provided behind the [PathSolver] trait:
//! plain breadth-first search and best-first search with a Manhattan-distance
//! heuristic, both optimal in edge count on the 4-connected unit-cost grid.
//! A [SolverRegistry] maps strategy names to constructors so the embedding
//! game can switch strategies at runtime without knowing their internals.
//!
//! The grid additionally tracks
//! [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory))
//! with a union-find structure, letting a driver check whether a randomly
//! generated obstacle layout is solvable without running a full search.

pub mod grid;
pub mod registry;
mod search;
pub mod solver;

pub use grid::OccupancyGrid;
pub use registry::{RegistryError, SolverRegistry};
pub use solver::best_first::BestFirstSolver;
pub use solver::bfs::BfsSolver;
pub use solver::PathSolver;
