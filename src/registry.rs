//! Name-based strategy selection: the driver registers constructors at
//! startup and instantiates the active strategy by name, e.g. from a
//! selection dialog, without hard-coding the choice at call sites.

use indexmap::IndexMap;
use thiserror::Error;

use crate::solver::best_first::BestFirstSolver;
use crate::solver::bfs::BfsSolver;
use crate::solver::PathSolver;

/// A zero-argument constructor producing a fresh, stateless solver instance.
pub type SolverConstructor = fn() -> Box<dyn PathSolver>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("no solver registered under name '{0}'")]
    UnknownSolver(String),
}

/// Maps strategy names to constructors. Registration order is preserved so
/// [names](Self::names) can back a selection menu; registering a name twice
/// silently replaces the earlier constructor (last registration wins).
///
/// The registry is a plain value with no global state: construct one at
/// startup and pass it to whatever needs to create solvers.
#[derive(Default)]
pub struct SolverRegistry {
    constructors: IndexMap<String, SolverConstructor>,
}

impl SolverRegistry {
    /// An empty registry.
    pub fn new() -> SolverRegistry {
        SolverRegistry {
            constructors: IndexMap::new(),
        }
    }

    /// A registry pre-populated with the built-in strategies: `"a_star"`
    /// (best-first with the Manhattan heuristic) and `"bfs"`.
    pub fn with_defaults() -> SolverRegistry {
        let mut registry = SolverRegistry::new();
        registry.register("a_star", || Box::new(BestFirstSolver::new()));
        registry.register("bfs", || Box::new(BfsSolver::new()));
        registry
    }

    /// Associates `name` with a constructor, replacing any earlier
    /// registration under the same name.
    pub fn register(&mut self, name: &str, constructor: SolverConstructor) {
        self.constructors.insert(name.to_owned(), constructor);
    }

    /// Instantiates the solver registered under `name`. There is no fallback
    /// to a default; an unknown name is the caller's mistake to handle.
    pub fn create(&self, name: &str) -> Result<Box<dyn PathSolver>, RegistryError> {
        self.constructors
            .get(name)
            .map(|constructor| constructor())
            .ok_or_else(|| RegistryError::UnknownSolver(name.to_owned()))
    }

    /// The registered names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.constructors.keys().map(String::as_str)
    }
}
