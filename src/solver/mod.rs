//! TSP solvers behind one capability trait.
//!
//! - [`RoutingSolver`] — Routing model with a first-solution heuristic and local search
//! - [`HeldKarpSolver`] — Exact dynamic programming for small single-vehicle instances

mod exact;
mod routing;

pub use exact::{HeldKarpSolver, MAX_EXACT_NODES};
pub use routing::RoutingSolver;

use serde::{Deserialize, Serialize};

use crate::config::RoutingConfig;
use crate::error::Result;
use crate::models::{RoutePlan, TspProblem};

/// Result of a solve: a route plan, or a definite "no feasible tour".
#[derive(Debug, Clone, PartialEq)]
pub enum SolveOutcome {
    /// Every node is on a closed route.
    Solved(RoutePlan),
    /// No feasible plan was found.
    Infeasible,
}

impl SolveOutcome {
    /// Returns `true` for [`SolveOutcome::Solved`].
    pub fn is_solved(&self) -> bool {
        matches!(self, Self::Solved(_))
    }
}

/// Given a cost matrix, return a tour or a failure.
///
/// Implementations must be deterministic for identical problems.
pub trait TspSolver {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Solves `problem`.
    ///
    /// Errors are reserved for problems this solver cannot handle at all;
    /// an unreachable node is [`SolveOutcome::Infeasible`].
    fn solve(&self, problem: &TspProblem) -> Result<SolveOutcome>;
}

/// Which [`TspSolver`] to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SolverKind {
    /// [`RoutingSolver`].
    #[default]
    Routing,
    /// [`HeldKarpSolver`].
    Exact,
}

/// Builds the solver selected by `config`.
pub fn solver_for(config: &RoutingConfig) -> Box<dyn TspSolver> {
    match config.solver {
        SolverKind::Routing => Box::new(RoutingSolver::new(config.search_parameters())),
        SolverKind::Exact => Box::new(HeldKarpSolver),
    }
}
