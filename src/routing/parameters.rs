//! Search parameters for the routing model.

use serde::{Deserialize, Serialize};

/// Heuristic used to build the first feasible solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum FirstSolutionStrategy {
    /// From each route's start, repeatedly follow the cheapest arc to an
    /// unvisited node.
    #[default]
    PathCheapestArc,
    /// Repeatedly insert the node whose cheapest insertion over all routes is
    /// smallest.
    CheapestInsertion,
}

impl FirstSolutionStrategy {
    /// The other greedy rule, tried when this one gets stuck.
    pub fn fallback(self) -> Self {
        match self {
            Self::PathCheapestArc => Self::CheapestInsertion,
            Self::CheapestInsertion => Self::PathCheapestArc,
        }
    }
}

/// Improvement stage applied after the first solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum LocalSearch {
    /// Keep the first solution as is.
    None,
    /// Alternate 2-opt and Or-opt on every route until neither improves.
    #[default]
    GreedyDescent,
}

/// Parameters for [`RoutingModel::solve_with_parameters`](super::RoutingModel::solve_with_parameters).
///
/// # Examples
///
/// ```
/// use route_optimizer::routing::{FirstSolutionStrategy, LocalSearch, SearchParameters};
///
/// let params = SearchParameters::default();
/// assert_eq!(params.first_solution_strategy, FirstSolutionStrategy::PathCheapestArc);
/// assert_eq!(params.local_search, LocalSearch::GreedyDescent);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchParameters {
    /// First-solution heuristic.
    pub first_solution_strategy: FirstSolutionStrategy,
    /// Local search stage.
    pub local_search: LocalSearch,
}
