//! Heuristic solver on top of the routing model.

use log::debug;

use super::{SolveOutcome, TspSolver};
use crate::error::Result;
use crate::models::{RoutePlan, TspProblem};
use crate::routing::{extract_route, RoutingIndexManager, RoutingModel, SearchParameters};

/// Solves through [`RoutingModel`] with the given search parameters.
///
/// The matrix is registered as the transit callback for all vehicles, with
/// every vehicle starting and ending at the problem's depot.
///
/// # Examples
///
/// ```
/// use route_optimizer::distance::DistanceMatrix;
/// use route_optimizer::models::TspProblem;
/// use route_optimizer::routing::SearchParameters;
/// use route_optimizer::solver::{RoutingSolver, SolveOutcome, TspSolver};
///
/// let dm = DistanceMatrix::from_data(3, vec![
///     0.0, 1.0, 3.0,
///     1.0, 0.0, 2.0,
///     3.0, 2.0, 0.0,
/// ]).unwrap();
/// let problem = TspProblem::new(dm, 1, 0).unwrap();
/// let solver = RoutingSolver::new(SearchParameters::default());
/// let SolveOutcome::Solved(plan) = solver.solve(&problem).unwrap() else {
///     panic!("triangle is feasible");
/// };
/// assert_eq!(plan.routes()[0], vec![0, 1, 2, 0]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RoutingSolver {
    params: SearchParameters,
}

impl RoutingSolver {
    /// Creates a solver using `params`.
    pub fn new(params: SearchParameters) -> Self {
        Self { params }
    }
}

impl TspSolver for RoutingSolver {
    fn name(&self) -> &'static str {
        "routing"
    }

    fn solve(&self, problem: &TspProblem) -> Result<SolveOutcome> {
        let manager =
            RoutingIndexManager::new(problem.num_nodes(), problem.vehicles(), problem.depot());
        let matrix = problem.matrix();

        let mut model = RoutingModel::new(&manager);
        let transit = model.register_transit_callback(|from, to| {
            matrix.get(manager.index_to_node(from), manager.index_to_node(to))
        });
        model.set_arc_cost_evaluator_of_all_vehicles(transit);

        let Some(solution) = model.solve_with_parameters(&self.params) else {
            debug!("routing model status: {:?}", model.status());
            return Ok(SolveOutcome::Infeasible);
        };

        let routes = (0..manager.num_vehicles())
            .map(|v| extract_route(&model, &solution, v))
            .collect();
        Ok(SolveOutcome::Solved(RoutePlan::new(
            routes,
            solution.objective(),
        )))
    }
}
