//! Routing model: transit callbacks, arc costs, and the solve call.

use log::{debug, info};

use super::{Assignment, FirstSolutionStrategy, LocalSearch, RoutingIndexManager, SearchParameters};
use crate::constructive::{
    cheapest_insertion, path_cheapest_arc, path_search, PATH_SEARCH_LIMIT,
};
use crate::distance::ArcCost;
use crate::local_search::{greedy_descent, route_cost};

/// Outcome of the last solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoutingStatus {
    /// No solve has run yet.
    #[default]
    NotSolved,
    /// A feasible assignment was found.
    Success,
    /// No first solution placed every node.
    Fail,
}

type TransitCallback<'a> = Box<dyn Fn(usize, usize) -> f64 + 'a>;

/// A vehicle routing model over the indices of a [`RoutingIndexManager`].
///
/// Arc costs come from a registered transit callback taking two routing
/// indices. A non-finite cost marks an arc the solver must not use. Until an
/// arc cost evaluator is set, every arc costs zero.
///
/// # Examples
///
/// ```
/// use route_optimizer::distance::DistanceMatrix;
/// use route_optimizer::routing::{
///     extract_route, RoutingIndexManager, RoutingModel, RoutingStatus, SearchParameters,
/// };
///
/// let dm = DistanceMatrix::from_data(3, vec![
///     0.0, 1.0, 3.0,
///     1.0, 0.0, 2.0,
///     3.0, 2.0, 0.0,
/// ]).unwrap();
/// let manager = RoutingIndexManager::new(3, 1, 0);
/// let mut model = RoutingModel::new(&manager);
/// let cb = model.register_transit_callback(|from, to| {
///     dm.get(manager.index_to_node(from), manager.index_to_node(to))
/// });
/// model.set_arc_cost_evaluator_of_all_vehicles(cb);
///
/// let solution = model.solve_with_parameters(&SearchParameters::default()).unwrap();
/// assert_eq!(model.status(), RoutingStatus::Success);
/// assert_eq!(solution.objective(), 6.0);
/// assert_eq!(extract_route(&model, &solution, 0), vec![0, 1, 2, 0]);
/// ```
pub struct RoutingModel<'a> {
    manager: &'a RoutingIndexManager,
    callbacks: Vec<TransitCallback<'a>>,
    arc_cost_evaluator: Option<usize>,
    status: RoutingStatus,
}

impl<'a> RoutingModel<'a> {
    /// Creates a model over `manager`'s indices.
    pub fn new(manager: &'a RoutingIndexManager) -> Self {
        Self {
            manager,
            callbacks: Vec::new(),
            arc_cost_evaluator: None,
            status: RoutingStatus::NotSolved,
        }
    }

    /// Registers a transit callback and returns its id.
    pub fn register_transit_callback<F>(&mut self, callback: F) -> usize
    where
        F: Fn(usize, usize) -> f64 + 'a,
    {
        self.callbacks.push(Box::new(callback));
        self.callbacks.len() - 1
    }

    /// Uses callback `id` as the arc cost of every vehicle.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not returned by [`register_transit_callback`](Self::register_transit_callback).
    pub fn set_arc_cost_evaluator_of_all_vehicles(&mut self, id: usize) {
        assert!(id < self.callbacks.len(), "unknown transit callback {id}");
        self.arc_cost_evaluator = Some(id);
    }

    /// Cost of the arc between two routing indices.
    pub fn arc_cost(&self, from: usize, to: usize) -> f64 {
        match self.arc_cost_evaluator {
            Some(id) => (self.callbacks[id])(from, to),
            None => 0.0,
        }
    }

    /// The index manager this model was built on.
    pub fn manager(&self) -> &RoutingIndexManager {
        self.manager
    }

    /// Start index of `vehicle`.
    pub fn start(&self, vehicle: usize) -> usize {
        self.manager.start(vehicle)
    }

    /// End index of `vehicle`.
    pub fn end(&self, vehicle: usize) -> usize {
        self.manager.end(vehicle)
    }

    /// Returns `true` if `index` is some vehicle's end.
    pub fn is_end(&self, index: usize) -> bool {
        self.manager.is_end(index)
    }

    /// Successor of `index` in `assignment`, `None` for end indices.
    pub fn next(&self, assignment: &Assignment, index: usize) -> Option<usize> {
        assignment.next(index)
    }

    /// Outcome of the last solve.
    pub fn status(&self) -> RoutingStatus {
        self.status
    }

    /// Builds a first solution, then improves each route.
    ///
    /// If the chosen strategy gets stuck, the other greedy strategy runs, and
    /// then a backtracking [`path_search`] bounded by [`PATH_SEARCH_LIMIT`]
    /// expansions. Returns `None` and sets [`RoutingStatus::Fail`] only when
    /// all of them fail to place every node on a traversable route.
    pub fn solve_with_parameters(&mut self, params: &SearchParameters) -> Option<Assignment> {
        info!(
            "solving {} node(s) with {} vehicle(s): {:?}, {:?}",
            self.manager.num_nodes(),
            self.manager.num_vehicles(),
            params.first_solution_strategy,
            params.local_search
        );

        let strategy = params.first_solution_strategy;
        let first = self
            .first_solution(strategy)
            .or_else(|| {
                let fallback = strategy.fallback();
                info!("{strategy:?} found no feasible routes; trying {fallback:?}");
                self.first_solution(fallback)
            })
            .or_else(|| {
                info!("greedy strategies found no feasible routes; trying path search");
                path_search(&*self, self.manager, PATH_SEARCH_LIMIT)
            });
        let Some(mut routes) = first else {
            info!("no first solution places every node");
            self.status = RoutingStatus::Fail;
            return None;
        };

        let mut objective = 0.0;
        for (vehicle, route) in routes.iter_mut().enumerate() {
            let (start, end) = (self.start(vehicle), self.end(vehicle));
            let before = route_cost(route.as_slice(), start, end, &*self);
            let cost = match params.local_search {
                LocalSearch::None => before,
                LocalSearch::GreedyDescent => {
                    let (improved, cost) = greedy_descent(route.as_slice(), start, end, &*self);
                    *route = improved;
                    cost
                }
            };
            debug!(
                "vehicle {vehicle}: {} visit(s), cost {before} -> {cost}",
                route.len()
            );
            objective += cost;
        }

        info!("solution found with objective {objective}");
        self.status = RoutingStatus::Success;
        Some(Assignment::from_routes(self.manager, &routes, objective))
    }
}

impl RoutingModel<'_> {
    fn first_solution(&self, strategy: FirstSolutionStrategy) -> Option<Vec<Vec<usize>>> {
        match strategy {
            FirstSolutionStrategy::PathCheapestArc => path_cheapest_arc(self, self.manager),
            FirstSolutionStrategy::CheapestInsertion => cheapest_insertion(self, self.manager),
        }
    }
}

impl ArcCost for RoutingModel<'_> {
    fn cost(&self, from: usize, to: usize) -> f64 {
        self.arc_cost(from, to)
    }
}
