//! Cheapest-insertion constructive heuristic.
//!
//! Starts from empty routes and repeatedly inserts the unvisited node whose
//! cheapest insertion, over every position of every route, adds the least
//! cost.
//!
//! # Complexity
//!
//! O(n³) for one vehicle: n insertions, each scanning n nodes × n positions.

use crate::distance::ArcCost;
use crate::routing::RoutingIndexManager;

/// Best traversable insertion of `node` into any route.
///
/// Returns `(route_index, position, cost_increase)`.
fn best_insertion<C: ArcCost>(
    costs: &C,
    manager: &RoutingIndexManager,
    routes: &[Vec<usize>],
    node: usize,
) -> Option<(usize, usize, f64)> {
    let mut best: Option<(usize, usize, f64)> = None;

    for (ri, route) in routes.iter().enumerate() {
        for pos in 0..=route.len() {
            let prev = if pos == 0 {
                manager.start(ri)
            } else {
                route[pos - 1]
            };
            let next = if pos == route.len() {
                manager.end(ri)
            } else {
                route[pos]
            };

            let delta = costs.cost(prev, node) + costs.cost(node, next) - costs.cost(prev, next);
            if !delta.is_finite() {
                continue;
            }
            if best.as_ref().map_or(true, |b| delta < b.2) {
                best = Some((ri, pos, delta));
            }
        }
    }

    best
}

/// Constructs one route per vehicle by cheapest insertion.
///
/// Ties go to the lowest node index, then the lowest route, then the earliest
/// position. Returns `None` if some node has no traversable insertion.
///
/// # Examples
///
/// ```
/// use route_optimizer::distance::DistanceMatrix;
/// use route_optimizer::routing::{RoutingIndexManager, RoutingModel};
/// use route_optimizer::constructive::cheapest_insertion;
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
/// let routes = cheapest_insertion(&model, &manager).unwrap();
/// assert_eq!(routes[0].len(), 2);
/// ```
pub fn cheapest_insertion<C: ArcCost>(
    costs: &C,
    manager: &RoutingIndexManager,
) -> Option<Vec<Vec<usize>>> {
    let mut routes: Vec<Vec<usize>> = vec![Vec::new(); manager.num_vehicles()];
    let mut unvisited: Vec<usize> = (0..manager.num_customers()).collect();

    while !unvisited.is_empty() {
        let mut best: Option<(usize, usize, usize, f64)> = None;

        for (ui, &node) in unvisited.iter().enumerate() {
            if let Some((ri, pos, delta)) = best_insertion(costs, manager, &routes, node) {
                if best.as_ref().map_or(true, |b| delta < b.3) {
                    best = Some((ui, ri, pos, delta));
                }
            }
        }

        let (ui, ri, pos, _) = best?;
        let node = unvisited.remove(ui);
        routes[ri].insert(pos, node);
    }

    Some(routes)
}
