//! Path-cheapest-arc constructive heuristic.
//!
//! Builds each vehicle's path greedily: starting from the vehicle's start
//! index, always follow the cheapest traversable arc to an unvisited node.
//! The first vehicle therefore absorbs every reachable node; later vehicles
//! only pick up what earlier paths could not close over.
//!
//! # Complexity
//!
//! O(n²) where n = number of non-depot nodes.

use log::debug;

use crate::distance::ArcCost;
use crate::routing::RoutingIndexManager;

/// Constructs one path per vehicle with the path-cheapest-arc rule.
///
/// Ties go to the lowest index. When a path's last node has no traversable
/// arc to the vehicle's end, nodes are dropped from the tail until it does;
/// dropped nodes stay available to later vehicles.
///
/// Returns the non-depot indices of each route in visiting order, or `None`
/// if some node ends up on no route.
///
/// # Examples
///
/// ```
/// use route_optimizer::distance::DistanceMatrix;
/// use route_optimizer::routing::{RoutingIndexManager, RoutingModel};
/// use route_optimizer::constructive::path_cheapest_arc;
///
/// // A-B=1, B-C=2, A-C=3 with A as depot.
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
/// let routes = path_cheapest_arc(&model, &manager).unwrap();
/// let nodes: Vec<usize> = routes[0].iter().map(|&i| manager.index_to_node(i)).collect();
/// assert_eq!(nodes, vec![1, 2]);
/// ```
pub fn path_cheapest_arc<C: ArcCost>(
    costs: &C,
    manager: &RoutingIndexManager,
) -> Option<Vec<Vec<usize>>> {
    let n = manager.num_customers();
    let mut visited = vec![false; n];
    let mut routes = Vec::with_capacity(manager.num_vehicles());

    for vehicle in 0..manager.num_vehicles() {
        let end = manager.end(vehicle);
        let mut current = manager.start(vehicle);
        let mut route = Vec::new();

        loop {
            let mut best: Option<(usize, f64)> = None;
            for (i, _) in visited.iter().enumerate().filter(|(_, &v)| !v) {
                let d = costs.cost(current, i);
                if !d.is_finite() {
                    continue;
                }
                if best.map_or(true, |(_, b)| d < b) {
                    best = Some((i, d));
                }
            }

            match best {
                Some((next, _)) => {
                    visited[next] = true;
                    route.push(next);
                    current = next;
                }
                None => break,
            }
        }

        while let Some(&last) = route.last() {
            if costs.cost(last, end).is_finite() {
                break;
            }
            debug!("vehicle {vehicle}: index {last} cannot reach the end, dropping it");
            route.pop();
            visited[last] = false;
        }

        routes.push(route);

        if visited.iter().all(|&v| v) {
            break;
        }
    }

    if visited.iter().any(|&v| !v) {
        return None;
    }
    routes.resize_with(manager.num_vehicles(), Vec::new);
    Some(routes)
}
