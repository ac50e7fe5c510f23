//! Depth-first path search with cheapest-arc ordering.
//!
//! Extends a single path from vehicle 0's start like
//! [`path_cheapest_arc`](super::path_cheapest_arc), but when the path reaches a
//! dead end (no traversable arc onward, or the last node cannot reach the
//! end) it undoes the latest choice and tries the next-cheapest arc instead.
//! Other vehicles stay empty.
//!
//! # Complexity
//!
//! Exponential in the worst case. The search stops after `limit` node
//! expansions, each costing O(n log n).

use log::debug;

use crate::distance::ArcCost;
use crate::routing::RoutingIndexManager;

/// Node expansions [`RoutingModel`](crate::routing::RoutingModel) allows the
/// path search before it gives up.
pub const PATH_SEARCH_LIMIT: usize = 100_000;

/// Finds one route through every node by backtracking over cheapest arcs.
///
/// Returns `None` when no traversable route exists or the search used up
/// `limit` expansions first. Results are deterministic: candidates are tried
/// by cost, then by lowest index.
///
/// # Examples
///
/// ```
/// use route_optimizer::distance::DistanceMatrix;
/// use route_optimizer::routing::{RoutingIndexManager, RoutingModel};
/// use route_optimizer::constructive::{path_cheapest_arc, path_search};
///
/// // A-B=1, B-C=1, C-D=1, A-C=5, B-D=5; A-D forbidden.
/// let inf = f64::INFINITY;
/// let dm = DistanceMatrix::from_data(4, vec![
///     0.0, 1.0, 5.0, inf,
///     1.0, 0.0, 1.0, 5.0,
///     5.0, 1.0, 0.0, 1.0,
///     inf, 5.0, 1.0, 0.0,
/// ]).unwrap();
/// let manager = RoutingIndexManager::new(4, 1, 0);
/// let mut model = RoutingModel::new(&manager);
/// let cb = model.register_transit_callback(|from, to| {
///     dm.get(manager.index_to_node(from), manager.index_to_node(to))
/// });
/// model.set_arc_cost_evaluator_of_all_vehicles(cb);
///
/// // Greedy A→B→C→D is stuck: D cannot return to A.
/// assert!(path_cheapest_arc(&model, &manager).is_none());
///
/// let routes = path_search(&model, &manager, 1_000).unwrap();
/// let nodes: Vec<usize> = routes[0].iter().map(|&i| manager.index_to_node(i)).collect();
/// assert_eq!(nodes, vec![1, 3, 2]);
/// ```
pub fn path_search<C: ArcCost>(
    costs: &C,
    manager: &RoutingIndexManager,
    limit: usize,
) -> Option<Vec<Vec<usize>>> {
    let n = manager.num_customers();
    let mut search = Search {
        costs,
        end: manager.end(0),
        visited: vec![false; n],
        path: Vec::with_capacity(n),
        expansions: 0,
        limit,
    };

    if !search.extend(manager.start(0)) {
        debug!(
            "path search found no route after {} expansion(s)",
            search.expansions
        );
        return None;
    }
    debug!("path search found a route after {} expansion(s)", search.expansions);

    let mut routes = vec![Vec::new(); manager.num_vehicles()];
    routes[0] = search.path;
    Some(routes)
}

struct Search<'c, C> {
    costs: &'c C,
    end: usize,
    visited: Vec<bool>,
    path: Vec<usize>,
    expansions: usize,
    limit: usize,
}

impl<C: ArcCost> Search<'_, C> {
    /// Extends the path from `current`; on `false` the path is unchanged.
    fn extend(&mut self, current: usize) -> bool {
        if self.path.len() == self.visited.len() {
            return self.costs.cost(current, self.end).is_finite();
        }
        if self.expansions >= self.limit {
            return false;
        }
        self.expansions += 1;

        let mut candidates: Vec<(usize, f64)> = self
            .visited
            .iter()
            .enumerate()
            .filter(|(_, &v)| !v)
            .map(|(i, _)| (i, self.costs.cost(current, i)))
            .filter(|(_, d)| d.is_finite())
            .collect();
        candidates.sort_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)));

        for (next, _) in candidates {
            self.visited[next] = true;
            self.path.push(next);
            if self.extend(next) {
                return true;
            }
            self.path.pop();
            self.visited[next] = false;
            if self.expansions >= self.limit {
                return false;
            }
        }
        false
    }
}
