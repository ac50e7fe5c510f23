//! Solved successor assignment.

use super::RoutingIndexManager;

/// Successor of every non-end routing index, plus the objective value.
///
/// Produced by [`RoutingModel::solve_with_parameters`](super::RoutingModel::solve_with_parameters).
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    next: Vec<Option<usize>>,
    objective: f64,
}

impl Assignment {
    /// Links each route `start(k) → routes[k]… → end(k)`.
    pub(crate) fn from_routes(
        manager: &RoutingIndexManager,
        routes: &[Vec<usize>],
        objective: f64,
    ) -> Self {
        let mut next = vec![None; manager.num_indices()];
        for (vehicle, route) in routes.iter().enumerate() {
            let mut prev = manager.start(vehicle);
            for &index in route {
                next[prev] = Some(index);
                prev = index;
            }
            next[prev] = Some(manager.end(vehicle));
        }
        Self { next, objective }
    }

    /// Successor of `index`, or `None` for end indices.
    pub fn next(&self, index: usize) -> Option<usize> {
        self.next.get(index).copied().flatten()
    }

    /// Sum of arc costs over all routes.
    pub fn objective(&self) -> f64 {
        self.objective
    }
}
