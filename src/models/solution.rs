//! Solved route plan in node space.

use std::collections::BTreeSet;

/// One closed node sequence per vehicle and the plan's total cost.
///
/// Every route starts and ends at the depot node. An unused vehicle has the
/// route `[depot, depot]`.
///
/// # Examples
///
/// ```
/// use route_optimizer::models::RoutePlan;
///
/// let plan = RoutePlan::new(vec![vec![0, 1, 2, 0]], 6.0);
/// assert_eq!(plan.num_routes(), 1);
/// assert_eq!(plan.num_visited(), 3);
/// assert_eq!(plan.total_cost(), 6.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RoutePlan {
    routes: Vec<Vec<usize>>,
    total_cost: f64,
}

impl RoutePlan {
    /// Creates a plan.
    pub fn new(routes: Vec<Vec<usize>>, total_cost: f64) -> Self {
        Self { routes, total_cost }
    }

    /// Routes, indexed by vehicle.
    pub fn routes(&self) -> &[Vec<usize>] {
        &self.routes
    }

    /// Number of routes (vehicles).
    pub fn num_routes(&self) -> usize {
        self.routes.len()
    }

    /// Total cost across all routes.
    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    /// Number of distinct nodes visited, depot included.
    pub fn num_visited(&self) -> usize {
        self.routes
            .iter()
            .flatten()
            .copied()
            .collect::<BTreeSet<_>>()
            .len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multi_route_visited() {
        let plan = RoutePlan::new(vec![vec![0, 2, 0], vec![0, 1, 3, 0], vec![0, 0]], 10.0);
        assert_eq!(plan.num_routes(), 3);
        assert_eq!(plan.num_visited(), 4);
    }
}
