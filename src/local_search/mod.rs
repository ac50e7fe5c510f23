//! Local search operators for improving routes.
//!
//! All operators work on one route at a time through
//! [`ArcCost`], so they run in node space or routing-index space alike.
//!
//! - [`two_opt_improve`] — Intra-route 2-opt segment reversal
//! - [`or_opt_improve`] — Intra-route segment relocation
//! - [`greedy_descent`] — Alternates both until neither improves

mod or_opt;
mod two_opt;

pub use or_opt::or_opt_improve;
pub use two_opt::two_opt_improve;

use crate::distance::ArcCost;

/// Computes the total cost: `start → route[0] → … → route[n-1] → end`.
///
/// An empty route costs `start → end`.
pub fn route_cost<C: ArcCost>(route: &[usize], start: usize, end: usize, costs: &C) -> f64 {
    let (Some(&first), Some(&last)) = (route.first(), route.last()) else {
        return costs.cost(start, end);
    };
    let mut cost = costs.cost(start, first);
    for w in route.windows(2) {
        cost += costs.cost(w[0], w[1]);
    }
    cost + costs.cost(last, end)
}

/// Alternates 2-opt and Or-opt until a full round gains nothing.
///
/// Returns the improved sequence and its cost, never worse than the input.
///
/// # Examples
///
/// ```
/// use route_optimizer::distance::DistanceMatrix;
/// use route_optimizer::local_search::greedy_descent;
///
/// let mut dm = DistanceMatrix::new(5);
/// for i in 0..5 {
///     for j in 0..5 {
///         dm.set(i, j, (i as f64 - j as f64).abs());
///     }
/// }
/// let (route, cost) = greedy_descent(&[3, 1, 4, 2], 0, 0, &dm);
/// assert!((cost - 8.0).abs() < 1e-10);
/// assert_eq!(route.len(), 4);
/// ```
pub fn greedy_descent<C: ArcCost>(
    route: &[usize],
    start: usize,
    end: usize,
    costs: &C,
) -> (Vec<usize>, f64) {
    let mut current = route.to_vec();
    let mut cost = route_cost(&current, start, end, costs);

    loop {
        let (after_two_opt, _) = two_opt_improve(&current, start, end, costs);
        let (after_or_opt, new_cost) = or_opt_improve(&after_two_opt, start, end, costs);
        current = after_or_opt;
        let gained = cost - new_cost > 1e-10;
        cost = new_cost;
        if !gained {
            break;
        }
    }

    (current, cost)
}
