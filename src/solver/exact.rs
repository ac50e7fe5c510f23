//! Exact Held-Karp dynamic programming.
//!
//! # Algorithm
//!
//! `best[S][j]` is the cheapest path that leaves the depot, visits exactly the
//! node set `S`, and ends at `j ∈ S`:
//!
//! ```text
//! best[{j}][j] = c(depot, j)
//! best[S][j]   = min over k ∈ S \ {j} of best[S \ {j}][k] + c(k, j)
//! tour         = min over j of best[all][j] + c(j, depot)
//! ```
//!
//! # Complexity
//!
//! O(2ⁿ · n²) time, O(2ⁿ · n) memory.
//!
//! # Reference
//!
//! Held, M. & Karp, R.M. (1962). "A Dynamic Programming Approach to
//! Sequencing Problems", *Journal of SIAM* 10(1), 196-210.

use log::debug;

use super::{SolveOutcome, TspSolver};
use crate::error::{Error, Result};
use crate::models::{RoutePlan, TspProblem};

/// Largest node count (depot included) the exact solver accepts.
pub const MAX_EXACT_NODES: usize = 16;

const NO_PARENT: usize = usize::MAX;

/// Exact single-vehicle TSP solver.
///
/// Among equal-cost candidates the first in node order wins, so results are
/// reproducible.
///
/// # Examples
///
/// ```
/// use route_optimizer::distance::DistanceMatrix;
/// use route_optimizer::models::TspProblem;
/// use route_optimizer::solver::{HeldKarpSolver, SolveOutcome, TspSolver};
///
/// let dm = DistanceMatrix::from_data(4, vec![
///     0.0, 2.0, 9.0, 10.0,
///     2.0, 0.0, 6.0, 4.0,
///     9.0, 6.0, 0.0, 3.0,
///     10.0, 4.0, 3.0, 0.0,
/// ]).unwrap();
/// let problem = TspProblem::new(dm, 1, 0).unwrap();
/// let SolveOutcome::Solved(plan) = HeldKarpSolver.solve(&problem).unwrap() else {
///     panic!("complete graph is feasible");
/// };
/// assert_eq!(plan.total_cost(), 18.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct HeldKarpSolver;

impl TspSolver for HeldKarpSolver {
    fn name(&self) -> &'static str {
        "exact"
    }

    fn solve(&self, problem: &TspProblem) -> Result<SolveOutcome> {
        if problem.vehicles() != 1 {
            return Err(Error::UnsupportedProblem(format!(
                "exact solver handles one vehicle, got {}",
                problem.vehicles()
            )));
        }
        if problem.num_nodes() > MAX_EXACT_NODES {
            return Err(Error::UnsupportedProblem(format!(
                "exact solver handles at most {MAX_EXACT_NODES} cities, got {}",
                problem.num_nodes()
            )));
        }

        let depot = problem.depot();
        let dm = problem.matrix();
        let nodes: Vec<usize> = (0..problem.num_nodes()).filter(|&n| n != depot).collect();
        let m = nodes.len();
        if m == 0 {
            return Ok(SolveOutcome::Solved(RoutePlan::new(
                vec![vec![depot, depot]],
                0.0,
            )));
        }

        let full = (1usize << m) - 1;
        let mut best = vec![f64::INFINITY; (full + 1) * m];
        let mut parent = vec![NO_PARENT; (full + 1) * m];
        let cell = |set: usize, j: usize| set * m + j;

        for j in 0..m {
            best[cell(1 << j, j)] = dm.get(depot, nodes[j]);
        }

        for set in 1..=full {
            for j in 0..m {
                if set & (1 << j) == 0 || set == 1 << j {
                    continue;
                }
                let rest = set & !(1 << j);
                let mut value = f64::INFINITY;
                let mut from = NO_PARENT;
                for k in 0..m {
                    if rest & (1 << k) == 0 {
                        continue;
                    }
                    let candidate = best[cell(rest, k)] + dm.get(nodes[k], nodes[j]);
                    if candidate < value {
                        value = candidate;
                        from = k;
                    }
                }
                best[cell(set, j)] = value;
                parent[cell(set, j)] = from;
            }
        }

        let mut total = f64::INFINITY;
        let mut last = NO_PARENT;
        for j in 0..m {
            let candidate = best[cell(full, j)] + dm.get(nodes[j], depot);
            if candidate < total {
                total = candidate;
                last = j;
            }
        }
        if !total.is_finite() {
            debug!("no finite Hamiltonian cycle through {} nodes", m + 1);
            return Ok(SolveOutcome::Infeasible);
        }

        let mut reversed = Vec::with_capacity(m);
        let mut set = full;
        let mut j = last;
        while j != NO_PARENT {
            reversed.push(nodes[j]);
            let prev = parent[cell(set, j)];
            set &= !(1 << j);
            j = prev;
        }

        let mut route = Vec::with_capacity(m + 2);
        route.push(depot);
        route.extend(reversed.into_iter().rev());
        route.push(depot);
        Ok(SolveOutcome::Solved(RoutePlan::new(vec![route], total)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::DistanceMatrix;

    fn problem(n: usize, data: Vec<f64>, depot: usize) -> TspProblem {
        TspProblem::new(DistanceMatrix::from_data(n, data).expect("n×n"), 1, depot)
            .expect("valid")
    }

    fn solve(p: &TspProblem) -> RoutePlan {
        match HeldKarpSolver.solve(p).expect("supported") {
            SolveOutcome::Solved(plan) => plan,
            SolveOutcome::Infeasible => panic!("expected a tour"),
        }
    }

    #[test]
    fn test_single_city() {
        let plan = solve(&problem(1, vec![0.0], 0));
        assert_eq!(plan.routes()[0], vec![0, 0]);
        assert_eq!(plan.total_cost(), 0.0);
    }

    #[test]
    fn test_non_zero_depot() {
        let p = problem(3, vec![0.0, 1.0, 3.0, 1.0, 0.0, 2.0, 3.0, 2.0, 0.0], 2);
        let plan = solve(&p);
        let route = &plan.routes()[0];
        assert_eq!(route.first(), Some(&2));
        assert_eq!(route.last(), Some(&2));
        assert_eq!(plan.total_cost(), 6.0);
    }

    #[test]
    fn test_avoids_forbidden_arcs() {
        let inf = f64::INFINITY;
        // Square 0-1-2-3-0 with both diagonals forbidden: only the perimeter works.
        let p = problem(
            4,
            vec![
                0.0, 1.0, inf, 1.0, //
                1.0, 0.0, 1.0, inf, //
                inf, 1.0, 0.0, 1.0, //
                1.0, inf, 1.0, 0.0,
            ],
            0,
        );
        let plan = solve(&p);
        assert_eq!(plan.total_cost(), 4.0);
        let route = &plan.routes()[0];
        assert!(
            route == &vec![0, 1, 2, 3, 0] || route == &vec![0, 3, 2, 1, 0],
            "got {route:?}"
        );
    }

    #[test]
    fn test_disconnected_is_infeasible() {
        let inf = f64::INFINITY;
        let p = problem(3, vec![0.0, 1.0, inf, 1.0, 0.0, inf, inf, inf, 0.0], 0);
        assert_eq!(
            HeldKarpSolver.solve(&p).expect("supported"),
            SolveOutcome::Infeasible
        );
    }

    #[test]
    fn test_rejects_multiple_vehicles() {
        let dm = DistanceMatrix::from_data(2, vec![0.0, 1.0, 1.0, 0.0]).expect("2x2");
        let p = TspProblem::new(dm, 2, 0).expect("valid");
        assert!(matches!(
            HeldKarpSolver.solve(&p),
            Err(Error::UnsupportedProblem(_))
        ));
    }

    #[test]
    fn test_rejects_large_instances() {
        let n = MAX_EXACT_NODES + 1;
        let p = problem(n, vec![1.0; n * n], 0);
        assert!(matches!(
            HeldKarpSolver.solve(&p),
            Err(Error::UnsupportedProblem(_))
        ));
    }
}
