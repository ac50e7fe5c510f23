//! Intra-route Or-opt improvement.
//!
//! # Algorithm
//!
//! Tries moving segments of 1, 2, or 3 consecutive visits to a different
//! position within the same route. Accepts moves that reduce total cost.
//!
//! For each segment size k ∈ {1, 2, 3} and each starting position, computes
//! the cost change from removing the segment and reinserting it at every
//! other position.
//!
//! # Complexity
//!
//! O(n²) per pass, O(n³) worst case for convergence.
//!
//! # Reference
//!
//! Or, I. (1976). "Traveling Salesman-Type Combinatorial Problems and Their
//! Relation to the Logistics of Blood Banking". PhD thesis.

use super::route_cost;
use crate::distance::ArcCost;

/// Applies Or-opt improvement to a single route.
///
/// Tries relocating segments of 1, 2, and 3 visits to better positions.
/// Returns the improved sequence and total cost.
///
/// # Arguments
///
/// * `route` — Ordered visits, excluding `start` and `end`
/// * `start`, `end` — Route endpoints
/// * `costs` — Arc costs
///
/// # Examples
///
/// ```
/// use route_optimizer::distance::DistanceMatrix;
/// use route_optimizer::local_search::{or_opt_improve, route_cost};
///
/// let mut dm = DistanceMatrix::new(4);
/// for i in 0..4 {
///     for j in 0..4 {
///         dm.set(i, j, (i as f64 - j as f64).abs());
///     }
/// }
///
/// let (improved, dist) = or_opt_improve(&[2, 1, 3], 0, 0, &dm);
/// assert!(dist <= route_cost(&[2, 1, 3], 0, 0, &dm) + 1e-10);
/// assert_eq!(improved.len(), 3);
/// ```
pub fn or_opt_improve<C: ArcCost>(
    route: &[usize],
    start: usize,
    end: usize,
    costs: &C,
) -> (Vec<usize>, f64) {
    if route.len() < 2 {
        return (route.to_vec(), route_cost(route, start, end, costs));
    }

    let mut current = route.to_vec();
    let mut improved = true;

    while improved {
        improved = false;

        for seg_len in 1..=3.min(current.len()) {
            if try_or_opt_pass(&mut current, start, end, costs, seg_len) {
                improved = true;
            }
        }
    }

    let cost = route_cost(&current, start, end, costs);
    (current, cost)
}

/// One pass of Or-opt for a given segment length. Returns true if improved.
fn try_or_opt_pass<C: ArcCost>(
    route: &mut Vec<usize>,
    start: usize,
    end: usize,
    costs: &C,
    seg_len: usize,
) -> bool {
    let n = route.len();
    if n < seg_len + 1 {
        return false;
    }

    let mut best_delta = -1e-10;
    let mut best_from = 0;
    let mut best_to = 0;

    for from in 0..=(n - seg_len) {
        let prev = if from == 0 { start } else { route[from - 1] };
        let after = if from + seg_len >= n {
            end
        } else {
            route[from + seg_len]
        };
        let seg_first = route[from];
        let seg_last = route[from + seg_len - 1];

        // Old edges: prev→seg_first + seg_last→after; after removal: prev→after.
        let removal_gain =
            costs.cost(prev, seg_first) + costs.cost(seg_last, after) - costs.cost(prev, after);

        // `to` is the gap before route[to]; gaps touching the segment are no-ops.
        for to in 0..=n {
            if to >= from && to <= from + seg_len {
                continue;
            }

            let ins_prev = if to == 0 { start } else { route[to - 1] };
            let ins_next = if to >= n { end } else { route[to] };

            let insertion_cost = costs.cost(ins_prev, seg_first) + costs.cost(seg_last, ins_next)
                - costs.cost(ins_prev, ins_next);

            let delta = insertion_cost - removal_gain;

            if delta < best_delta {
                best_delta = delta;
                best_from = from;
                best_to = to;
            }
        }
    }

    if best_delta < -1e-10 {
        let segment: Vec<usize> = route.drain(best_from..best_from + seg_len).collect();
        let insert_pos = if best_to > best_from {
            best_to - seg_len
        } else {
            best_to
        };
        for (i, &v) in segment.iter().enumerate() {
            route.insert(insert_pos + i, v);
        }
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::DistanceMatrix;

    fn line_matrix(n: usize) -> DistanceMatrix {
        let mut dm = DistanceMatrix::new(n);
        for i in 0..n {
            for j in 0..n {
                dm.set(i, j, (i as f64 - j as f64).abs());
            }
        }
        dm
    }

    #[test]
    fn test_or_opt_already_optimal() {
        let dm = line_matrix(4);
        let (improved, dist) = or_opt_improve(&[1, 2, 3], 0, 0, &dm);
        assert_eq!(improved, vec![1, 2, 3]);
        assert!((dist - 6.0).abs() < 1e-10);
    }

    #[test]
    fn test_or_opt_moves_misplaced_visit() {
        let dm = line_matrix(5);
        // 0→4→1→2→3→0 = 4 + 3 + 1 + 1 + 3 = 12; optimal is 8.
        let (improved, dist) = or_opt_improve(&[4, 1, 2, 3], 0, 0, &dm);
        assert!((dist - 8.0).abs() < 1e-10, "got {improved:?} at {dist}");
    }

    #[test]
    fn test_or_opt_insert_at_tail() {
        let dm = line_matrix(4);
        // Moving 3 from the front to the very end needs the final gap.
        let (improved, dist) = or_opt_improve(&[3, 1, 2], 0, 0, &dm);
        assert!((dist - 6.0).abs() < 1e-10);
        assert_eq!(improved.len(), 3);
    }

    #[test]
    fn test_or_opt_empty_and_single() {
        let dm = line_matrix(3);
        assert_eq!(or_opt_improve(&[], 0, 0, &dm), (vec![], 0.0));
        let (r, d) = or_opt_improve(&[2], 0, 0, &dm);
        assert_eq!(r, vec![2]);
        assert!((d - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_or_opt_does_not_worsen() {
        let dm = line_matrix(6);
        let initial = [5, 2, 4, 1, 3];
        let before = route_cost(&initial, 0, 0, &dm);
        let (_, after) = or_opt_improve(&initial, 0, 0, &dm);
        assert!(after <= before + 1e-10);
    }
}
