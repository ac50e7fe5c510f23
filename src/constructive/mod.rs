//! Constructive heuristics for building a first routing solution.
//!
//! Both work in routing-index space through [`ArcCost`](crate::distance::ArcCost)
//! and never use a non-traversable arc.
//!
//! - [`path_cheapest_arc`] — Greedy path extension by cheapest arc, O(n²)
//! - [`cheapest_insertion`] — Cheapest insertion over all routes, O(n³)
//! - [`path_search`] — Backtracking path search, used when both greedy rules fail

mod cheapest_insertion;
mod path_cheapest_arc;
mod path_search;

pub use cheapest_insertion::cheapest_insertion;
pub use path_cheapest_arc::path_cheapest_arc;
pub use path_search::{path_search, PATH_SEARCH_LIMIT};
