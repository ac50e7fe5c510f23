//! # route-optimizer
//!
//! Single-vehicle TSP route optimization from tabular distance data. Reads a
//! distance table, indexes its cities, builds a symmetric distance matrix,
//! solves for a closed tour from the depot, and writes the visiting order.
//!
//! ## Modules
//!
//! - [`data`] — CSV loading of distance/orders tables and route output
//! - [`models`] — City index, problem instance, route plan, labelled tour
//! - [`distance`] — Distance matrix and its construction from an edge list
//! - [`routing`] — Index manager, routing model, search parameters, route extraction
//! - [`constructive`] — First-solution heuristics (path cheapest arc, cheapest insertion)
//! - [`local_search`] — Route improvement (2-opt, Or-opt, greedy descent)
//! - [`solver`] — [`TspSolver`](solver::TspSolver) capability with heuristic and exact solvers
//! - [`config`] — Run configuration
//! - [`pipeline`] — End-to-end run

pub mod config;
pub mod constructive;
pub mod data;
pub mod distance;
pub mod error;
pub mod local_search;
pub mod models;
pub mod pipeline;
pub mod routing;
pub mod solver;

pub use error::{Error, Result};
