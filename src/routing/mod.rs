//! Routing model layer.
//!
//! An index manager maps problem nodes to routing indices. A model holds
//! registered transit-cost callbacks and runs a first-solution strategy
//! followed by optional local search. An assignment records each index's
//! successor, and [`extract_route`] walks it back into node order.
//!
//! - [`RoutingIndexManager`] — Node ↔ index mapping with per-vehicle start/end
//! - [`RoutingModel`] — Callbacks, arc costs, solve
//! - [`SearchParameters`] — First-solution strategy and local search choice
//! - [`Assignment`] — Solved successor links and objective

mod assignment;
mod extract;
mod index_manager;
mod model;
mod parameters;

pub use assignment::Assignment;
pub use extract::extract_route;
pub use index_manager::RoutingIndexManager;
pub use model::{RoutingModel, RoutingStatus};
pub use parameters::{FirstSolutionStrategy, LocalSearch, SearchParameters};
