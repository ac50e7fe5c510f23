//! Domain model types for TSP routing.
//!
//! Provides the city label index, the problem instance handed to solvers,
//! the node-space route plan solvers return, and labelled tours.

mod city;
mod problem;
mod solution;
mod tour;

pub use city::CityIndex;
pub use problem::TspProblem;
pub use solution::RoutePlan;
pub use tour::Tour;
