//! Distance matrices.
//!
//! Provides a dense distance matrix with per-cell "known" tracking and its
//! construction from a distance table.

mod builder;
mod matrix;

pub use builder::{build_matrix, MissingPairPolicy};
pub use matrix::{ArcCost, DistanceMatrix};
