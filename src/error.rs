//! Error types for route optimization.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for route optimization operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while loading data, building the matrix, or configuring a solve.
///
/// An infeasible instance is not an error; see
/// [`SolveOutcome::Infeasible`](crate::solver::SolveOutcome::Infeasible).
#[derive(Error, Debug)]
pub enum Error {
    /// Opening, reading, or writing a file failed.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// File involved.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// A table could not be parsed as CSV.
    #[error("CSV error in {}: {source}", .path.display())]
    Csv {
        /// File involved.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: csv::Error,
    },

    /// A required column is absent from a table header.
    #[error("{}: missing required column `{column}`", .path.display())]
    MissingColumn {
        /// File involved.
        path: PathBuf,
        /// Column name.
        column: String,
    },

    /// A distance cell is not a finite, non-negative number.
    #[error("{}, line {line}: invalid distance `{value}`", .path.display())]
    InvalidDistance {
        /// File involved.
        path: PathBuf,
        /// 1-based line number, header included.
        line: u64,
        /// Raw cell text.
        value: String,
    },

    /// The distance table has no data rows.
    #[error("{}: distance table has no rows", .path.display())]
    EmptyDistanceTable {
        /// File involved.
        path: PathBuf,
    },

    /// Some city pairs have no distance and the policy rejects them.
    #[error("{count} city pair(s) have no distance, e.g. {}", format_pairs(.examples))]
    MissingPairs {
        /// Number of unordered pairs without a distance.
        count: usize,
        /// Up to five of those pairs, by label.
        examples: Vec<(String, String)>,
    },

    /// A distance row or a route references a city outside the index.
    #[error("unknown city {0}")]
    UnknownCity(String),

    /// Configuration values are out of range for the instance.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A configuration file is not valid TOML for [`RoutingConfig`](crate::config::RoutingConfig).
    #[error("cannot parse config {}: {source}", .path.display())]
    ConfigParse {
        /// File involved.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: toml::de::Error,
    },

    /// The selected solver cannot handle this problem shape.
    #[error("unsupported problem: {0}")]
    UnsupportedProblem(String),
}

fn format_pairs(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .map(|(a, b)| format!("{a}-{b}"))
        .collect::<Vec<_>>()
        .join(", ")
}
