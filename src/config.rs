//! Run configuration.
//!
//! Defaults reproduce the classic setup: one vehicle, depot at index 0,
//! path-cheapest-arc with greedy-descent local search, and missing city pairs
//! rejected. Values can come from a TOML file and are then overridden by
//! command-line flags.
//!
//! ```toml
//! vehicles = 1
//! depot = 0
//! strategy = "cheapest-insertion"
//! local_search = "none"
//! missing_pairs = "forbid"
//! solver = "routing"
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::distance::MissingPairPolicy;
use crate::error::{Error, Result};
use crate::routing::{FirstSolutionStrategy, LocalSearch, SearchParameters};
use crate::solver::SolverKind;

/// Settings for one optimization run.
///
/// # Examples
///
/// ```
/// use route_optimizer::config::RoutingConfig;
/// use route_optimizer::distance::MissingPairPolicy;
///
/// let config = RoutingConfig::from_toml_str("depot = 2\nmissing_pairs = \"zero\"").unwrap();
/// assert_eq!(config.depot, 2);
/// assert_eq!(config.vehicles, 1);
/// assert_eq!(config.missing_pairs, MissingPairPolicy::Zero);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RoutingConfig {
    /// Number of vehicles, all starting and ending at the depot.
    pub vehicles: usize,
    /// Depot city index (position in the sorted label list).
    pub depot: usize,
    /// First-solution heuristic for the routing solver.
    pub strategy: FirstSolutionStrategy,
    /// Local search stage for the routing solver.
    pub local_search: LocalSearch,
    /// Handling of city pairs without a distance.
    pub missing_pairs: MissingPairPolicy,
    /// Solver to run.
    pub solver: SolverKind,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            vehicles: 1,
            depot: 0,
            strategy: FirstSolutionStrategy::default(),
            local_search: LocalSearch::default(),
            missing_pairs: MissingPairPolicy::default(),
            solver: SolverKind::default(),
        }
    }
}

impl RoutingConfig {
    /// Parses a TOML document. Absent keys keep their defaults.
    pub fn from_toml_str(text: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Loads a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Search parameters for [`RoutingSolver`](crate::solver::RoutingSolver).
    pub fn search_parameters(&self) -> SearchParameters {
        SearchParameters {
            first_solution_strategy: self.strategy,
            local_search: self.local_search,
        }
    }

    /// Checks the settings against an instance with `num_cities` cities.
    pub fn validate(&self, num_cities: usize) -> Result<()> {
        if self.vehicles == 0 {
            return Err(Error::InvalidConfig(
                "vehicle count must be at least 1".to_string(),
            ));
        }
        if self.depot >= num_cities {
            return Err(Error::InvalidConfig(format!(
                "depot index {} is out of range for {num_cities} cities",
                self.depot
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = RoutingConfig::default();
        assert_eq!(c.vehicles, 1);
        assert_eq!(c.depot, 0);
        assert_eq!(c.strategy, FirstSolutionStrategy::PathCheapestArc);
        assert_eq!(c.local_search, LocalSearch::GreedyDescent);
        assert_eq!(c.missing_pairs, MissingPairPolicy::Reject);
        assert_eq!(c.solver, SolverKind::Routing);
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(
            RoutingConfig::from_toml_str("").expect("empty"),
            RoutingConfig::default()
        );
    }

    #[test]
    fn test_full_toml() {
        let c = RoutingConfig::from_toml_str(
            r#"
            vehicles = 2
            depot = 1
            strategy = "cheapest-insertion"
            local_search = "none"
            missing_pairs = "forbid"
            solver = "exact"
            "#,
        )
        .expect("valid");
        assert_eq!(c.vehicles, 2);
        assert_eq!(c.strategy, FirstSolutionStrategy::CheapestInsertion);
        assert_eq!(c.local_search, LocalSearch::None);
        assert_eq!(c.missing_pairs, MissingPairPolicy::Forbid);
        assert_eq!(c.solver, SolverKind::Exact);
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(RoutingConfig::from_toml_str("depots = 3").is_err());
        assert!(RoutingConfig::from_toml_str("strategy = \"savings\"").is_err());
    }

    #[test]
    fn test_validate() {
        let c = RoutingConfig::default();
        assert!(c.validate(1).is_ok());
        assert!(c.validate(0).is_err());
        let c = RoutingConfig {
            vehicles: 0,
            ..RoutingConfig::default()
        };
        assert!(matches!(c.validate(5), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let err = RoutingConfig::load(Path::new("/nonexistent/route.toml")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn test_load_bad_toml() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "vehicles = \"many\"").expect("write");
        assert!(matches!(
            RoutingConfig::load(&path),
            Err(Error::ConfigParse { .. })
        ));
    }
}
