//! Labelled tour type.

use super::CityIndex;
use crate::error::{Error, Result};

/// An ordered sequence of city labels for one vehicle, closed at the depot.
///
/// # Examples
///
/// ```
/// use route_optimizer::models::{CityIndex, Tour};
///
/// let cities = CityIndex::from_labels(["A", "B", "C"]);
/// let tour = Tour::from_nodes(0, &[0, 2, 1, 0], 6.0, &cities).unwrap();
/// assert_eq!(tour.labels(), ["A", "C", "B", "A"]);
/// assert_eq!(tour.depot(), Some("A"));
/// assert_eq!(tour.num_cities(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Tour {
    vehicle: usize,
    labels: Vec<String>,
    cost: f64,
}

impl Tour {
    /// Creates a tour from labels.
    pub fn new(vehicle: usize, labels: Vec<String>, cost: f64) -> Self {
        Self {
            vehicle,
            labels,
            cost,
        }
    }

    /// Maps a node sequence to labels.
    ///
    /// Fails with [`Error::UnknownCity`] if a node is not in `cities`.
    pub fn from_nodes(
        vehicle: usize,
        nodes: &[usize],
        cost: f64,
        cities: &CityIndex,
    ) -> Result<Self> {
        let labels = nodes
            .iter()
            .map(|&n| {
                cities
                    .label(n)
                    .map(str::to_string)
                    .ok_or_else(|| Error::UnknownCity(format!("#{n}")))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(vehicle, labels, cost))
    }

    /// Vehicle that drives this tour.
    pub fn vehicle(&self) -> usize {
        self.vehicle
    }

    /// Labels in visiting order, depot first and last.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Total travel cost.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// The depot label, if the tour is non-empty.
    pub fn depot(&self) -> Option<&str> {
        self.labels.first().map(String::as_str)
    }

    /// Number of distinct cities visited, depot included.
    pub fn num_cities(&self) -> usize {
        self.labels.len().saturating_sub(1)
    }

    /// Returns `true` if the vehicle leaves the depot and returns without a visit.
    pub fn is_unused(&self) -> bool {
        self.labels.len() <= 2
    }
}
