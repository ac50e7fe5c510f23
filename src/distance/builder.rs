//! Distance matrix construction from an edge list.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use super::DistanceMatrix;
use crate::data::DistanceRecord;
use crate::error::{Error, Result};
use crate::models::CityIndex;

const MISSING_PAIR_EXAMPLES: usize = 5;

/// What to do with city pairs the distance table never mentions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum MissingPairPolicy {
    /// Fail with [`Error::MissingPairs`].
    #[default]
    Reject,
    /// Make the pair non-traversable. The solve may become infeasible.
    Forbid,
    /// Treat the pair as zero distance.
    Zero,
}

/// Builds a symmetric matrix from `records`.
///
/// Each record sets both directions of its pair; a later record for the same
/// unordered pair overwrites an earlier one. Self-loop rows are ignored.
/// Pairs no record mentions are resolved by `policy`.
///
/// # Examples
///
/// ```
/// use route_optimizer::data::DistanceRecord;
/// use route_optimizer::distance::{build_matrix, MissingPairPolicy};
/// use route_optimizer::models::CityIndex;
///
/// let rows = vec![
///     DistanceRecord::new("A", "B", 1.0),
///     DistanceRecord::new("B", "C", 2.0),
///     DistanceRecord::new("C", "A", 3.0),
/// ];
/// let cities = CityIndex::from_records(&rows);
/// let dm = build_matrix(&rows, &cities, MissingPairPolicy::Reject).unwrap();
/// assert_eq!(dm.get(0, 2), 3.0);
/// assert!(dm.is_symmetric(0.0));
/// ```
pub fn build_matrix(
    records: &[DistanceRecord],
    cities: &CityIndex,
    policy: MissingPairPolicy,
) -> Result<DistanceMatrix> {
    let mut dm = DistanceMatrix::new(cities.len());

    for r in records {
        let i = cities
            .index_of(&r.source)
            .ok_or_else(|| Error::UnknownCity(r.source.clone()))?;
        let j = cities
            .index_of(&r.destination)
            .ok_or_else(|| Error::UnknownCity(r.destination.clone()))?;
        if i == j {
            debug!("ignoring self-loop row for {}", r.source);
            continue;
        }
        if dm.is_known(i, j) && dm.get(i, j) != r.distance {
            debug!(
                "{}-{}: distance {} replaced by {}",
                r.source,
                r.destination,
                dm.get(i, j),
                r.distance
            );
        }
        dm.set_symmetric(i, j, r.distance);
    }

    let missing = dm.missing_pairs();
    if !missing.is_empty() {
        let label = |i: usize| cities.label(i).unwrap_or("?").to_string();
        match policy {
            MissingPairPolicy::Reject => {
                return Err(Error::MissingPairs {
                    count: missing.len(),
                    examples: missing
                        .iter()
                        .take(MISSING_PAIR_EXAMPLES)
                        .map(|&(i, j)| (label(i), label(j)))
                        .collect(),
                });
            }
            MissingPairPolicy::Forbid => {
                info!("{} city pair(s) have no distance; forbidding them", missing.len());
                for &(i, j) in &missing {
                    dm.set_symmetric(i, j, f64::INFINITY);
                }
            }
            MissingPairPolicy::Zero => {
                warn!(
                    "{} city pair(s) have no distance; treating them as zero, which biases routes through them",
                    missing.len()
                );
                for &(i, j) in &missing {
                    dm.set_symmetric(i, j, 0.0);
                }
            }
        }
    }

    info!("built {0}x{0} distance matrix", dm.size());
    Ok(dm)
}
