//! TSP problem instance.

use crate::distance::DistanceMatrix;
use crate::error::{Error, Result};

/// A routing instance: the cost matrix, the fleet size, and the depot.
///
/// # Examples
///
/// ```
/// use route_optimizer::distance::DistanceMatrix;
/// use route_optimizer::models::TspProblem;
///
/// let dm = DistanceMatrix::from_data(2, vec![0.0, 4.0, 4.0, 0.0]).unwrap();
/// let problem = TspProblem::new(dm, 1, 0).unwrap();
/// assert_eq!(problem.num_nodes(), 2);
///
/// let dm = DistanceMatrix::new(2);
/// assert!(TspProblem::new(dm, 1, 5).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct TspProblem {
    matrix: DistanceMatrix,
    vehicles: usize,
    depot: usize,
}

impl TspProblem {
    /// Creates a problem, rejecting an empty matrix, zero vehicles, and an
    /// out-of-range depot.
    pub fn new(matrix: DistanceMatrix, vehicles: usize, depot: usize) -> Result<Self> {
        if matrix.size() == 0 {
            return Err(Error::InvalidConfig("no cities to route".to_string()));
        }
        if vehicles == 0 {
            return Err(Error::InvalidConfig(
                "vehicle count must be at least 1".to_string(),
            ));
        }
        if depot >= matrix.size() {
            return Err(Error::InvalidConfig(format!(
                "depot index {depot} is out of range for {} cities",
                matrix.size()
            )));
        }
        Ok(Self {
            matrix,
            vehicles,
            depot,
        })
    }

    /// Cost matrix.
    pub fn matrix(&self) -> &DistanceMatrix {
        &self.matrix
    }

    /// Number of vehicles.
    pub fn vehicles(&self) -> usize {
        self.vehicles
    }

    /// Depot node.
    pub fn depot(&self) -> usize {
        self.depot
    }

    /// Number of nodes, depot included.
    pub fn num_nodes(&self) -> usize {
        self.matrix.size()
    }
}
