//! Dense distance matrix.

/// Cost of travelling between two locations.
///
/// Implemented by [`DistanceMatrix`] in node space and by
/// [`RoutingModel`](crate::routing::RoutingModel) in routing-index space, so
/// local search runs unchanged on either. A non-finite cost marks an arc that
/// must not be used.
pub trait ArcCost {
    /// Cost of the arc `from → to`.
    fn cost(&self, from: usize, to: usize) -> f64;
}

/// A dense n×n distance matrix stored in row-major order.
///
/// Each cell also records whether its distance is known. The diagonal is
/// known and zero from the start; every other cell becomes known when it is
/// [`set`](Self::set).
///
/// # Examples
///
/// ```
/// use route_optimizer::distance::DistanceMatrix;
///
/// let mut dm = DistanceMatrix::new(3);
/// dm.set_symmetric(0, 1, 5.0);
/// assert_eq!(dm.get(1, 0), 5.0);
/// assert_eq!(dm.size(), 3);
/// assert_eq!(dm.missing_pairs(), vec![(0, 2), (1, 2)]);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    known: Vec<bool>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    ///
    /// Only the diagonal is marked known.
    pub fn new(size: usize) -> Self {
        let mut known = vec![false; size * size];
        for i in 0..size {
            known[i * size + i] = true;
        }
        Self {
            data: vec![0.0; size * size],
            known,
            size,
        }
    }

    /// Creates a distance matrix from an explicit n×n grid. Every cell is known.
    ///
    /// Returns `None` if the data length doesn't match `size * size`.
    pub fn from_data(size: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        Some(Self {
            known: vec![true; data.len()],
            data,
            size,
        })
    }

    /// Returns the distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the distance from location `from` to location `to` and marks it known.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        let cell = from * self.size + to;
        self.data[cell] = distance;
        self.known[cell] = true;
    }

    /// Sets both directions of the pair `{a, b}`.
    pub fn set_symmetric(&mut self, a: usize, b: usize, distance: f64) {
        self.set(a, b, distance);
        self.set(b, a, distance);
    }

    /// Returns `true` if a distance was set for `from → to`.
    pub fn is_known(&self, from: usize, to: usize) -> bool {
        self.known[from * self.size + to]
    }

    /// Returns `true` if the arc `from → to` has a finite cost.
    pub fn is_traversable(&self, from: usize, to: usize) -> bool {
        self.get(from, to).is_finite()
    }

    /// Unordered pairs `(i, j)` with `i < j` where either direction is unknown.
    pub fn missing_pairs(&self) -> Vec<(usize, usize)> {
        let mut pairs = Vec::new();
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if !self.is_known(i, j) || !self.is_known(j, i) {
                    pairs.push((i, j));
                }
            }
        }
        pairs
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    ///
    /// Two infinite entries of the same sign count as equal.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                let (a, b) = (self.get(i, j), self.get(j, i));
                if a == b {
                    continue;
                }
                let diff = (a - b).abs();
                if diff.is_nan() || diff > tol {
                    return false;
                }
            }
        }
        true
    }
}

impl ArcCost for DistanceMatrix {
    fn cost(&self, from: usize, to: usize) -> f64 {
        self.get(from, to)
    }
}
