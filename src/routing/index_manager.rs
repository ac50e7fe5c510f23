//! Node ↔ routing index mapping.

/// Maps problem nodes to routing indices and back.
///
/// With `N` nodes and `V` vehicles, the non-depot nodes take indices
/// `0..N-1` in node order. Vehicle `k` starts at index `N-1+k` and ends at
/// index `N-1+V+k`; every start and end index maps back to the depot node.
///
/// # Examples
///
/// ```
/// use route_optimizer::routing::RoutingIndexManager;
///
/// let m = RoutingIndexManager::new(4, 2, 1);
/// assert_eq!(m.num_customers(), 3);
/// assert_eq!(m.node_to_index(0), 0);
/// assert_eq!(m.node_to_index(2), 1);
/// assert_eq!(m.start(1), 4);
/// assert_eq!(m.end(0), 5);
/// assert_eq!(m.index_to_node(5), 1);
/// assert_eq!(m.num_indices(), 7);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutingIndexManager {
    num_nodes: usize,
    num_vehicles: usize,
    depot: usize,
}

impl RoutingIndexManager {
    /// Creates a manager.
    ///
    /// # Panics
    ///
    /// Panics if `num_vehicles` is zero or `depot >= num_nodes`.
    pub fn new(num_nodes: usize, num_vehicles: usize, depot: usize) -> Self {
        assert!(num_vehicles > 0, "at least one vehicle is required");
        assert!(depot < num_nodes, "depot {depot} out of range for {num_nodes} nodes");
        Self {
            num_nodes,
            num_vehicles,
            depot,
        }
    }

    /// Number of nodes, depot included.
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    /// Number of vehicles.
    pub fn num_vehicles(&self) -> usize {
        self.num_vehicles
    }

    /// Depot node.
    pub fn depot(&self) -> usize {
        self.depot
    }

    /// Number of non-depot nodes; their indices are `0..num_customers()`.
    pub fn num_customers(&self) -> usize {
        self.num_nodes - 1
    }

    /// Total number of indices, start and end indices included.
    pub fn num_indices(&self) -> usize {
        self.num_customers() + 2 * self.num_vehicles
    }

    /// Start index of `vehicle`.
    pub fn start(&self, vehicle: usize) -> usize {
        self.num_customers() + vehicle
    }

    /// End index of `vehicle`.
    pub fn end(&self, vehicle: usize) -> usize {
        self.num_customers() + self.num_vehicles + vehicle
    }

    /// Returns `true` if `index` is some vehicle's start.
    pub fn is_start(&self, index: usize) -> bool {
        (self.start(0)..self.end(0)).contains(&index)
    }

    /// Returns `true` if `index` is some vehicle's end.
    pub fn is_end(&self, index: usize) -> bool {
        (self.end(0)..self.num_indices()).contains(&index)
    }

    /// Node behind `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= num_indices()`.
    pub fn index_to_node(&self, index: usize) -> usize {
        assert!(index < self.num_indices(), "routing index {index} out of range");
        if index >= self.num_customers() {
            self.depot
        } else if index < self.depot {
            index
        } else {
            index + 1
        }
    }

    /// Index of `node`. The depot maps to vehicle 0's start.
    ///
    /// # Panics
    ///
    /// Panics if `node >= num_nodes()`.
    pub fn node_to_index(&self, node: usize) -> usize {
        assert!(node < self.num_nodes, "node {node} out of range");
        match node.cmp(&self.depot) {
            std::cmp::Ordering::Less => node,
            std::cmp::Ordering::Equal => self.start(0),
            std::cmp::Ordering::Greater => node - 1,
        }
    }
}
