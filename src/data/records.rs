//! Row types for the input tables.

/// Header of the source-label column in the distance table.
pub const SOURCE_COLUMN: &str = "Source";
/// Header of the destination-label column in the distance table.
pub const DESTINATION_COLUMN: &str = "Destination";
/// Header of the distance column in the distance table.
pub const DISTANCE_COLUMN: &str = "Distance(M)";
/// Header of the single column in the route output file.
pub const ROUTE_COLUMN: &str = "TSP_Route";
/// Header of the vehicle column, written only for multi-vehicle output.
pub const VEHICLE_COLUMN: &str = "Vehicle";

/// One row of the distance table: an undirected edge between two cities.
///
/// # Examples
///
/// ```
/// use route_optimizer::data::DistanceRecord;
///
/// let r = DistanceRecord::new("A", "B", 12.5);
/// assert_eq!(r.source, "A");
/// assert_eq!(r.distance, 12.5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceRecord {
    /// Source city label.
    pub source: String,
    /// Destination city label.
    pub destination: String,
    /// Non-negative distance in metres.
    pub distance: f64,
}

impl DistanceRecord {
    /// Creates a record.
    pub fn new(source: impl Into<String>, destination: impl Into<String>, distance: f64) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            distance,
        }
    }
}

/// The orders table, kept as raw rows.
///
/// Only its shape is inspected; routing does not read it.
#[derive(Debug, Clone, Default)]
pub struct OrderTable {
    /// Header row.
    pub headers: Vec<String>,
    /// Data rows, one string per cell.
    pub rows: Vec<Vec<String>>,
}

impl OrderTable {
    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
