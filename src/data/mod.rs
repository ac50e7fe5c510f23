//! Tabular input and output.
//!
//! Reads the distance and orders tables and writes solved routes, all as CSV.

mod reader;
mod records;
mod writer;

pub use reader::{read_distance_records, read_distance_table, read_order_rows, read_order_table};
pub use records::{
    DistanceRecord, OrderTable, DESTINATION_COLUMN, DISTANCE_COLUMN, ROUTE_COLUMN, SOURCE_COLUMN,
    VEHICLE_COLUMN,
};
pub use writer::{write_route_rows, write_routes};
