//! CSV loaders for the distance and orders tables.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::{debug, info};

use super::records::{
    DistanceRecord, OrderTable, DESTINATION_COLUMN, DISTANCE_COLUMN, SOURCE_COLUMN,
};
use crate::error::{Error, Result};

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn csv_error(path: &Path) -> impl Fn(csv::Error) -> Error + '_ {
    move |source| Error::Csv {
        path: path.to_path_buf(),
        source,
    }
}

/// Loads the distance table at `path`.
///
/// Requires the columns `Source`, `Destination` and `Distance(M)`; other
/// columns are ignored. Fails on an empty table and on any distance that is
/// not a finite, non-negative number.
pub fn read_distance_table(path: &Path) -> Result<Vec<DistanceRecord>> {
    let records = read_distance_records(open(path)?, path)?;
    info!("loaded {} distance rows from {}", records.len(), path.display());
    Ok(records)
}

/// Parses a distance table from any reader. `path` is used only in errors.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use route_optimizer::data::read_distance_records;
///
/// let csv = "Source,Destination,Distance(M)\nA,B,10\nB,C,2.5\n";
/// let rows = read_distance_records(csv.as_bytes(), Path::new("inline")).unwrap();
/// assert_eq!(rows.len(), 2);
/// assert_eq!(rows[1].distance, 2.5);
/// ```
pub fn read_distance_records<R: Read>(reader: R, path: &Path) -> Result<Vec<DistanceRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers().map_err(csv_error(path))?.clone();
    let column = |name: &str| {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| Error::MissingColumn {
                path: path.to_path_buf(),
                column: name.to_string(),
            })
    };
    let src_col = column(SOURCE_COLUMN)?;
    let dst_col = column(DESTINATION_COLUMN)?;
    let dist_col = column(DISTANCE_COLUMN)?;

    let mut records = Vec::new();
    for row in rdr.records() {
        let row = row.map_err(csv_error(path))?;
        let line = row.position().map(|p| p.line()).unwrap_or(0);
        let cell = |i: usize| row.get(i).unwrap_or("");

        let raw = cell(dist_col);
        let distance = match raw.parse::<f64>() {
            Ok(d) if d.is_finite() && d >= 0.0 => d,
            _ => {
                return Err(Error::InvalidDistance {
                    path: path.to_path_buf(),
                    line,
                    value: raw.to_string(),
                })
            }
        };
        records.push(DistanceRecord::new(cell(src_col), cell(dst_col), distance));
    }

    if records.is_empty() {
        return Err(Error::EmptyDistanceTable {
            path: path.to_path_buf(),
        });
    }
    debug!("parsed {} distance rows from {}", records.len(), path.display());
    Ok(records)
}

/// Loads the orders table at `path` as raw rows.
///
/// Rows may have differing lengths.
pub fn read_order_table(path: &Path) -> Result<OrderTable> {
    let table = read_order_rows(open(path)?, path)?;
    info!(
        "loaded {} order rows ({} columns) from {}",
        table.len(),
        table.headers.len(),
        path.display()
    );
    Ok(table)
}

/// Parses an orders table from any reader. `path` is used only in errors.
pub fn read_order_rows<R: Read>(reader: R, path: &Path) -> Result<OrderTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(reader);

    let headers = rdr
        .headers()
        .map_err(csv_error(path))?
        .iter()
        .map(str::to_string)
        .collect();
    let mut rows = Vec::new();
    for row in rdr.records() {
        let row = row.map_err(csv_error(path))?;
        rows.push(row.iter().map(str::to_string).collect());
    }
    Ok(OrderTable { headers, rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(csv: &str) -> Result<Vec<DistanceRecord>> {
        read_distance_records(csv.as_bytes(), Path::new("test.csv"))
    }

    #[test]
    fn test_read_basic() {
        let rows = parse("Source,Destination,Distance(M)\nA,B,1\nB,C,2\n").expect("valid");
        assert_eq!(
            rows,
            vec![DistanceRecord::new("A", "B", 1.0), DistanceRecord::new("B", "C", 2.0)]
        );
    }

    #[test]
    fn test_extra_columns_and_order() {
        let rows = parse("Distance(M),Note,Destination,Source\n7, x ,B,A\n").expect("valid");
        assert_eq!(rows, vec![DistanceRecord::new("A", "B", 7.0)]);
    }

    #[test]
    fn test_trims_whitespace() {
        let rows = parse("Source,Destination,Distance(M)\n A , B , 3.5 \n").expect("valid");
        assert_eq!(rows[0], DistanceRecord::new("A", "B", 3.5));
    }

    #[test]
    fn test_missing_column() {
        let err = parse("Source,Destination\nA,B\n").unwrap_err();
        match err {
            Error::MissingColumn { column, .. } => assert_eq!(column, "Distance(M)"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_negative_distance_rejected() {
        let err = parse("Source,Destination,Distance(M)\nA,B,1\nA,C,-3\n").unwrap_err();
        match err {
            Error::InvalidDistance { line, value, .. } => {
                assert_eq!(line, 3);
                assert_eq!(value, "-3");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_non_numeric_distance_rejected() {
        assert!(matches!(
            parse("Source,Destination,Distance(M)\nA,B,far\n"),
            Err(Error::InvalidDistance { .. })
        ));
        assert!(matches!(
            parse("Source,Destination,Distance(M)\nA,B,inf\n"),
            Err(Error::InvalidDistance { .. })
        ));
    }

    #[test]
    fn test_empty_table() {
        assert!(matches!(
            parse("Source,Destination,Distance(M)\n"),
            Err(Error::EmptyDistanceTable { .. })
        ));
    }

    #[test]
    fn test_order_rows_flexible() {
        let table = read_order_rows(
            "Order_ID,City\n1,A\n2,B,extra\n".as_bytes(),
            Path::new("orders.csv"),
        )
        .expect("valid");
        assert_eq!(table.headers, vec!["Order_ID", "City"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows[1].len(), 3);
    }

    #[test]
    fn test_missing_file() {
        let err = read_distance_table(Path::new("/nonexistent/distance.csv")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
