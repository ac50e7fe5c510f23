//! CSV writer for solved routes.

use std::fs;
use std::io::Write;
use std::path::Path;

use log::info;

use super::records::{ROUTE_COLUMN, VEHICLE_COLUMN};
use crate::error::{Error, Result};
use crate::models::Tour;

/// Writes `tours` to `path`, creating the parent directory if needed.
///
/// A single tour produces one `TSP_Route` column. Several tours produce
/// `Vehicle,TSP_Route` rows.
pub fn write_routes(path: &Path, tours: &[Tour]) -> Result<()> {
    let io_error = |source| Error::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_error)?;
    }
    let file = fs::File::create(path).map_err(io_error)?;
    write_route_rows(file, tours, path)?;
    info!("wrote {} route(s) to {}", tours.len(), path.display());
    Ok(())
}

/// Writes route rows to any writer. `path` is used only in errors.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use route_optimizer::data::write_route_rows;
/// use route_optimizer::models::Tour;
///
/// let tour = Tour::new(0, vec!["A".into(), "B".into(), "A".into()], 2.0);
/// let mut out = Vec::new();
/// write_route_rows(&mut out, &[tour], Path::new("inline")).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "TSP_Route\nA\nB\nA\n");
/// ```
pub fn write_route_rows<W: Write>(writer: W, tours: &[Tour], path: &Path) -> Result<()> {
    let csv_error = |source| Error::Csv {
        path: path.to_path_buf(),
        source,
    };
    let mut wtr = csv::Writer::from_writer(writer);
    let multi = tours.len() > 1;

    if multi {
        wtr.write_record([VEHICLE_COLUMN, ROUTE_COLUMN])
            .map_err(csv_error)?;
    } else {
        wtr.write_record([ROUTE_COLUMN]).map_err(csv_error)?;
    }

    for tour in tours {
        let vehicle = tour.vehicle().to_string();
        for label in tour.labels() {
            if multi {
                wtr.write_record([vehicle.as_str(), label.as_str()])
                    .map_err(csv_error)?;
            } else {
                wtr.write_record([label.as_str()]).map_err(csv_error)?;
            }
        }
    }

    wtr.flush().map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}
