use super::{file_ops, IoError};
use geo::Coord;
use serde::{Deserialize, Serialize};

/// a named coordinate, such as a counting station, to be located on the network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointRecord {
    pub name: String,
    pub x: f64,
    pub y: f64,
}

impl PointRecord {
    pub fn coord(&self) -> Coord<f64> {
        Coord {
            x: self.x,
            y: self.y,
        }
    }
}

/// reads `name,x,y` records from a CSV file with headers.
pub fn read_points(path: &str) -> Result<Vec<PointRecord>, IoError> {
    let reader = file_ops::open_reader(path)?;
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);
    let points = csv_reader
        .deserialize()
        .collect::<Result<Vec<PointRecord>, csv::Error>>()
        .map_err(|source| IoError::CsvError {
            path: String::from(path),
            source,
        })?;
    log::info!("read {} point records from {path}", points.len());
    Ok(points)
}
