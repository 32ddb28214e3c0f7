use beeline_core::model::{network::NetworkError, schedule::ScheduleError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IoError {
    #[error("failure reading or writing {path}: {source}")]
    FileError {
        path: String,
        source: std::io::Error,
    },
    #[error("failure decoding JSON from {path}: {source}")]
    JsonError {
        path: String,
        source: serde_json::Error,
    },
    #[error("failure reading CSV from {path}: {source}")]
    CsvError { path: String, source: csv::Error },
    #[error("invalid GeoJSON in {path}: {message}")]
    GeoJsonError { path: String, message: String },
    #[error("file {path} already exists")]
    FileExists { path: String },
    #[error(transparent)]
    NetworkError(#[from] NetworkError),
    #[error(transparent)]
    ScheduleError(#[from] ScheduleError),
}
