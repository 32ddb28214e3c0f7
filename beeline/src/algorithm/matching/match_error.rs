use beeline_core::{geometry::GeometryError, model::network::NetworkError};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MatchError {
    #[error("no link found for '{record}' within search radius {radius}")]
    NoMatchFound { record: String, radius: f64 },
    #[error("cannot match '{record}': {source}")]
    DegenerateGeometry {
        record: String,
        source: GeometryError,
    },
    #[error("cannot match '{0}' against an empty spatial index")]
    EmptyIndex(String),
    #[error(transparent)]
    NetworkError(#[from] NetworkError),
}
