use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("zero-length direction vector between {0}")]
    DegenerateGeometry(String),
}
