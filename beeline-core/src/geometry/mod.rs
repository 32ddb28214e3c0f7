mod geometry_error;
mod geometry_ops;

pub use geometry_error::GeometryError;
pub use geometry_ops::*;
