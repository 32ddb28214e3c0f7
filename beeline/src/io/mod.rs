mod feature_io;
pub mod file_ops;
mod io_error;
mod network_io;
mod point_record;
mod schedule_io;

pub use feature_io::read_features;
pub use io_error::IoError;
pub use network_io::{read_network, write_network};
pub use point_record::{read_points, PointRecord};
pub use schedule_io::{read_schedule, write_schedule};
