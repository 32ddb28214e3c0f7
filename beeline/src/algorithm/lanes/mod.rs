mod bus_lane_tags;
mod lane_error;
mod lane_synthesizer;
mod link_substitution;

pub use bus_lane_tags::is_bus_lane;
pub use lane_error::LaneError;
pub use lane_synthesizer::{LaneSynthesis, LaneSynthesizer};
pub use link_substitution::{LinkSubstitutionBuilder, LinkSubstitutionMap};
