mod link_segment;
mod link_spatial_index;

pub use link_segment::LinkSegment;
pub use link_spatial_index::LinkSpatialIndex;
