use serde::{Deserialize, Serialize};

/// test applied to the single nearest link before the matcher falls back to a
/// radius search.
#[derive(Default, Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NearestAcceptance {
    /// accept when the nearest link points in the same general direction
    /// (positive directional similarity)
    #[default]
    Orientation,
    /// accept only when the nearest link also passes the distance and angle
    /// thresholds of the candidate scorer
    Thresholds,
}
