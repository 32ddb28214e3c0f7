use super::NearestAcceptance;
use serde::{Deserialize, Serialize};

/// thresholds for matching a directed segment onto network links. lengths are
/// in the units of the network's coordinate reference system.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct MatchingConfiguration {
    /// candidates at or beyond this distance from the reference point are rejected
    pub max_perpendicular_distance: f64,
    /// candidates at or beyond this angle to the reference direction are rejected
    pub max_angle_degrees: f64,
    /// radius of the candidate search around the reference point
    pub search_radius: f64,
    /// the radius is multiplied by this factor once if the first search fails
    pub radius_growth_factor: f64,
    pub nearest_acceptance: NearestAcceptance,
}

impl Default for MatchingConfiguration {
    fn default() -> Self {
        Self {
            max_perpendicular_distance: 10.0,
            max_angle_degrees: 5.0,
            search_radius: 100.0,
            radius_growth_factor: 2.0,
            nearest_acceptance: NearestAcceptance::Orientation,
        }
    }
}
