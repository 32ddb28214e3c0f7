use crate::algorithm::matching::MatchError;
use beeline_core::model::{network::LinkId, schedule::StopFacilityId};
use serde::Serialize;
use std::fmt::Display;

/// how a stop facility's new link was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReassignmentMethod {
    /// best aligned link among those used by the stop's lines
    Scored,
    /// nearest link among those used by the stop's lines, none of which scored
    NearestSurvivor,
    /// no nearby link is used by the stop's lines; the nearest link overall
    UnfilteredNearest,
    /// no link found, the facility keeps its original link
    Unchanged,
}

impl Display for ReassignmentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ReassignmentMethod::Scored => "scored",
            ReassignmentMethod::NearestSurvivor => "nearest_survivor",
            ReassignmentMethod::UnfilteredNearest => "unfiltered_nearest",
            ReassignmentMethod::Unchanged => "unchanged",
        };
        write!(f, "{s}")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReassignmentOutcome {
    pub facility: StopFacilityId,
    pub original_link: LinkId,
    pub link: LinkId,
    pub method: ReassignmentMethod,
    /// set when no link satisfied the line filter under a strict policy
    pub error: Option<MatchError>,
}

impl ReassignmentOutcome {
    pub fn is_degraded(&self) -> bool {
        matches!(
            self.method,
            ReassignmentMethod::UnfilteredNearest | ReassignmentMethod::Unchanged
        )
    }
}
