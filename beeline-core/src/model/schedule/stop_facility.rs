use super::StopFacilityId;
use crate::model::network::LinkId;
use geo::Coord;
use serde::{Deserialize, Serialize};

/// a transit stop record anchored on exactly one network link.
///
/// facilities are replaced, not modified: [`StopFacility::anchored_on`] creates
/// the successor record which supersedes this one in a rebased schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StopFacility {
    pub id: StopFacilityId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub x: f64,
    pub y: f64,
    pub link: LinkId,
    #[serde(default)]
    pub is_blocking: bool,
}

impl StopFacility {
    pub fn coord(&self) -> Coord<f64> {
        Coord {
            x: self.x,
            y: self.y,
        }
    }

    /// creates the replacement facility for this stop, bound to a new link.
    pub fn anchored_on(&self, link: LinkId) -> StopFacility {
        StopFacility {
            id: self.id.clone(),
            name: self.name.clone(),
            x: self.x,
            y: self.y,
            link,
            is_blocking: self.is_blocking,
        }
    }
}
