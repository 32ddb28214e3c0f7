use super::{StopFacilityId, TransitLineId, TransitRoute, TransitRouteId};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TransitLine {
    pub id: TransitLineId,
    pub name: Option<String>,
    pub routes: BTreeMap<TransitRouteId, TransitRoute>,
}

impl TransitLine {
    pub fn new(id: TransitLineId, name: Option<String>) -> TransitLine {
        TransitLine {
            id,
            name,
            routes: BTreeMap::new(),
        }
    }

    /// all facilities served by any route of this line
    pub fn facility_ids(&self) -> BTreeSet<&StopFacilityId> {
        self.routes
            .values()
            .flat_map(|r| r.stops.iter().map(|s| &s.facility))
            .collect()
    }
}

/// wire form of a [`TransitLine`] with its routes vectorized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransitLineSerializable {
    pub id: TransitLineId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub routes: Vec<TransitRoute>,
}

impl From<&TransitLine> for TransitLineSerializable {
    fn from(line: &TransitLine) -> Self {
        TransitLineSerializable {
            id: line.id.clone(),
            name: line.name.clone(),
            routes: line.routes.values().cloned().collect(),
        }
    }
}
