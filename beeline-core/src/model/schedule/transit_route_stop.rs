use super::StopFacilityId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitRouteStop {
    pub facility: StopFacilityId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrival_offset: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departure_offset: Option<f64>,
    #[serde(default)]
    pub await_departure: bool,
}

impl TransitRouteStop {
    pub fn new(facility: StopFacilityId) -> TransitRouteStop {
        TransitRouteStop {
            facility,
            arrival_offset: None,
            departure_offset: None,
            await_departure: false,
        }
    }
}
