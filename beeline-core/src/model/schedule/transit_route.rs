use super::{Departure, TransitRouteId, TransitRouteStop};
use crate::model::network::LinkId;
use serde::{Deserialize, Serialize};

/// an ordered network path served by an ordered list of stops.
///
/// # Invariants
///
/// the first and last path links are the links of the first and last stop's
/// facility, and consecutive links share a node (`to` of link i is `from` of
/// link i+1). neither is checked on construction; see the route rewiring in
/// the `beeline` crate, which validates both before emitting a route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitRoute {
    pub id: TransitRouteId,
    pub transport_mode: String,
    pub links: Vec<LinkId>,
    pub stops: Vec<TransitRouteStop>,
    #[serde(default)]
    pub departures: Vec<Departure>,
}

impl TransitRoute {
    pub fn first_stop(&self) -> Option<&TransitRouteStop> {
        self.stops.first()
    }

    pub fn last_stop(&self) -> Option<&TransitRouteStop> {
        self.stops.last()
    }

    /// same route, different path. stops and departures are carried over unchanged.
    pub fn with_links(&self, links: Vec<LinkId>) -> TransitRoute {
        TransitRoute {
            id: self.id.clone(),
            transport_mode: self.transport_mode.clone(),
            links,
            stops: self.stops.clone(),
            departures: self.departures.clone(),
        }
    }
}
