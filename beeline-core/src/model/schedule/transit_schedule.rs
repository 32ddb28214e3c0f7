use super::{
    ScheduleError, StopFacility, StopFacilityId, TransitLine, TransitLineId,
    TransitLineSerializable,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// stop facilities and the lines that serve them. routes and facilities refer
/// to network links only by [`crate::model::network::LinkId`], so a schedule
/// can be rebuilt independently of the network it is later validated against.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransitSchedule {
    facilities: BTreeMap<StopFacilityId, StopFacility>,
    lines: BTreeMap<TransitLineId, TransitLine>,
}

impl TransitSchedule {
    pub fn new() -> TransitSchedule {
        TransitSchedule::default()
    }

    pub fn add_facility(&mut self, facility: StopFacility) -> Result<(), ScheduleError> {
        if self.facilities.contains_key(&facility.id) {
            return Err(ScheduleError::DuplicateFacility(facility.id));
        }
        self.facilities.insert(facility.id.clone(), facility);
        Ok(())
    }

    /// adds a line after confirming that every stop of every route refers to a
    /// facility already in this schedule.
    pub fn add_line(&mut self, line: TransitLine) -> Result<(), ScheduleError> {
        if self.lines.contains_key(&line.id) {
            return Err(ScheduleError::DuplicateLine(line.id));
        }
        for route in line.routes.values() {
            for stop in route.stops.iter() {
                if !self.facilities.contains_key(&stop.facility) {
                    return Err(ScheduleError::MissingFacility {
                        route: route.id.clone(),
                        facility: stop.facility.clone(),
                    });
                }
            }
        }
        self.lines.insert(line.id.clone(), line);
        Ok(())
    }

    pub fn get_facility(&self, facility_id: &StopFacilityId) -> Option<&StopFacility> {
        self.facilities.get(facility_id)
    }

    pub fn facilities(&self) -> &BTreeMap<StopFacilityId, StopFacility> {
        &self.facilities
    }

    pub fn lines(&self) -> &BTreeMap<TransitLineId, TransitLine> {
        &self.lines
    }

    /// a schedule with the same lines and a replacement facility table.
    ///
    /// # Errors
    ///
    /// fails if the replacement table dropped a facility that a route still uses.
    pub fn with_facilities(
        &self,
        facilities: BTreeMap<StopFacilityId, StopFacility>,
    ) -> Result<TransitSchedule, ScheduleError> {
        let mut out = TransitSchedule {
            facilities,
            lines: BTreeMap::new(),
        };
        for line in self.lines.values() {
            out.add_line(line.clone())?;
        }
        Ok(out)
    }

    /// a schedule with the same facilities and a replacement set of lines.
    pub fn with_lines(&self, lines: Vec<TransitLine>) -> Result<TransitSchedule, ScheduleError> {
        let mut out = TransitSchedule {
            facilities: self.facilities.clone(),
            lines: BTreeMap::new(),
        };
        for line in lines {
            out.add_line(line)?;
        }
        Ok(out)
    }
}

/// vectorized wire representation of a [`TransitSchedule`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScheduleSerializable {
    pub facilities: Vec<StopFacility>,
    pub lines: Vec<TransitLineSerializable>,
}

impl TryFrom<ScheduleSerializable> for TransitSchedule {
    type Error = ScheduleError;

    fn try_from(value: ScheduleSerializable) -> Result<Self, Self::Error> {
        let mut schedule = TransitSchedule::new();
        for facility in value.facilities {
            schedule.add_facility(facility)?;
        }
        for row in value.lines {
            let mut line = TransitLine::new(row.id, row.name);
            for route in row.routes {
                if line.routes.contains_key(&route.id) {
                    return Err(ScheduleError::DuplicateRoute {
                        line: line.id.clone(),
                        route: route.id,
                    });
                }
                line.routes.insert(route.id.clone(), route);
            }
            schedule.add_line(line)?;
        }
        Ok(schedule)
    }
}

impl From<&TransitSchedule> for ScheduleSerializable {
    fn from(schedule: &TransitSchedule) -> Self {
        ScheduleSerializable {
            facilities: schedule.facilities.values().cloned().collect(),
            lines: schedule
                .lines
                .values()
                .map(TransitLineSerializable::from)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::network::LinkId;
    use crate::model::schedule::{TransitRoute, TransitRouteId, TransitRouteStop};

    fn facility(id: &str, link: &str) -> StopFacility {
        StopFacility {
            id: StopFacilityId::from(id),
            name: None,
            x: 0.0,
            y: 0.0,
            link: LinkId::from(link),
            is_blocking: false,
        }
    }

    fn route(id: &str, links: &[&str], stops: &[&str]) -> TransitRoute {
        TransitRoute {
            id: TransitRouteId::from(id),
            transport_mode: String::from("bus"),
            links: links.iter().map(|l| LinkId::from(*l)).collect(),
            stops: stops
                .iter()
                .map(|s| TransitRouteStop::new(StopFacilityId::from(*s)))
                .collect(),
            departures: vec![],
        }
    }

    #[test]
    fn test_add_line_requires_known_facilities() {
        let mut schedule = TransitSchedule::new();
        schedule.add_facility(facility("s1", "l1")).unwrap();
        let mut line = TransitLine::new(TransitLineId::from("100"), None);
        let r = route("r1", &["l1", "l2"], &["s1", "s2"]);
        line.routes.insert(r.id.clone(), r);
        let result = schedule.add_line(line);
        assert_eq!(
            result,
            Err(ScheduleError::MissingFacility {
                route: TransitRouteId::from("r1"),
                facility: StopFacilityId::from("s2"),
            })
        );
    }

    #[test]
    fn test_serializable_round_trip_preserves_routes() {
        let mut schedule = TransitSchedule::new();
        schedule.add_facility(facility("s1", "l1")).unwrap();
        schedule.add_facility(facility("s2", "l2")).unwrap();
        let mut line = TransitLine::new(TransitLineId::from("100"), Some(String::from("M1")));
        let r = route("r1", &["l1", "l2"], &["s1", "s2"]);
        line.routes.insert(r.id.clone(), r);
        schedule.add_line(line).unwrap();

        let wire = ScheduleSerializable::from(&schedule);
        let restored = TransitSchedule::try_from(wire).unwrap();
        assert_eq!(restored, schedule);
    }
}
