//! lookup tables relating schedule identifiers to line names and network
//! links, for joining simulation output against external data.
use super::LinkMatchRow;
use crate::algorithm::rebase::LineUsage;
use crate::config::LineNamePolicy;
use crate::io::PointRecord;
use beeline_core::{
    model::{
        network::Network,
        schedule::{StopFacilityId, TransitSchedule},
    },
    spatial::LinkSpatialIndex,
};
use itertools::Itertools;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VehicleLineRow {
    pub vehicle_id: String,
    pub line: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FacilityLinesRow {
    pub facility_id: StopFacilityId,
    pub facility_name: Option<String>,
    /// comma separated, sorted
    pub lines: String,
}

/// the line operating each vehicle, from the departures of every route. a
/// vehicle serving several lines is reported once per line.
pub fn vehicle_lines(schedule: &TransitSchedule, names: &LineNamePolicy) -> Vec<VehicleLineRow> {
    schedule
        .lines()
        .values()
        .flat_map(|line| {
            let name = names.name_of(line);
            line.routes
                .values()
                .flat_map(|r| r.departures.iter())
                .filter_map(|d| d.vehicle.clone())
                .map(move |vehicle_id| (vehicle_id, name.clone()))
                .collect_vec()
        })
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(|(vehicle_id, line)| VehicleLineRow { vehicle_id, line })
        .collect()
}

/// the lines stopping at each facility, regardless of mode.
pub fn facility_lines(schedule: &TransitSchedule, names: &LineNamePolicy) -> Vec<FacilityLinesRow> {
    let mut lookup: BTreeMap<&StopFacilityId, BTreeSet<String>> = BTreeMap::new();
    for line in schedule.lines().values() {
        let name = names.name_of(line);
        for facility_id in line.facility_ids() {
            lookup.entry(facility_id).or_default().insert(name.clone());
        }
    }
    lookup
        .into_iter()
        .map(|(facility_id, lines)| FacilityLinesRow {
            facility_id: facility_id.clone(),
            facility_name: schedule
                .get_facility(facility_id)
                .and_then(|f| f.name.clone()),
            lines: lines.into_iter().join(","),
        })
        .collect()
}

/// every link used by at least one line, with its usage count.
pub fn link_usage(network: &Network, usage: &LineUsage) -> Vec<LinkMatchRow> {
    usage
        .iter()
        .map(|(link_id, _)| LinkMatchRow::new(link_id.as_str(), link_id, network, usage))
        .collect()
}

/// locates each point on its nearest link of `network`.
pub fn point_links(
    points: &[PointRecord],
    network: &Network,
    index: &LinkSpatialIndex,
    usage: &LineUsage,
) -> Vec<LinkMatchRow> {
    points
        .iter()
        .filter_map(|point| match index.nearest(point.coord()) {
            Some(link_id) => Some(LinkMatchRow::new(&point.name, link_id, network, usage)),
            None => {
                log::warn!("no link found for point '{}'", point.name);
                None
            }
        })
        .collect()
}
