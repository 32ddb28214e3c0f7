use super::RebaseError;
use crate::algorithm::matching::LinkTransfer;
use crate::algorithm::progress;
use crate::config::LineNamePolicy;
use beeline_core::model::{
    network::{LinkId, Network},
    schedule::{StopFacilityId, TransitSchedule},
};
use rayon::prelude::*;
use std::collections::{BTreeMap, BTreeSet};

/// names of the transit lines known to use each link of a network.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineUsage {
    usage: BTreeMap<LinkId, BTreeSet<String>>,
}

impl LineUsage {
    /// usage from a schedule that already runs on the network: every link on
    /// the path of a route operated with one of the `usage_modes` is used by
    /// that route's line.
    pub fn from_schedule<S: AsRef<str>>(
        schedule: &TransitSchedule,
        usage_modes: &[S],
        names: &LineNamePolicy,
    ) -> LineUsage {
        let mut usage: BTreeMap<LinkId, BTreeSet<String>> = BTreeMap::new();
        for line in schedule.lines().values() {
            let name = names.name_of(line);
            let routes = line
                .routes
                .values()
                .filter(|r| usage_modes.iter().any(|m| r.transport_mode == m.as_ref()));
            for route in routes {
                for link_id in route.links.iter() {
                    usage
                        .entry(link_id.clone())
                        .or_default()
                        .insert(name.clone());
                }
            }
        }
        LineUsage { usage }
    }

    /// usage carried over from a schedule prepared on another network. each
    /// facility of the prepared schedule whose link allows a usage mode has
    /// that link transferred onto the target network, and the link it lands
    /// on is used by every usage-mode line stopping at the facility.
    /// facilities whose link cannot be transferred are logged and skipped.
    pub fn transfer<S: AsRef<str>>(
        prepared: &TransitSchedule,
        prepared_network: &Network,
        link_transfer: &LinkTransfer,
        usage_modes: &[S],
        names: &LineNamePolicy,
        parallelize: bool,
    ) -> Result<LineUsage, RebaseError> {
        let facility_lines = facility_lines(prepared, usage_modes, names);
        let eligible = facility_lines
            .iter()
            .filter_map(|(facility_id, lines)| {
                let facility = prepared.get_facility(facility_id)?;
                let link = prepared_network.get_link(&facility.link)?;
                if link.allows_any_mode(usage_modes) {
                    Some((&facility.link, lines))
                } else {
                    None
                }
            })
            .collect::<Vec<_>>();
        log::info!(
            "transferring {} prepared stop links onto the target network",
            eligible.len()
        );

        let bar = progress::shared_bar(eligible.len(), "line usage transfer")
            .map_err(RebaseError::ProgressBar)?;
        let transfer = |(link_id, _): &(&LinkId, &BTreeSet<String>)| {
            let result = link_transfer.transfer(link_id, prepared_network);
            progress::tick(&bar);
            result
        };
        let transferred = if parallelize {
            eligible.par_iter().map(transfer).collect::<Vec<_>>()
        } else {
            eligible.iter().map(transfer).collect::<Vec<_>>()
        };

        let mut usage: BTreeMap<LinkId, BTreeSet<String>> = BTreeMap::new();
        for ((prepared_link, lines), result) in eligible.iter().zip(transferred) {
            match result {
                Ok(segment_match) => usage
                    .entry(segment_match.link_id)
                    .or_default()
                    .extend(lines.iter().cloned()),
                Err(e) => log::warn!("prepared link '{prepared_link}' not transferred: {e}"),
            }
        }
        Ok(LineUsage { usage })
    }

    pub fn lines_on(&self, link_id: &LinkId) -> Option<&BTreeSet<String>> {
        self.usage.get(link_id)
    }

    /// true if the link is used by at least one of `lines`
    pub fn is_used_by_any(&self, link_id: &LinkId, lines: &BTreeSet<String>) -> bool {
        self.lines_on(link_id)
            .map(|used| !used.is_disjoint(lines))
            .unwrap_or(false)
    }

    /// number of distinct lines using the link
    pub fn count(&self, link_id: &LinkId) -> usize {
        self.lines_on(link_id).map(|s| s.len()).unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&LinkId, &BTreeSet<String>)> {
        self.usage.iter()
    }
}

/// names of the lines stopping at each facility, counting only routes operated
/// with one of the `usage_modes`. facilities without such lines are absent.
pub fn facility_lines<S: AsRef<str>>(
    schedule: &TransitSchedule,
    usage_modes: &[S],
    names: &LineNamePolicy,
) -> BTreeMap<StopFacilityId, BTreeSet<String>> {
    let mut out: BTreeMap<StopFacilityId, BTreeSet<String>> = BTreeMap::new();
    for line in schedule.lines().values() {
        let name = names.name_of(line);
        let routes = line
            .routes
            .values()
            .filter(|r| usage_modes.iter().any(|m| r.transport_mode == m.as_ref()));
        for route in routes {
            for stop in route.stops.iter() {
                out.entry(stop.facility.clone())
                    .or_default()
                    .insert(name.clone());
            }
        }
    }
    out
}
