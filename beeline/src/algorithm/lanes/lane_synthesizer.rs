use super::{is_bus_lane, LaneError, LinkSubstitutionBuilder, LinkSubstitutionMap};
use crate::algorithm::matching::{FeatureMatcher, MatchError};
use crate::algorithm::progress;
use crate::config::{BeelineConfiguration, FallbackPolicy, MatchingConfiguration};
use beeline_core::{
    model::{
        feature::{Feature, FeatureId},
        network::{Link, LinkId, Network, NetworkError},
    },
    spatial::LinkSpatialIndex,
};
use rayon::prelude::*;
use std::collections::{BTreeMap, BTreeSet};

/// result of a lane synthesis run.
#[derive(Debug)]
pub struct LaneSynthesis {
    /// the input network with one restricted-mode duplicate per matched link
    pub network: Network,
    pub substitutions: LinkSubstitutionMap,
    /// links matched by each bus lane feature
    pub matched: BTreeMap<FeatureId, BTreeSet<LinkId>>,
    /// bus lane features that could not be matched
    pub failures: Vec<(FeatureId, MatchError)>,
}

/// adds dedicated transit lanes to a network, one duplicate link for each
/// road link a bus lane feature is matched onto.
pub struct LaneSynthesizer {
    pub matching: MatchingConfiguration,
    pub fallback: FallbackPolicy,
    pub base_modes: Vec<String>,
    pub lane_mode: String,
    pub lane_suffix: String,
    pub lane_capacity: f64,
    pub lane_permlanes: f64,
    pub parallelize: bool,
}

impl From<&BeelineConfiguration> for LaneSynthesizer {
    fn from(conf: &BeelineConfiguration) -> Self {
        LaneSynthesizer {
            matching: conf.matching.clone(),
            fallback: conf.feature_fallback,
            base_modes: conf.base_modes.clone(),
            lane_mode: conf.lane_mode.clone(),
            lane_suffix: conf.lane_suffix.clone(),
            lane_capacity: conf.lane_capacity,
            lane_permlanes: conf.lane_permlanes,
            parallelize: conf.parallelize,
        }
    }
}

impl LaneSynthesizer {
    /// classifies the features, matches the bus lane features onto the links
    /// of `network` that allow a base mode, and adds a duplicate of every
    /// matched link.
    ///
    /// matching is done in parallel. duplicates are then added in link id
    /// order, so identifiers do not depend on thread scheduling. a feature
    /// that fails to match is reported in [`LaneSynthesis::failures`].
    pub fn run(&self, network: &Network, features: &[Feature]) -> Result<LaneSynthesis, LaneError> {
        let bus_lanes = features
            .iter()
            .filter(|f| is_bus_lane(&f.tags))
            .collect::<Vec<_>>();
        log::info!(
            "{} of {} features carry a bus lane",
            bus_lanes.len(),
            features.len()
        );

        let base = network.filter_by_modes(&self.base_modes);
        let index = LinkSpatialIndex::new(&base)?;
        let matcher = FeatureMatcher::new(&base, &index, &self.matching, self.fallback);

        let bar = progress::shared_bar(bus_lanes.len(), "bus lane matching")
            .map_err(LaneError::ProgressBar)?;
        let match_one = |feature: &&Feature| {
            let result = matcher.match_feature(feature);
            progress::tick(&bar);
            (feature.id.clone(), result)
        };
        let results = if self.parallelize {
            bus_lanes.par_iter().map(match_one).collect::<Vec<_>>()
        } else {
            bus_lanes.iter().map(match_one).collect::<Vec<_>>()
        };

        let mut matched = BTreeMap::new();
        let mut failures = vec![];
        for (feature_id, result) in results {
            match result {
                Ok(links) => {
                    matched.insert(feature_id, links);
                }
                Err(e) => {
                    log::warn!("bus lane feature '{feature_id}' not matched: {e}");
                    failures.push((feature_id, e));
                }
            }
        }

        let lane_links = matched.values().flatten().collect::<BTreeSet<_>>();
        let mut out = network.clone();
        let mut builder = LinkSubstitutionBuilder::new();
        for link_id in lane_links {
            if builder.contains(link_id) {
                continue;
            }
            let original = network.get_link_or_err(link_id)?;
            let duplicate_id = self.add_duplicate(&mut out, original)?;
            builder.insert(link_id.clone(), duplicate_id);
        }
        let substitutions = builder.build();
        log::info!(
            "added {} bus lane links, {} features failed to match",
            substitutions.len(),
            failures.len()
        );

        Ok(LaneSynthesis {
            network: out,
            substitutions,
            matched,
            failures,
        })
    }

    /// inserts the lane duplicate of `original`, choosing the first free
    /// identifier `{original}{suffix}{n}` for n = 0, 1, ...
    fn add_duplicate(&self, network: &mut Network, original: &Link) -> Result<LinkId, LaneError> {
        let mut n: usize = 0;
        loop {
            let candidate = LinkId(format!("{}{}{}", original.id, self.lane_suffix, n));
            let duplicate = Link {
                id: candidate.clone(),
                from: original.from.clone(),
                to: original.to.clone(),
                length: original.length,
                freespeed: original.freespeed,
                capacity: self.lane_capacity,
                permlanes: self.lane_permlanes,
                modes: BTreeSet::from([self.lane_mode.clone()]),
                link_type: original.link_type.clone(),
            };
            match network.add_link(duplicate) {
                Ok(()) => return Ok(candidate),
                Err(NetworkError::DuplicateLinkCollision(taken)) => {
                    log::debug!("lane id '{taken}' is taken, incrementing suffix");
                    n += 1;
                }
                Err(e) => return Err(LaneError::NetworkError(e)),
            }
        }
    }
}
