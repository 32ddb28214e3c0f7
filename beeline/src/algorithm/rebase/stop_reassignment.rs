use super::{
    line_usage, LineUsage, ReassignmentMethod, ReassignmentOutcome, RebaseError,
};
use crate::algorithm::matching::MatchError;
use crate::algorithm::progress;
use crate::algorithm::scoring::CandidateScorer;
use crate::config::{BeelineConfiguration, FallbackPolicy, LineNamePolicy};
use beeline_core::{
    geometry,
    model::{
        network::{LinkId, Network},
        schedule::{StopFacility, StopFacilityId, TransitSchedule},
    },
    spatial::LinkSpatialIndex,
};
use rayon::prelude::*;
use std::collections::{BTreeMap, BTreeSet};

/// the facility table of a schedule after its stops were moved onto a new
/// network, with one outcome per reassigned facility.
#[derive(Debug, Clone)]
pub struct StopReassignmentResult {
    pub facilities: BTreeMap<StopFacilityId, StopFacility>,
    pub outcomes: Vec<ReassignmentOutcome>,
}

/// moves stop facilities onto the links of a target network that are used by
/// the same transit lines.
pub struct StopReassignment {
    pub search_radius: f64,
    pub max_angle_degrees: f64,
    pub fallback: FallbackPolicy,
    pub usage_modes: Vec<String>,
    pub line_names: LineNamePolicy,
    pub parallelize: bool,
}

impl From<&BeelineConfiguration> for StopReassignment {
    fn from(conf: &BeelineConfiguration) -> Self {
        StopReassignment {
            search_radius: conf.stop_search_radius,
            max_angle_degrees: conf.stop_max_angle_degrees,
            fallback: conf.stop_fallback,
            usage_modes: conf.usage_modes.clone(),
            line_names: conf.schedule_line_names.clone(),
            parallelize: conf.parallelize,
        }
    }
}

/// per-facility inputs, borrowed by every worker
struct ReassignmentContext<'a> {
    source_network: &'a Network,
    target_network: &'a Network,
    index: &'a LinkSpatialIndex,
    usage: &'a LineUsage,
    scorer: CandidateScorer,
}

impl StopReassignment {
    /// computes a new facility table for `schedule`.
    ///
    /// only facilities served by a route of one of the usage modes are moved;
    /// every other facility is carried over unchanged. each moved facility is
    /// replaced by a new record with the same id bound to the chosen link.
    ///
    /// # Arguments
    ///
    /// * `schedule` - schedule whose facilities reference `source_network`
    /// * `source_network` - network the facilities' current links belong to
    /// * `target_network` - network to move the facilities onto
    /// * `index` - spatial index of `target_network`
    /// * `usage` - lines known to use each link of `target_network`
    pub fn run(
        &self,
        schedule: &TransitSchedule,
        source_network: &Network,
        target_network: &Network,
        index: &LinkSpatialIndex,
        usage: &LineUsage,
    ) -> Result<StopReassignmentResult, RebaseError> {
        let facility_lines =
            line_usage::facility_lines(schedule, &self.usage_modes, &self.line_names);
        let work = facility_lines
            .iter()
            .filter_map(|(id, lines)| schedule.get_facility(id).map(|f| (f, lines)))
            .collect::<Vec<_>>();
        log::info!(
            "reassigning {} of {} stop facilities",
            work.len(),
            schedule.facilities().len()
        );

        let ctx = ReassignmentContext {
            source_network,
            target_network,
            index,
            usage,
            scorer: CandidateScorer::new(self.search_radius, self.max_angle_degrees),
        };
        let bar = progress::shared_bar(work.len(), "stop reassignment")
            .map_err(RebaseError::ProgressBar)?;
        let reassign = |(facility, lines): &(&StopFacility, &BTreeSet<String>)| {
            let outcome = self.reassign(&ctx, facility, lines);
            progress::tick(&bar);
            outcome
        };
        let outcomes = if self.parallelize {
            work.par_iter().map(reassign).collect::<Vec<_>>()
        } else {
            work.iter().map(reassign).collect::<Vec<_>>()
        };

        let mut facilities = schedule.facilities().clone();
        for outcome in outcomes.iter() {
            if outcome.method == ReassignmentMethod::Unchanged {
                continue;
            }
            if let Some(original) = schedule.get_facility(&outcome.facility) {
                facilities.insert(
                    outcome.facility.clone(),
                    original.anchored_on(outcome.link.clone()),
                );
            }
        }
        let n_degraded = outcomes.iter().filter(|o| o.is_degraded()).count();
        if n_degraded > 0 {
            log::warn!("{n_degraded} stop facilities have no link used by their lines");
        }
        Ok(StopReassignmentResult {
            facilities,
            outcomes,
        })
    }

    fn reassign(
        &self,
        ctx: &ReassignmentContext,
        facility: &StopFacility,
        lines: &BTreeSet<String>,
    ) -> ReassignmentOutcome {
        let coord = facility.coord();
        let outcome = |link: LinkId, method, error| ReassignmentOutcome {
            facility: facility.id.clone(),
            original_link: facility.link.clone(),
            link,
            method,
            error,
        };

        let survivors = ctx
            .index
            .within(coord, self.search_radius)
            .into_iter()
            .filter(|link_id| ctx.usage.is_used_by_any(link_id, lines))
            .collect::<Vec<_>>();

        if survivors.is_empty() {
            let nearest = match self.fallback {
                FallbackPolicy::Lenient => ctx.index.nearest(coord),
                FallbackPolicy::Strict => None,
            };
            return match nearest {
                Some(link_id) => {
                    log::debug!(
                        "facility '{}' has no link used by its lines, using nearest link '{link_id}'",
                        facility.id
                    );
                    outcome(link_id.clone(), ReassignmentMethod::UnfilteredNearest, None)
                }
                None => {
                    let error = MatchError::NoMatchFound {
                        record: facility.id.to_string(),
                        radius: self.search_radius,
                    };
                    outcome(facility.link.clone(), ReassignmentMethod::Unchanged, Some(error))
                }
            };
        }

        let direction = ctx
            .source_network
            .link_line_by_id(&facility.link)
            .ok()
            .map(|line| geometry::line_direction(&line));
        let scored = direction.and_then(|d| {
            ctx.scorer
                .best(ctx.target_network, d, coord, survivors.iter().copied())
        });
        match scored {
            Some(best) => outcome(best.link_id, ReassignmentMethod::Scored, None),
            None => {
                let nearest = nearest_survivor(ctx.target_network, coord, &survivors)
                    .unwrap_or(survivors[0]);
                outcome(nearest.clone(), ReassignmentMethod::NearestSurvivor, None)
            }
        }
    }
}

/// the survivor closest to `coord`, ties to the lowest id. survivors are
/// already sorted by id.
fn nearest_survivor<'a>(
    network: &Network,
    coord: geo::Coord<f64>,
    survivors: &[&'a LinkId],
) -> Option<&'a LinkId> {
    let mut best: Option<(&LinkId, f64)> = None;
    for link_id in survivors.iter().copied() {
        let Ok(line) = network.link_line_by_id(link_id) else {
            continue;
        };
        let distance = geometry::perpendicular_distance(coord, &line);
        match best {
            Some((_, d)) if d <= distance => {}
            _ => best = Some((link_id, distance)),
        }
    }
    best.map(|(link_id, _)| link_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::rebase::test_fixtures;

    fn run_default(
        reassignment: &StopReassignment,
        schedule: &TransitSchedule,
        source: &Network,
        target: &Network,
    ) -> StopReassignmentResult {
        let index = LinkSpatialIndex::new(target).unwrap();
        let usage =
            LineUsage::from_schedule(&target_usage_schedule(), &["bus"], &LineNamePolicy::Identity);
        reassignment
            .run(schedule, source, target, &index, &usage)
            .unwrap()
    }

    /// L1 along the eastbound links of the target road, L2 on ab only
    fn target_usage_schedule() -> TransitSchedule {
        let mut schedule = TransitSchedule::new();
        schedule
            .add_facility(test_fixtures::facility("t1", 50.0, 3.0, "ab"))
            .unwrap();
        let l1 = test_fixtures::line(
            "L1",
            vec![test_fixtures::route("r", "bus", &["ab", "bc", "cd"], &["t1"])],
        );
        let l2 = test_fixtures::line(
            "L2",
            vec![test_fixtures::route("r", "bus", &["ab"], &["t1"])],
        );
        schedule.add_line(l1).unwrap();
        schedule.add_line(l2).unwrap();
        schedule
    }

    fn reassignment(fallback: FallbackPolicy) -> StopReassignment {
        let mut conf = BeelineConfiguration::default();
        conf.stop_fallback = fallback;
        conf.schedule_line_names = LineNamePolicy::Identity;
        conf.parallelize = false;
        StopReassignment::from(&conf)
    }

    fn link_of(result: &StopReassignmentResult, facility: &str) -> LinkId {
        result
            .facilities
            .get(&StopFacilityId::from(facility))
            .map(|f| f.link.clone())
            .unwrap()
    }

    #[test]
    fn test_stops_move_to_used_links() {
        let schedule = test_fixtures::create_schedule();
        let source = test_fixtures::create_source_network();
        let target = test_fixtures::create_target_network();
        let result = run_default(
            &reassignment(FallbackPolicy::Lenient),
            &schedule,
            &source,
            &target,
        );
        assert_eq!(link_of(&result, "s1"), LinkId::from("ab"));
        assert_eq!(link_of(&result, "s2"), LinkId::from("bc"));
        assert_eq!(link_of(&result, "s3"), LinkId::from("cd"));
        // tram stop is not reassigned
        assert_eq!(link_of(&result, "s4"), LinkId::from("old_cd"));
        assert_eq!(result.outcomes.len(), 3);
        assert!(result
            .outcomes
            .iter()
            .all(|o| o.method == ReassignmentMethod::Scored));
        assert_eq!(result.facilities.len(), schedule.facilities().len());
    }

    #[test]
    fn test_unused_stop_falls_back_to_nearest() {
        // a westbound bus line whose links nobody on the target network uses
        let mut schedule = test_fixtures::create_schedule();
        schedule
            .add_facility(test_fixtures::facility("s5", 140.0, -2.0, "old_cb"))
            .unwrap();
        schedule
            .add_line(test_fixtures::line(
                "W1",
                vec![test_fixtures::route("r", "bus", &["old_cb"], &["s5"])],
            ))
            .unwrap();
        let source = test_fixtures::create_source_network();
        let target = test_fixtures::create_target_network();

        let lenient = run_default(
            &reassignment(FallbackPolicy::Lenient),
            &schedule,
            &source,
            &target,
        );
        let s5 = lenient
            .outcomes
            .iter()
            .find(|o| o.facility == StopFacilityId::from("s5"))
            .unwrap();
        assert_eq!(s5.method, ReassignmentMethod::UnfilteredNearest);
        assert!(target.contains_link(&s5.link));
        assert!(s5.is_degraded());

        let strict = run_default(
            &reassignment(FallbackPolicy::Strict),
            &schedule,
            &source,
            &target,
        );
        let s5 = strict
            .outcomes
            .iter()
            .find(|o| o.facility == StopFacilityId::from("s5"))
            .unwrap();
        assert_eq!(s5.method, ReassignmentMethod::Unchanged);
        assert!(matches!(s5.error, Some(MatchError::NoMatchFound { .. })));
        assert_eq!(link_of(&strict, "s5"), LinkId::from("old_cb"));
    }

    #[test]
    fn test_reassignment_is_idempotent() {
        let schedule = test_fixtures::create_schedule();
        let source = test_fixtures::create_source_network();
        let target = test_fixtures::create_target_network();
        let reassignment = reassignment(FallbackPolicy::Lenient);
        let first = run_default(&reassignment, &schedule, &source, &target);
        let rebased = schedule.with_facilities(first.facilities.clone()).unwrap();
        let second = run_default(&reassignment, &rebased, &target, &target);
        assert_eq!(first.facilities, second.facilities);
    }

    #[test]
    fn test_unknown_original_link_takes_nearest_survivor() {
        let mut schedule = TransitSchedule::new();
        schedule
            .add_facility(test_fixtures::facility("s", 160.0, 4.0, "gone"))
            .unwrap();
        schedule
            .add_line(test_fixtures::line(
                "L1",
                vec![test_fixtures::route("r", "bus", &["gone"], &["s"])],
            ))
            .unwrap();
        let source = test_fixtures::create_source_network();
        let target = test_fixtures::create_target_network();
        let result = run_default(
            &reassignment(FallbackPolicy::Lenient),
            &schedule,
            &source,
            &target,
        );
        assert_eq!(result.outcomes[0].method, ReassignmentMethod::NearestSurvivor);
        assert_eq!(link_of(&result, "s"), LinkId::from("bc"));
    }
}
