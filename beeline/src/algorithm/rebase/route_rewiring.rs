use super::RebaseError;
use crate::algorithm::lanes::LinkSubstitutionMap;
use beeline_core::model::{
    network::{LinkId, Network},
    schedule::{
        ScheduleError, StopFacility, StopFacilityId, TransitLine, TransitLineId, TransitRoute,
        TransitSchedule,
    },
};
use std::collections::BTreeMap;

/// a rewired schedule together with the routes that could not be rewired.
#[derive(Debug, Clone)]
pub struct RewiringOutcome {
    /// the schedule with the final facility table and every route that passed
    /// validation. lines left without routes are dropped.
    pub schedule: TransitSchedule,
    /// one error per route that failed validation
    pub failures: Vec<RebaseError>,
}

impl RewiringOutcome {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// rebuilds route paths after stops were reassigned and links substituted.
///
/// takes the finished facility table and substitution map by value and
/// reference respectively, so it can only run once both are final.
pub struct RouteRewiring {
    facilities: BTreeMap<StopFacilityId, StopFacility>,
}

impl RouteRewiring {
    pub fn new(facilities: BTreeMap<StopFacilityId, StopFacility>) -> RouteRewiring {
        RouteRewiring { facilities }
    }

    /// rewires every route of `schedule`.
    ///
    /// the first and last path links become the links of the first and last
    /// stop's facility. interior links are replaced through `substitutions`.
    /// a path of a single link becomes `[first]`, or `[first, last]` when the
    /// two stops sit on different links. each rewired path must be contiguous
    /// on `network`.
    ///
    /// # Errors
    ///
    /// only malformed input is returned as an error (a stop facility missing
    /// from the facility table). routes that fail validation are reported in
    /// [`RewiringOutcome::failures`].
    pub fn run(
        self,
        schedule: &TransitSchedule,
        substitutions: &LinkSubstitutionMap,
        network: &Network,
    ) -> Result<RewiringOutcome, RebaseError> {
        let mut lines = vec![];
        let mut failures = vec![];
        for line in schedule.lines().values() {
            let mut rewired = TransitLine::new(line.id.clone(), line.name.clone());
            for route in line.routes.values() {
                let path = self.rewire_path(route, substitutions)?;
                match validate_path(&line.id, route, &path, network) {
                    Ok(()) => {
                        rewired.routes.insert(route.id.clone(), route.with_links(path));
                    }
                    Err(e) => {
                        log::warn!("{e}");
                        failures.push(e);
                    }
                }
            }
            if rewired.routes.is_empty() && !line.routes.is_empty() {
                log::warn!("line '{}' has no valid routes left", line.id);
                continue;
            }
            lines.push(rewired);
        }
        let schedule = TransitSchedule::new()
            .with_facilities(self.facilities)?
            .with_lines(lines)?;
        log::info!(
            "rewired {} lines, {} routes failed validation",
            schedule.lines().len(),
            failures.len()
        );
        Ok(RewiringOutcome { schedule, failures })
    }

    fn rewire_path(
        &self,
        route: &TransitRoute,
        substitutions: &LinkSubstitutionMap,
    ) -> Result<Vec<LinkId>, ScheduleError> {
        let (first_stop, last_stop) = match (route.first_stop(), route.last_stop()) {
            (Some(first), Some(last)) => (first, last),
            _ => {
                return Ok(route
                    .links
                    .iter()
                    .map(|l| substitutions.resolve(l).clone())
                    .collect())
            }
        };
        let first = self.facility_link(route, &first_stop.facility)?;
        let last = self.facility_link(route, &last_stop.facility)?;

        let n = route.links.len();
        if n <= 1 {
            return if first == last {
                Ok(vec![first.clone()])
            } else {
                Ok(vec![first.clone(), last.clone()])
            };
        }
        let path = route
            .links
            .iter()
            .enumerate()
            .map(|(i, link_id)| match i {
                0 => first.clone(),
                i if i == n - 1 => last.clone(),
                _ => substitutions.resolve(link_id).clone(),
            })
            .collect();
        Ok(path)
    }

    fn facility_link(
        &self,
        route: &TransitRoute,
        facility_id: &StopFacilityId,
    ) -> Result<&LinkId, ScheduleError> {
        self.facilities
            .get(facility_id)
            .map(|f| &f.link)
            .ok_or_else(|| ScheduleError::MissingFacility {
                route: route.id.clone(),
                facility: facility_id.clone(),
            })
    }
}

/// confirms that every link of `path` is in the network and leads into the next.
fn validate_path(
    line: &TransitLineId,
    route: &TransitRoute,
    path: &[LinkId],
    network: &Network,
) -> Result<(), RebaseError> {
    for link_id in path.iter() {
        if !network.contains_link(link_id) {
            return Err(RebaseError::UnknownRouteLink {
                line: line.clone(),
                route: route.id.clone(),
                link: link_id.clone(),
            });
        }
    }
    for (position, pair) in path.windows(2).enumerate() {
        let (prev, next) = (&pair[0], &pair[1]);
        if !network.are_connected(prev, next)? {
            return Err(RebaseError::DisconnectedRoute {
                line: line.clone(),
                route: route.id.clone(),
                position,
                prev: prev.clone(),
                next: next.clone(),
            });
        }
    }
    Ok(())
}
