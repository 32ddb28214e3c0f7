use super::{StopFacilityId, TransitLineId, TransitRouteId};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScheduleError {
    #[error("route '{route}' references stop facility '{facility}' which is not in the schedule")]
    MissingFacility {
        route: TransitRouteId,
        facility: StopFacilityId,
    },
    #[error("stop facility '{0}' already exists in the schedule")]
    DuplicateFacility(StopFacilityId),
    #[error("transit line '{0}' already exists in the schedule")]
    DuplicateLine(TransitLineId),
    #[error("transit line '{line}' has more than one route with id '{route}'")]
    DuplicateRoute {
        line: TransitLineId,
        route: TransitRouteId,
    },
}
