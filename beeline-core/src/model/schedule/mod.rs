mod departure;
mod schedule_error;
mod stop_facility;
mod stop_facility_id;
mod transit_line;
mod transit_line_id;
mod transit_route;
mod transit_route_id;
mod transit_route_stop;
mod transit_schedule;

pub use departure::Departure;
pub use schedule_error::ScheduleError;
pub use stop_facility::StopFacility;
pub use stop_facility_id::StopFacilityId;
pub use transit_line::{TransitLine, TransitLineSerializable};
pub use transit_line_id::TransitLineId;
pub use transit_route::TransitRoute;
pub use transit_route_id::TransitRouteId;
pub use transit_route_stop::TransitRouteStop;
pub use transit_schedule::{ScheduleSerializable, TransitSchedule};
