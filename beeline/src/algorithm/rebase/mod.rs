mod facility_reanchoring;
mod line_usage;
mod reassignment_outcome;
mod rebase_error;
mod route_rewiring;
mod stop_reassignment;
#[cfg(test)]
pub(crate) mod test_fixtures;

pub use facility_reanchoring::reassign_substituted_facilities;
pub use line_usage::{facility_lines, LineUsage};
pub use reassignment_outcome::{ReassignmentMethod, ReassignmentOutcome};
pub use rebase_error::RebaseError;
pub use route_rewiring::{RewiringOutcome, RouteRewiring};
pub use stop_reassignment::{StopReassignment, StopReassignmentResult};
