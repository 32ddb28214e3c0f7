use crate::algorithm::matching::MatchError;
use beeline_core::model::{
    network::{LinkId, NetworkError},
    schedule::{ScheduleError, TransitLineId, TransitRouteId},
};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RebaseError {
    #[error("route '{route}' of line '{line}' is disconnected at position {position}: '{prev}' does not lead into '{next}'")]
    DisconnectedRoute {
        line: TransitLineId,
        route: TransitRouteId,
        position: usize,
        prev: LinkId,
        next: LinkId,
    },
    #[error("route '{route}' of line '{line}' uses link '{link}' which is not in the network")]
    UnknownRouteLink {
        line: TransitLineId,
        route: TransitRouteId,
        link: LinkId,
    },
    #[error("failure building progress bar: {0}")]
    ProgressBar(String),
    #[error(transparent)]
    ScheduleError(#[from] ScheduleError),
    #[error(transparent)]
    NetworkError(#[from] NetworkError),
    #[error(transparent)]
    MatchError(#[from] MatchError),
}
