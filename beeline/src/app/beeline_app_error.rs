use crate::algorithm::{
    lanes::LaneError,
    matching::MatchError,
    rebase::RebaseError,
};
use crate::io::IoError;
use beeline_core::model::{network::NetworkError, schedule::ScheduleError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BeelineAppError {
    #[error("failure reading run configuration: {0}")]
    ConfigurationError(String),
    #[error("{source}")]
    IoError {
        #[from]
        source: IoError,
    },
    #[error("invalid network: {source}")]
    NetworkError {
        #[from]
        source: NetworkError,
    },
    #[error("invalid schedule: {source}")]
    ScheduleError {
        #[from]
        source: ScheduleError,
    },
    #[error("failure matching onto the network: {source}")]
    MatchError {
        #[from]
        source: MatchError,
    },
    #[error("failure rebasing schedule: {source}")]
    RebaseError {
        #[from]
        source: RebaseError,
    },
    #[error("failure synthesizing bus lanes: {source}")]
    LaneError {
        #[from]
        source: LaneError,
    },
    #[error("{count} routes could not be rewired (first: {first}); rerun with --drop-disconnected-routes to write the schedule without them")]
    RewiringFailed { count: usize, first: RebaseError },
}
