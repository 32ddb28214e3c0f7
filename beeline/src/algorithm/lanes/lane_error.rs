use beeline_core::model::network::NetworkError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LaneError {
    #[error("failure building progress bar: {0}")]
    ProgressBar(String),
    #[error("failure synthesizing bus lanes: {0}")]
    NetworkError(#[from] NetworkError),
}
