mod beeline_app;
mod beeline_app_error;
pub mod pipelines;

pub use beeline_app::{run, App, BeelineAppArguments};
pub use beeline_app_error::BeelineAppError;
