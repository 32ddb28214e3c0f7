use crate::algorithm::{
    matching::MatchError,
    rebase::{RebaseError, ReassignmentOutcome},
};
use beeline_core::model::{feature::FeatureId, network::LinkId, schedule::StopFacilityId};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchFailureRow {
    pub record: String,
    pub error: String,
}

impl From<&(FeatureId, MatchError)> for MatchFailureRow {
    fn from((feature_id, error): &(FeatureId, MatchError)) -> Self {
        MatchFailureRow {
            record: feature_id.to_string(),
            error: error.to_string(),
        }
    }
}

impl From<&RebaseError> for MatchFailureRow {
    fn from(error: &RebaseError) -> Self {
        let record = match error {
            RebaseError::DisconnectedRoute { line, route, .. }
            | RebaseError::UnknownRouteLink { line, route, .. } => format!("{line}/{route}"),
            _ => String::new(),
        };
        MatchFailureRow {
            record,
            error: error.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReassignmentRow {
    pub facility: StopFacilityId,
    pub original_link: LinkId,
    pub link: LinkId,
    pub method: String,
    pub error: Option<String>,
}

impl From<&ReassignmentOutcome> for ReassignmentRow {
    fn from(outcome: &ReassignmentOutcome) -> Self {
        ReassignmentRow {
            facility: outcome.facility.clone(),
            original_link: outcome.original_link.clone(),
            link: outcome.link.clone(),
            method: outcome.method.to_string(),
            error: outcome.error.as_ref().map(|e| e.to_string()),
        }
    }
}
