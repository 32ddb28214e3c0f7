use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// identifier of an externally sourced feature, such as an OSM way id.
#[derive(Debug, Default, Clone, Eq, PartialEq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct FeatureId(pub String);

impl FeatureId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for FeatureId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for FeatureId {
    fn from(value: &str) -> Self {
        FeatureId(String::from(value))
    }
}
