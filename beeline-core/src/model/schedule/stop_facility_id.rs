use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Debug, Default, Clone, Eq, PartialEq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct StopFacilityId(pub String);

impl StopFacilityId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for StopFacilityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for StopFacilityId {
    fn from(value: &str) -> Self {
        StopFacilityId(String::from(value))
    }
}
