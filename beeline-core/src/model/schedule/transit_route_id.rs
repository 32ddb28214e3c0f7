use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Debug, Default, Clone, Eq, PartialEq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct TransitRouteId(pub String);

impl TransitRouteId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for TransitRouteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TransitRouteId {
    fn from(value: &str) -> Self {
        TransitRouteId(String::from(value))
    }
}
