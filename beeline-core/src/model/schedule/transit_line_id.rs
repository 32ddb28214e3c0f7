use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Debug, Default, Clone, Eq, PartialEq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct TransitLineId(pub String);

impl TransitLineId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for TransitLineId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TransitLineId {
    fn from(value: &str) -> Self {
        TransitLineId(String::from(value))
    }
}
