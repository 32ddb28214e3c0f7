use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// identifier of a directed network link. ordering is lexicographic and is the
/// tie-breaking order used wherever two links score equally.
#[derive(Debug, Default, Clone, Eq, PartialEq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct LinkId(pub String);

impl LinkId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for LinkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for LinkId {
    fn from(value: &str) -> Self {
        LinkId(String::from(value))
    }
}
