use super::FallbackPolicy;
use serde::{Deserialize, Serialize};

/// moving the stop links of a prepared schedule onto the road network.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct TransferConfiguration {
    /// radius searched for a link pointing the same way when the nearest one does not
    pub search_radius: f64,
    /// policy when no link within the radius points the same way
    pub fallback: FallbackPolicy,
}

impl Default for TransferConfiguration {
    fn default() -> Self {
        Self {
            search_radius: 100.0,
            fallback: FallbackPolicy::Lenient,
        }
    }
}
