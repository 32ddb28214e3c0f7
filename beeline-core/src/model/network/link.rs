use super::{LinkId, NodeId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// a directed network edge between two nodes.
///
/// geometry is not stored on the link: the segment is always the straight
/// line between the coordinates of `from` and `to` as found in the owning
/// [`super::Network`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub id: LinkId,
    pub from: NodeId,
    pub to: NodeId,
    pub length: f64,
    pub freespeed: f64,
    pub capacity: f64,
    #[serde(default = "default_permlanes")]
    pub permlanes: f64,
    pub modes: BTreeSet<String>,
    /// road classification (e.g. "motorway", "residential"), if known
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub link_type: Option<String>,
}

impl Link {
    pub fn allows_mode(&self, mode: &str) -> bool {
        self.modes.contains(mode)
    }

    /// true if any of the given modes may travel on this link
    pub fn allows_any_mode<S: AsRef<str>>(&self, modes: &[S]) -> bool {
        modes.iter().any(|m| self.allows_mode(m.as_ref()))
    }

    /// true if the link's type tag contains the (case-insensitive) pattern
    pub fn has_type_like(&self, pattern: &str) -> bool {
        let pattern = pattern.to_lowercase();
        self.link_type
            .as_ref()
            .map(|t| t.to_lowercase().contains(&pattern))
            .unwrap_or_default()
    }
}

fn default_permlanes() -> f64 {
    1.0
}
