use super::NodeId;
use geo::Coord;
use serde::{Deserialize, Serialize};

/// a network vertex. nodes are never modified after creation; a network
/// that needs a different node creates a new one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub x: f64,
    pub y: f64,
}

impl Node {
    pub fn new(id: NodeId, x: f64, y: f64) -> Node {
        Node { id, x, y }
    }

    pub fn coord(&self) -> Coord<f64> {
        Coord {
            x: self.x,
            y: self.y,
        }
    }
}
