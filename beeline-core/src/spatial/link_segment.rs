use crate::geometry;
use crate::model::network::LinkId;
use geo::{Coord, Line};
use rstar::{PointDistance, RTreeObject, AABB};

/// R-tree entry for one directed link, stored as its straight segment.
#[derive(Debug, Clone)]
pub struct LinkSegment {
    pub link_id: LinkId,
    pub line: Line<f64>,
    aabb: AABB<[f64; 2]>,
}

impl LinkSegment {
    pub fn new(link_id: LinkId, line: Line<f64>) -> LinkSegment {
        let aabb = AABB::from_corners(
            [line.start.x, line.start.y],
            [line.end.x, line.end.y],
        );
        LinkSegment {
            link_id,
            line,
            aabb,
        }
    }
}

impl RTreeObject for LinkSegment {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        self.aabb
    }
}

impl PointDistance for LinkSegment {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let p = Coord {
            x: point[0],
            y: point[1],
        };
        geometry::distance_2(p, &self.line)
    }
}
