use super::LinkSegment;
use crate::model::network::{LinkId, Network, NetworkError};
use geo::Coord;
use itertools::Itertools;
use rstar::{PointDistance, RTree};

/// R-tree over the link segments of one network. built once, read-only
/// afterwards, and safe to share between worker threads.
pub struct LinkSpatialIndex {
    rtree: RTree<LinkSegment>,
}

impl LinkSpatialIndex {
    pub fn new(network: &Network) -> Result<LinkSpatialIndex, NetworkError> {
        let segments = network
            .links()
            .map(|link| {
                let line = network.link_line(link)?;
                Ok(LinkSegment::new(link.id.clone(), line))
            })
            .collect::<Result<Vec<_>, NetworkError>>()?;
        log::debug!("bulk loading spatial index with {} links", segments.len());
        let rtree = RTree::bulk_load(segments);
        Ok(LinkSpatialIndex { rtree })
    }

    pub fn len(&self) -> usize {
        self.rtree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.rtree.size() == 0
    }

    /// the link closest to `point`. when several links are equally close, the
    /// lowest [`LinkId`] is returned so that results do not depend on tree layout.
    ///
    /// # Returns
    ///
    /// `None` only if the index is empty.
    pub fn nearest(&self, point: Coord<f64>) -> Option<&LinkId> {
        let query = [point.x, point.y];
        let closest = self.rtree.nearest_neighbor(&query)?;
        let min_distance_2 = closest.distance_2(&query);
        let best = self
            .rtree
            .locate_within_distance(query, min_distance_2)
            .map(|segment| &segment.link_id)
            .fold(&closest.link_id, |best, id| if id < best { id } else { best });
        Some(best)
    }

    /// all links whose segment intersects the closed disk of `radius` around
    /// `point`, in identifier order.
    pub fn within(&self, point: Coord<f64>, radius: f64) -> Vec<&LinkId> {
        let query = [point.x, point.y];
        self.rtree
            .locate_within_distance(query, radius * radius)
            .map(|segment| &segment.link_id)
            .sorted()
            .collect_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::network::{Link, Node, NodeId};
    use std::collections::BTreeSet;

    fn c(x: f64, y: f64) -> Coord<f64> {
        Coord { x, y }
    }

    fn create_grid_network() -> Network {
        // a 3x3 grid of nodes 100 units apart with links in both directions
        // along each row
        let mut network = Network::new();
        for i in 0..3 {
            for j in 0..3 {
                let id = NodeId(format!("{i}_{j}"));
                network
                    .add_node(Node::new(id, i as f64 * 100.0, j as f64 * 100.0))
                    .unwrap();
            }
        }
        for j in 0..3 {
            for i in 0..2 {
                for (a, b) in [(i, i + 1), (i + 1, i)] {
                    let link = Link {
                        id: LinkId(format!("{a}_{j}-{b}_{j}")),
                        from: NodeId(format!("{a}_{j}")),
                        to: NodeId(format!("{b}_{j}")),
                        length: 100.0,
                        freespeed: 10.0,
                        capacity: 1000.0,
                        permlanes: 1.0,
                        modes: BTreeSet::from([String::from("car")]),
                        link_type: None,
                    };
                    network.add_link(link).unwrap();
                }
            }
        }
        network
    }

    #[test]
    fn test_nearest_breaks_ties_by_lowest_id() {
        let network = create_grid_network();
        let index = LinkSpatialIndex::new(&network).unwrap();
        assert_eq!(index.len(), 12);
        // both directions of the same segment are equally close
        let nearest = index.nearest(c(50.0, 10.0)).unwrap();
        assert_eq!(nearest, &LinkId::from("0_0-1_0"));
        let nearest = index.nearest(c(150.0, 190.0)).unwrap();
        assert_eq!(nearest, &LinkId::from("1_2-2_2"));
    }

    #[test]
    fn test_within_matches_linear_scan() {
        let network = create_grid_network();
        let index = LinkSpatialIndex::new(&network).unwrap();
        let query = c(120.0, 60.0);
        let radius = 45.0;
        let found = index.within(query, radius);
        let expected = network
            .links()
            .filter(|l| {
                let line = network.link_line(l).unwrap();
                crate::geometry::perpendicular_distance(query, &line) <= radius
            })
            .map(|l| &l.id)
            .collect_vec();
        assert_eq!(found, expected);
        assert_eq!(found.len(), 4);
    }

    #[test]
    fn test_empty_index() {
        let index = LinkSpatialIndex::new(&Network::new()).unwrap();
        assert!(index.is_empty());
        assert!(index.nearest(c(0.0, 0.0)).is_none());
        assert!(index.within(c(0.0, 0.0), 100.0).is_empty());
    }
}
