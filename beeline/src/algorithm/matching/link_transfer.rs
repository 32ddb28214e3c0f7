use super::{MatchError, MatchMethod, SegmentMatch};
use crate::algorithm::scoring::CandidateScorer;
use crate::config::{FallbackPolicy, TransferConfiguration};
use beeline_core::{
    geometry::{self, GeometryError},
    model::network::{LinkId, Network},
    spatial::LinkSpatialIndex,
};

/// only the orientation of a transferred link is compared, any angle short of
/// perpendicular passes the scorer and candidates are ranked by similarity.
const PERPENDICULAR_DEGREES: f64 = 90.0;

/// moves links of another network version onto a target network.
///
/// unlike [`super::FeatureMatcher`] there are no distance or angle thresholds:
/// the nearest link wins when it points the same way, otherwise the link
/// within the search radius that points most nearly the same way.
pub struct LinkTransfer<'a> {
    network: &'a Network,
    index: &'a LinkSpatialIndex,
    scorer: CandidateScorer,
    search_radius: f64,
    fallback: FallbackPolicy,
}

impl<'a> LinkTransfer<'a> {
    pub fn new(
        network: &'a Network,
        index: &'a LinkSpatialIndex,
        conf: &TransferConfiguration,
    ) -> LinkTransfer<'a> {
        LinkTransfer {
            network,
            index,
            scorer: CandidateScorer::new(conf.search_radius, PERPENDICULAR_DEGREES),
            search_radius: conf.search_radius,
            fallback: conf.fallback,
        }
    }

    /// the target link for `link_id` of `source_network`, matched at the
    /// midpoint of the source link.
    ///
    /// # Returns
    ///
    /// the nearest link if its similarity to the source link is positive,
    /// else the candidate with the highest positive similarity within the
    /// search radius. when there is none, a lenient policy takes the nearest
    /// link and a strict one returns [`MatchError::NoMatchFound`].
    pub fn transfer(
        &self,
        link_id: &LinkId,
        source_network: &Network,
    ) -> Result<SegmentMatch, MatchError> {
        let record = link_id.as_str();
        let line = source_network.link_line_by_id(link_id)?;
        let direction = geometry::line_direction(&line);
        if geometry::norm(direction) < geometry::MIN_VECTOR_LENGTH {
            return Err(MatchError::DegenerateGeometry {
                record: String::from(record),
                source: GeometryError::DegenerateGeometry(format!(
                    "link '{record}' has zero length"
                )),
            });
        }
        let midpoint = geometry::midpoint(line.start, line.end);
        let nearest = self
            .index
            .nearest(midpoint)
            .ok_or_else(|| MatchError::EmptyIndex(String::from(record)))?;

        let nearest_line = self.network.link_line_by_id(nearest)?;
        let similarity =
            geometry::normalized_similarity(direction, geometry::line_direction(&nearest_line));
        if matches!(similarity, Ok(s) if s > 0.0) {
            return Ok(SegmentMatch::new(nearest.clone(), MatchMethod::Nearest));
        }

        let candidates = self.index.within(midpoint, self.search_radius);
        let best = self
            .scorer
            .best(self.network, direction, midpoint, candidates)
            .filter(|scored| scored.similarity > 0.0);
        if let Some(best) = best {
            return Ok(SegmentMatch::new(best.link_id, MatchMethod::Scored));
        }

        match self.fallback {
            FallbackPolicy::Lenient => {
                log::debug!("no link near '{record}' points the same way, using '{nearest}'");
                Ok(SegmentMatch::new(nearest.clone(), MatchMethod::Fallback))
            }
            FallbackPolicy::Strict => Err(MatchError::NoMatchFound {
                record: String::from(record),
                radius: self.search_radius,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use beeline_core::model::network::{Link, Node, NodeId};
    use std::collections::BTreeSet;

    fn link(id: &str, from: &str, to: &str) -> Link {
        Link {
            id: LinkId::from(id),
            from: NodeId::from(from),
            to: NodeId::from(to),
            length: 100.0,
            freespeed: 13.9,
            capacity: 600.0,
            permlanes: 1.0,
            modes: BTreeSet::from([String::from("car"), String::from("bus")]),
            link_type: None,
        }
    }

    /// a straight two-way road a - b - c - d along the x axis
    fn create_road() -> Network {
        let mut network = Network::new();
        for (id, x) in [("a", 0.0), ("b", 100.0), ("c", 200.0), ("d", 300.0)] {
            network.add_node(Node::new(NodeId::from(id), x, 0.0)).unwrap();
        }
        for (from, to) in [("a", "b"), ("b", "c"), ("c", "d")] {
            network
                .add_link(link(&format!("{from}{to}"), from, to))
                .unwrap();
            network
                .add_link(link(&format!("{to}{from}"), to, from))
                .unwrap();
        }
        network
    }

    /// a single link of another network version, from `start` to `end`
    fn create_source(id: &str, start: (f64, f64), end: (f64, f64)) -> Network {
        let mut source = Network::new();
        source
            .add_node(Node::new(NodeId::from("p"), start.0, start.1))
            .unwrap();
        source
            .add_node(Node::new(NodeId::from("q"), end.0, end.1))
            .unwrap();
        source.add_link(link(id, "p", "q")).unwrap();
        source
    }

    #[test]
    fn test_offset_link_finds_same_direction() {
        // the westbound stop link sits 12 units off the road, where bc and cb
        // are equally near and the lower id bc points east
        let road = create_road();
        let index = LinkSpatialIndex::new(&road).unwrap();
        let conf = TransferConfiguration::default();
        let transfer = LinkTransfer::new(&road, &index, &conf);
        let source = create_source("stop_w", (180.0, 12.0), (120.0, 12.0));
        let result = transfer.transfer(&LinkId::from("stop_w"), &source).unwrap();
        assert_eq!(result.link_id, LinkId::from("cb"));
        assert_eq!(result.method, MatchMethod::Scored);

        let source = create_source("stop_e", (120.0, 12.0), (180.0, 12.0));
        let result = transfer.transfer(&LinkId::from("stop_e"), &source).unwrap();
        assert_eq!(result.link_id, LinkId::from("bc"));
        assert_eq!(result.method, MatchMethod::Nearest);
    }

    #[test]
    fn test_no_same_direction_link() {
        // a northbound link crossing the road has no candidate with positive similarity
        let road = create_road();
        let index = LinkSpatialIndex::new(&road).unwrap();
        let source = create_source("north", (150.0, -30.0), (150.0, 30.0));

        let lenient = TransferConfiguration::default();
        let result = LinkTransfer::new(&road, &index, &lenient)
            .transfer(&LinkId::from("north"), &source)
            .unwrap();
        assert_eq!(result.link_id, LinkId::from("bc"));
        assert_eq!(result.method, MatchMethod::Fallback);

        let strict = TransferConfiguration {
            fallback: FallbackPolicy::Strict,
            ..TransferConfiguration::default()
        };
        let result =
            LinkTransfer::new(&road, &index, &strict).transfer(&LinkId::from("north"), &source);
        assert!(matches!(result, Err(MatchError::NoMatchFound { .. })));
    }

    #[test]
    fn test_unknown_and_degenerate_links() {
        let road = create_road();
        let index = LinkSpatialIndex::new(&road).unwrap();
        let conf = TransferConfiguration::default();
        let transfer = LinkTransfer::new(&road, &index, &conf);

        let source = create_source("old", (98.0, 2.0), (2.0, 2.0));
        let missing = transfer.transfer(&LinkId::from("nope"), &source);
        assert!(matches!(missing, Err(MatchError::NetworkError(_))));

        let dot = create_source("dot", (50.0, 5.0), (50.0, 5.0));
        let result = transfer.transfer(&LinkId::from("dot"), &dot);
        assert!(matches!(result, Err(MatchError::DegenerateGeometry { .. })));
    }
}
