use super::ScoredCandidate;
use crate::config::MatchingConfiguration;
use beeline_core::{
    geometry::{self, GeometryError},
    model::network::{LinkId, Network},
};
use geo::Coord;

/// absorbs floating point error when a value sits exactly on a threshold.
pub const BOUNDARY_TOLERANCE: f64 = 1e-9;

/// ranks candidate links against a reference direction and position.
///
/// a candidate is rejected when its distance to the reference point, or its
/// angle to the reference direction, reaches its threshold. boundaries are
/// exclusive: with the default 5 degree limit a link at exactly 5 degrees is
/// rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandidateScorer {
    pub max_perpendicular_distance: f64,
    pub max_angle_degrees: f64,
}

impl CandidateScorer {
    pub fn new(max_perpendicular_distance: f64, max_angle_degrees: f64) -> CandidateScorer {
        CandidateScorer {
            max_perpendicular_distance,
            max_angle_degrees,
        }
    }

    /// evaluates a single candidate.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(_))` if the candidate passes both thresholds
    /// * `Ok(None)` if it is rejected or not part of the network
    /// * `Err(DegenerateGeometry)` if the reference direction or the link has zero length
    pub fn score(
        &self,
        network: &Network,
        reference_direction: Coord<f64>,
        reference_point: Coord<f64>,
        link_id: &LinkId,
    ) -> Result<Option<ScoredCandidate>, GeometryError> {
        let line = match network.link_line_by_id(link_id) {
            Ok(line) => line,
            Err(e) => {
                log::warn!("skipping candidate: {e}");
                return Ok(None);
            }
        };
        let distance = geometry::perpendicular_distance(reference_point, &line);
        if exceeds(distance, self.max_perpendicular_distance) {
            return Ok(None);
        }
        let link_direction = geometry::line_direction(&line);
        let similarity = geometry::normalized_similarity(reference_direction, link_direction)?;
        let angle_degrees = geometry::angle_between_degrees(reference_direction, link_direction)?;
        if exceeds(angle_degrees, self.max_angle_degrees) {
            return Ok(None);
        }
        Ok(Some(ScoredCandidate {
            link_id: link_id.clone(),
            similarity,
            angle_degrees,
            distance,
        }))
    }

    /// the candidate with the highest directional similarity among those that
    /// pass the thresholds. ties go to the closer link, then to the lowest id.
    /// degenerate candidates are skipped.
    pub fn best<'a>(
        &self,
        network: &Network,
        reference_direction: Coord<f64>,
        reference_point: Coord<f64>,
        candidates: impl IntoIterator<Item = &'a LinkId>,
    ) -> Option<ScoredCandidate> {
        let mut best: Option<ScoredCandidate> = None;
        for link_id in candidates {
            let scored = match self.score(network, reference_direction, reference_point, link_id) {
                Ok(Some(scored)) => scored,
                Ok(None) => continue,
                Err(e) => {
                    log::debug!("candidate {link_id} not scored: {e}");
                    continue;
                }
            };
            match &best {
                Some(current) if !scored.beats(current) => {}
                _ => best = Some(scored),
            }
        }
        best
    }
}

impl From<&MatchingConfiguration> for CandidateScorer {
    fn from(conf: &MatchingConfiguration) -> Self {
        CandidateScorer::new(conf.max_perpendicular_distance, conf.max_angle_degrees)
    }
}

fn exceeds(value: f64, threshold: f64) -> bool {
    value + BOUNDARY_TOLERANCE >= threshold
}

#[cfg(test)]
mod tests {
    use super::*;
    use beeline_core::model::network::{Link, Node, NodeId};
    use std::collections::BTreeSet;

    fn c(x: f64, y: f64) -> Coord<f64> {
        Coord { x, y }
    }

    /// a fan of links leaving the origin at the given angles (degrees), each
    /// 100 units long, plus one zero-length link.
    fn create_fan_network(angles: &[f64]) -> Network {
        let mut network = Network::new();
        network
            .add_node(Node::new(NodeId::from("o"), 0.0, 0.0))
            .unwrap();
        for angle in angles {
            let rad = angle.to_radians();
            let node_id = NodeId(format!("n{angle}"));
            network
                .add_node(Node::new(node_id.clone(), 100.0 * rad.cos(), 100.0 * rad.sin()))
                .unwrap();
            network
                .add_link(test_link(&format!("l{angle}"), "o", node_id.as_str()))
                .unwrap();
        }
        network
            .add_link(test_link("degenerate", "o", "o"))
            .unwrap();
        network
    }

    fn test_link(id: &str, from: &str, to: &str) -> Link {
        Link {
            id: LinkId::from(id),
            from: NodeId::from(from),
            to: NodeId::from(to),
            length: 100.0,
            freespeed: 10.0,
            capacity: 1000.0,
            permlanes: 1.0,
            modes: BTreeSet::from([String::from("car")]),
            link_type: None,
        }
    }

    #[test]
    fn test_angle_boundary_is_exclusive() {
        let network = create_fan_network(&[5.0]);
        let scorer = CandidateScorer::new(10.0, 5.0);
        let link_id = LinkId::from("l5");
        let result = scorer
            .score(&network, c(1.0, 0.0), c(1.0, 0.0), &link_id)
            .unwrap();
        assert!(result.is_none(), "a link at exactly 5 degrees must be rejected");

        let wider = CandidateScorer::new(10.0, 5.001);
        let result = wider
            .score(&network, c(1.0, 0.0), c(1.0, 0.0), &link_id)
            .unwrap();
        assert!(result.is_some());
    }

    #[test]
    fn test_best_prefers_highest_similarity() {
        let network = create_fan_network(&[1.0, 3.0, 4.0, 30.0]);
        let scorer = CandidateScorer::new(10.0, 5.0);
        let candidates = network.links().map(|l| l.id.clone()).collect::<Vec<_>>();
        let best = scorer
            .best(&network, c(1.0, 0.0), c(0.5, 0.0), candidates.iter())
            .unwrap();
        assert_eq!(best.link_id, LinkId::from("l1"));
        assert!(best.angle_degrees < 1.0 + 1e-6);
    }

    #[test]
    fn test_best_rejects_distant_candidates() {
        let network = create_fan_network(&[0.0]);
        let scorer = CandidateScorer::new(10.0, 5.0);
        let candidates = [LinkId::from("l0")];
        let far = scorer.best(&network, c(1.0, 0.0), c(50.0, 10.0), candidates.iter());
        assert!(far.is_none());
        let near = scorer.best(&network, c(1.0, 0.0), c(50.0, 9.0), candidates.iter());
        assert!(near.is_some());
    }

    #[test]
    fn test_opposite_direction_passes_angle_but_scores_lowest() {
        let network = create_fan_network(&[0.0, 180.0]);
        let scorer = CandidateScorer::new(10.0, 5.0);
        let candidates = [LinkId::from("l180")];
        let only_opposite = scorer
            .best(&network, c(1.0, 0.0), c(0.0, 0.0), candidates.iter())
            .unwrap();
        assert!((only_opposite.similarity + 1.0).abs() < 1e-9);

        let both = [LinkId::from("l180"), LinkId::from("l0")];
        let best = scorer
            .best(&network, c(1.0, 0.0), c(0.0, 0.0), both.iter())
            .unwrap();
        assert_eq!(best.link_id, LinkId::from("l0"));
    }

    #[test]
    fn test_degenerate_candidate_is_skipped() {
        let network = create_fan_network(&[0.0]);
        let scorer = CandidateScorer::new(10.0, 5.0);
        let degenerate = LinkId::from("degenerate");
        let result = scorer.score(&network, c(1.0, 0.0), c(0.0, 0.0), &degenerate);
        assert!(matches!(result, Err(GeometryError::DegenerateGeometry(_))));
        let candidates = [degenerate, LinkId::from("l0")];
        let best = scorer
            .best(&network, c(1.0, 0.0), c(0.0, 0.0), candidates.iter())
            .unwrap();
        assert_eq!(best.link_id, LinkId::from("l0"));
    }
}
