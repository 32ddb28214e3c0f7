use super::{MatchError, MatchMethod, SegmentMatch};
use crate::algorithm::scoring::CandidateScorer;
use crate::config::{FallbackPolicy, MatchingConfiguration, NearestAcceptance};
use beeline_core::{
    geometry::{self, GeometryError},
    model::{
        feature::Feature,
        network::{LinkId, Network},
    },
    spatial::LinkSpatialIndex,
};
use geo::Coord;
use std::collections::BTreeSet;

/// matches directed segments and tagged features onto the links of a target
/// network.
///
/// the matcher borrows the target network and its spatial index, both of
/// which are read-only, so one matcher can be shared by all rayon workers.
pub struct FeatureMatcher<'a> {
    network: &'a Network,
    index: &'a LinkSpatialIndex,
    scorer: CandidateScorer,
    search_radius: f64,
    radius_growth_factor: f64,
    nearest_acceptance: NearestAcceptance,
    fallback: FallbackPolicy,
}

impl<'a> FeatureMatcher<'a> {
    pub fn new(
        network: &'a Network,
        index: &'a LinkSpatialIndex,
        conf: &MatchingConfiguration,
        fallback: FallbackPolicy,
    ) -> FeatureMatcher<'a> {
        FeatureMatcher {
            network,
            index,
            scorer: CandidateScorer::from(conf),
            search_radius: conf.search_radius,
            radius_growth_factor: conf.radius_growth_factor,
            nearest_acceptance: conf.nearest_acceptance,
            fallback,
        }
    }

    /// matches one directed segment from `start` to `end`.
    ///
    /// the link nearest to the segment's midpoint is accepted when it points
    /// the same way as the segment. otherwise the links within the search
    /// radius are scored, and if none pass, scored again once within the
    /// widened radius.
    ///
    /// # Arguments
    ///
    /// * `record` - name of the matched record, used in errors and logs
    /// * `start` - segment start
    /// * `end` - segment end
    ///
    /// # Returns
    ///
    /// the matched link, or [`MatchError::NoMatchFound`] under a strict policy.
    /// a lenient policy returns the nearest link instead.
    pub fn match_segment(
        &self,
        record: &str,
        start: Coord<f64>,
        end: Coord<f64>,
    ) -> Result<SegmentMatch, MatchError> {
        let direction = geometry::direction(start, end);
        if geometry::norm(direction) < geometry::MIN_VECTOR_LENGTH {
            return Err(MatchError::DegenerateGeometry {
                record: String::from(record),
                source: GeometryError::DegenerateGeometry(format!(
                    "coincident points of '{record}'"
                )),
            });
        }
        let midpoint = geometry::midpoint(start, end);
        let nearest = self
            .index
            .nearest(midpoint)
            .ok_or_else(|| MatchError::EmptyIndex(String::from(record)))?;

        if self.accepts_nearest(direction, midpoint, nearest)? {
            return Ok(SegmentMatch::new(nearest.clone(), MatchMethod::Nearest));
        }

        let widened = self.search_radius * self.radius_growth_factor;
        let searches = [
            (self.search_radius, MatchMethod::Scored),
            (widened, MatchMethod::ScoredWidened),
        ];
        for (radius, method) in searches {
            let candidates = self.index.within(midpoint, radius);
            if let Some(best) = self.scorer.best(self.network, direction, midpoint, candidates) {
                return Ok(SegmentMatch::new(best.link_id, method));
            }
        }

        match self.fallback {
            FallbackPolicy::Lenient => {
                log::warn!(
                    "'{record}' has no link within thresholds, falling back to nearest link '{nearest}'"
                );
                Ok(SegmentMatch::new(nearest.clone(), MatchMethod::Fallback))
            }
            FallbackPolicy::Strict => Err(MatchError::NoMatchFound {
                record: String::from(record),
                radius: widened,
            }),
        }
    }

    /// matches a tagged linear feature.
    ///
    /// a two-point feature is matched as the single pair first to last. longer
    /// features are matched for every ordered pair of their points, which is
    /// quadratic in the number of points; a pair that fails is skipped. each
    /// matched link is accompanied by its opposite link, if any.
    ///
    /// # Returns
    ///
    /// the matched links, or [`MatchError::NoMatchFound`] if no pair matched.
    pub fn match_feature(&self, feature: &Feature) -> Result<BTreeSet<LinkId>, MatchError> {
        let record = feature.id.as_str();
        let coords = feature.coords();
        if feature.n_points() < 2 {
            return Err(MatchError::DegenerateGeometry {
                record: String::from(record),
                source: GeometryError::DegenerateGeometry(format!(
                    "feature '{record}' has {} point(s)",
                    feature.n_points()
                )),
            });
        }

        let mut matched: BTreeSet<LinkId> = BTreeSet::new();
        for (i, j) in point_pairs(coords.len()) {
            match self.match_segment(record, coords[i], coords[j]) {
                Ok(segment_match) => {
                    log::debug!(
                        "feature '{record}' pair ({i}, {j}) matched '{}' ({})",
                        segment_match.link_id,
                        segment_match.method
                    );
                    matched.insert(segment_match.link_id);
                }
                Err(e) => log::debug!("feature '{record}' pair ({i}, {j}) skipped: {e}"),
            }
        }

        if matched.is_empty() {
            return Err(MatchError::NoMatchFound {
                record: String::from(record),
                radius: self.search_radius * self.radius_growth_factor,
            });
        }

        let opposites = matched
            .iter()
            .filter_map(|link_id| self.network.opposite_link(link_id))
            .cloned()
            .collect::<Vec<_>>();
        matched.extend(opposites);
        Ok(matched)
    }

    fn accepts_nearest(
        &self,
        direction: Coord<f64>,
        midpoint: Coord<f64>,
        nearest: &LinkId,
    ) -> Result<bool, MatchError> {
        let line = self.network.link_line_by_id(nearest)?;
        let similarity =
            match geometry::normalized_similarity(direction, geometry::line_direction(&line)) {
                Ok(similarity) => similarity,
                Err(_) => return Ok(false),
            };
        if similarity <= 0.0 {
            return Ok(false);
        }
        match self.nearest_acceptance {
            NearestAcceptance::Orientation => Ok(true),
            NearestAcceptance::Thresholds => {
                let scored = self
                    .scorer
                    .score(self.network, direction, midpoint, nearest)
                    .ok()
                    .flatten();
                Ok(scored.is_some())
            }
        }
    }
}

/// the point index pairs evaluated for a feature of `n_points` points.
fn point_pairs(n_points: usize) -> Vec<(usize, usize)> {
    if n_points == 2 {
        return vec![(0, 1)];
    }
    (0..n_points)
        .flat_map(|i| (0..n_points).filter(move |j| *j != i).map(move |j| (i, j)))
        .collect()
}
