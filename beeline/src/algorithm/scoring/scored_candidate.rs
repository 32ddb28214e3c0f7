use beeline_core::model::network::LinkId;

/// similarities closer than this are considered equal when ranking.
const SIMILARITY_TIE: f64 = 1e-9;

/// a candidate link that passed the scorer's thresholds.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate {
    pub link_id: LinkId,
    /// cosine of the angle between the reference direction and the link
    pub similarity: f64,
    pub angle_degrees: f64,
    /// distance from the reference point to the link segment
    pub distance: f64,
}

impl ScoredCandidate {
    /// true if this candidate should replace `other` as the best one. higher
    /// similarity wins. equal similarity goes to the closer link, then to the
    /// lower id.
    pub fn beats(&self, other: &ScoredCandidate) -> bool {
        if (self.similarity - other.similarity).abs() > SIMILARITY_TIE {
            return self.similarity > other.similarity;
        }
        if self.distance != other.distance {
            return self.distance < other.distance;
        }
        self.link_id < other.link_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(id: &str, similarity: f64, distance: f64) -> ScoredCandidate {
        ScoredCandidate {
            link_id: LinkId::from(id),
            similarity,
            angle_degrees: similarity.abs().acos().to_degrees(),
            distance,
        }
    }

    #[test]
    fn test_ranking() {
        let a = candidate("a", 0.9, 1.0);
        let b = candidate("b", 1.0, 8.0);
        assert!(b.beats(&a));
        let c = candidate("c", 1.0, 2.0);
        assert!(c.beats(&b));
        let d = candidate("d", 1.0, 2.0);
        assert!(c.beats(&d));
        assert!(!d.beats(&c));
    }
}
