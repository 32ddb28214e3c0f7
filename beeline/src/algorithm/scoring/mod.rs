mod candidate_scorer;
mod scored_candidate;

pub use candidate_scorer::{CandidateScorer, BOUNDARY_TOLERANCE};
pub use scored_candidate::ScoredCandidate;
