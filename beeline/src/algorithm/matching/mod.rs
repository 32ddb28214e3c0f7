mod feature_matcher;
mod link_transfer;
mod match_error;
mod match_method;
mod segment_match;

pub use feature_matcher::FeatureMatcher;
pub use link_transfer::LinkTransfer;
pub use match_error::MatchError;
pub use match_method::MatchMethod;
pub use segment_match::SegmentMatch;
