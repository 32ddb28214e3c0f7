mod beeline_config;
mod fallback_policy;
mod line_name_policy;
mod matching_config;
mod nearest_acceptance;
mod transfer_config;

pub use beeline_config::BeelineConfiguration;
pub use fallback_policy::FallbackPolicy;
pub use line_name_policy::LineNamePolicy;
pub use matching_config::MatchingConfiguration;
pub use nearest_acceptance::NearestAcceptance;
pub use transfer_config::TransferConfiguration;
