mod tagged_feature;
mod feature_id;

pub use tagged_feature::Feature;
pub use feature_id::FeatureId;
