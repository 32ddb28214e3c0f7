use super::FeatureId;
use geo::{Coord, LineString};
use std::collections::BTreeMap;

/// an externally sourced, tagged linear shape, such as an OSM way. features
/// are matching inputs only and are never modified.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub id: FeatureId,
    pub geometry: LineString<f64>,
    pub tags: BTreeMap<String, String>,
}

impl Feature {
    pub fn new(id: FeatureId, coords: Vec<Coord<f64>>, tags: BTreeMap<String, String>) -> Feature {
        Feature {
            id,
            geometry: LineString::new(coords),
            tags,
        }
    }

    pub fn coords(&self) -> &[Coord<f64>] {
        &self.geometry.0
    }

    pub fn n_points(&self) -> usize {
        self.geometry.0.len()
    }
}
