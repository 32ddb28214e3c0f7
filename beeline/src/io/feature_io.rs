use super::{file_ops, IoError};
use beeline_core::model::feature::{Feature, FeatureId};
use geojson::GeoJson;
use std::collections::BTreeMap;
use std::io::Read;

/// reads tagged linear features from a GeoJSON FeatureCollection.
///
/// LineString features become one [`Feature`]. MultiLineString features
/// become one feature per part, with ids suffixed `_{part}`. features with
/// other geometry types are skipped with a warning. a feature's id is its
/// GeoJSON id, or its index in the collection when it has none. properties
/// become tags; non-string values are kept in their JSON form.
pub fn read_features(path: &str) -> Result<Vec<Feature>, IoError> {
    let mut contents = String::new();
    file_ops::open_reader(path)?
        .read_to_string(&mut contents)
        .map_err(|source| IoError::FileError {
            path: String::from(path),
            source,
        })?;
    let features = decode_features(&contents).map_err(|message| IoError::GeoJsonError {
        path: String::from(path),
        message,
    })?;
    log::info!("read {} features from {path}", features.len());
    Ok(features)
}

fn decode_features(contents: &str) -> Result<Vec<Feature>, String> {
    let dataset = contents
        .parse::<GeoJson>()
        .map_err(|e| format!("failed to parse: {e}"))?;
    let collection = match dataset {
        GeoJson::FeatureCollection(collection) => collection,
        GeoJson::Feature(_) => return Err(String::from("expected a FeatureCollection, found a Feature")),
        GeoJson::Geometry(_) => return Err(String::from("expected a FeatureCollection, found a Geometry")),
    };

    let mut out = vec![];
    for (index, feature) in collection.features.into_iter().enumerate() {
        let id = match &feature.id {
            Some(geojson::feature::Id::String(s)) => s.to_string(),
            Some(geojson::feature::Id::Number(n)) => n.to_string(),
            None => index.to_string(),
        };
        let tags = feature
            .properties
            .unwrap_or_default()
            .into_iter()
            .map(|(key, value)| match value {
                serde_json::Value::String(s) => (key, s),
                other => (key, other.to_string()),
            })
            .collect::<BTreeMap<_, _>>();
        let Some(geom) = feature.geometry else {
            log::warn!("feature {id} has no geometry, skipping");
            continue;
        };
        let geometry: geo::Geometry<f64> = geom
            .try_into()
            .map_err(|e| format!("failed to decode geometry for feature {id}: {e}"))?;
        match geometry {
            geo::Geometry::LineString(line) => {
                out.push(Feature::new(FeatureId(id), line.0, tags));
            }
            geo::Geometry::MultiLineString(lines) => {
                for (part, line) in lines.0.into_iter().enumerate() {
                    let part_id = FeatureId(format!("{id}_{part}"));
                    out.push(Feature::new(part_id, line.0, tags.clone()));
                }
            }
            _ => log::warn!("feature {id} is not linear, skipping"),
        }
    }
    Ok(out)
}
