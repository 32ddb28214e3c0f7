use super::{FallbackPolicy, LineNamePolicy, MatchingConfiguration, TransferConfiguration};
use crate::app::BeelineAppError;
use serde::{Deserialize, Serialize};

/// defines behaviors for rebasing a schedule and synthesizing bus lanes.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct BeelineConfiguration {
    pub matching: MatchingConfiguration,
    /// policy when a feature has no link within thresholds
    pub feature_fallback: FallbackPolicy,
    /// policy when no link near a stop carries any of the stop's lines
    pub stop_fallback: FallbackPolicy,
    pub stop_search_radius: f64,
    pub stop_max_angle_degrees: f64,
    pub transfer: TransferConfiguration,
    /// modes a link must allow to be considered part of the road network
    pub base_modes: Vec<String>,
    /// link types (case-insensitive substrings) removed from the road network
    pub excluded_link_types: Vec<String>,
    /// modes whose lines take part in line-usage matching
    pub usage_modes: Vec<String>,
    /// modes merged into `lane_mode` when converting a network
    pub pt_source_modes: Vec<String>,
    pub lane_mode: String,
    pub lane_suffix: String,
    pub lane_capacity: f64,
    pub lane_permlanes: f64,
    pub schedule_line_names: LineNamePolicy,
    pub prepared_line_names: LineNamePolicy,
    pub parallelize: bool,
}

impl Default for BeelineConfiguration {
    fn default() -> Self {
        Self {
            matching: MatchingConfiguration::default(),
            feature_fallback: FallbackPolicy::Strict,
            stop_fallback: FallbackPolicy::Lenient,
            stop_search_radius: 100.0,
            stop_max_angle_degrees: 90.0,
            transfer: TransferConfiguration::default(),
            base_modes: vec![String::from("car")],
            excluded_link_types: vec![String::from("motorway")],
            usage_modes: vec![String::from("bus")],
            pt_source_modes: ["bus", "rail", "ferry", "tram"]
                .into_iter()
                .map(String::from)
                .collect(),
            lane_mode: String::from("pt"),
            lane_suffix: String::from("_bus_"),
            lane_capacity: 1200.0,
            lane_permlanes: 1.0,
            schedule_line_names: LineNamePolicy::FirstSegment {
                delimiter: String::from("---"),
            },
            prepared_line_names: LineNamePolicy::LastSegment {
                delimiter: String::from(":"),
            },
            parallelize: true,
        }
    }
}

impl BeelineConfiguration {
    /// rejects search radii that are not positive and a radius growth factor
    /// that would not widen the search.
    pub fn validate(&self) -> Result<(), BeelineAppError> {
        let radii = [
            ("matching.search_radius", self.matching.search_radius),
            ("stop_search_radius", self.stop_search_radius),
            ("transfer.search_radius", self.transfer.search_radius),
        ];
        for (key, radius) in radii {
            if !(radius > 0.0 && radius.is_finite()) {
                return Err(BeelineAppError::ConfigurationError(format!(
                    "{key} must be a positive number, found {radius}"
                )));
            }
        }
        let growth = self.matching.radius_growth_factor;
        if !(growth > 1.0 && growth.is_finite()) {
            return Err(BeelineAppError::ConfigurationError(format!(
                "matching.radius_growth_factor must be greater than 1, found {growth}"
            )));
        }
        Ok(())
    }
}

impl TryFrom<&String> for BeelineConfiguration {
    type Error = BeelineAppError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        let conf: BeelineConfiguration = if f.ends_with(".toml") {
            let s = std::fs::read_to_string(f).map_err(|e| {
                BeelineAppError::ConfigurationError(format!("failure reading {f}: {e}"))
            })?;
            toml::from_str(&s).map_err(|e| {
                BeelineAppError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })?
        } else if f.ends_with(".json") {
            let s = std::fs::read_to_string(f).map_err(|e| {
                BeelineAppError::ConfigurationError(format!("failure reading {f}: {e}"))
            })?;
            serde_json::from_str(&s).map_err(|e| {
                BeelineAppError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })?
        } else {
            return Err(BeelineAppError::ConfigurationError(format!(
                "unsupported file type: {f}"
            )));
        };
        conf.validate()?;
        Ok(conf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NearestAcceptance;

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let s = r#"
            stop_fallback = "strict"
            lane_suffix = "_busway_"

            [matching]
            max_angle_degrees = 7.5
            nearest_acceptance = "thresholds"

            [schedule_line_names]
            type = "identity"
        "#;
        let conf: BeelineConfiguration = toml::from_str(s).unwrap();
        assert_eq!(conf.stop_fallback, FallbackPolicy::Strict);
        assert_eq!(conf.feature_fallback, FallbackPolicy::Strict);
        assert_eq!(conf.lane_suffix, "_busway_");
        assert_eq!(conf.matching.max_angle_degrees, 7.5);
        assert_eq!(conf.matching.max_perpendicular_distance, 10.0);
        assert_eq!(conf.matching.nearest_acceptance, NearestAcceptance::Thresholds);
        assert_eq!(conf.schedule_line_names, LineNamePolicy::Identity);
        assert_eq!(conf.base_modes, vec![String::from("car")]);
    }

    #[test]
    fn test_json_round_trip() {
        let conf = BeelineConfiguration::default();
        let s = serde_json::to_string(&conf).unwrap();
        let decoded: BeelineConfiguration = serde_json::from_str(&s).unwrap();
        assert_eq!(decoded, conf);
    }

    #[test]
    fn test_unsupported_extension() {
        let result = BeelineConfiguration::try_from(&String::from("beeline.yaml"));
        assert!(matches!(
            result,
            Err(BeelineAppError::ConfigurationError(_))
        ));
    }

    #[test]
    fn test_transfer_defaults_to_lenient() {
        let s = r#"
            [transfer]
            search_radius = 50.0
        "#;
        let conf: BeelineConfiguration = toml::from_str(s).unwrap();
        assert_eq!(conf.transfer.search_radius, 50.0);
        assert_eq!(conf.transfer.fallback, FallbackPolicy::Lenient);
        assert_eq!(conf.feature_fallback, FallbackPolicy::Strict);
    }

    #[test]
    fn test_invalid_radii_are_rejected() {
        assert!(BeelineConfiguration::default().validate().is_ok());

        let mut negative = BeelineConfiguration::default();
        negative.matching.search_radius = -100.0;
        assert!(matches!(
            negative.validate(),
            Err(BeelineAppError::ConfigurationError(_))
        ));

        let mut no_widening = BeelineConfiguration::default();
        no_widening.matching.radius_growth_factor = 1.0;
        assert!(no_widening.validate().is_err());

        let mut zero_transfer = BeelineConfiguration::default();
        zero_transfer.transfer.search_radius = 0.0;
        assert!(zero_transfer.validate().is_err());
    }

    #[test]
    fn test_invalid_file_is_rejected_on_load() {
        let path = std::env::temp_dir()
            .join(format!("beeline_{}_invalid_conf.toml", std::process::id()))
            .to_string_lossy()
            .to_string();
        std::fs::write(&path, "[matching]\nradius_growth_factor = 0.5\n").unwrap();
        let result = BeelineConfiguration::try_from(&path);
        let _ = std::fs::remove_file(&path);
        assert!(matches!(
            result,
            Err(BeelineAppError::ConfigurationError(_))
        ));
    }
}
