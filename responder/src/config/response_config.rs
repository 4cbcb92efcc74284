use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::constants::*;
use crate::core::route_scorer::RouteScorer;
use crate::core::zone_registry::{SafeZone, SafeZoneRegistry};
use crate::utils::errors::{ResponseError, Result};

/// Tunables that can be overridden from a JSON file without touching the
/// scoring logic. Missing keys fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponseConfig {
    pub safe_zones: Vec<SafeZone>,
    pub city_diameter_meters: f64,
    pub evacuation_threshold: f64,
    pub position_perturbation: f64,
    pub sample_stride: usize,
}

impl Default for ResponseConfig {
    fn default() -> Self {
        Self {
            safe_zones: SafeZoneRegistry::default().zones().to_vec(),
            city_diameter_meters: CITY_DIAMETER_METERS,
            evacuation_threshold: EVACUATION_RISK_THRESHOLD,
            position_perturbation: POSITION_PERTURBATION,
            sample_stride: HOURLY_SAMPLE_STRIDE,
        }
    }
}

impl ResponseConfig {
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let reader = BufReader::new(File::open(path)?);
        let config: ResponseConfig = serde_json::from_reader(reader)?;
        config.validate()?;
        info!(path = %path.display(), zones = config.safe_zones.len(), "loaded response configuration");
        Ok(config)
    }

    /// Checks everything except zone count, which `build_scorer` decides on.
    pub fn validate(&self) -> Result<()> {
        if !self.city_diameter_meters.is_finite() || self.city_diameter_meters <= 0.0 {
            return Err(ResponseError::InvalidConfig(format!(
                "city_diameter_meters must be positive, got {}",
                self.city_diameter_meters
            )));
        }
        if !(MIN_RISK..=MAX_RISK).contains(&self.evacuation_threshold) {
            return Err(ResponseError::InvalidConfig(format!(
                "evacuation_threshold must be within [0, 100], got {}",
                self.evacuation_threshold
            )));
        }
        if !(0.0..=MAP_MAX).contains(&self.position_perturbation) {
            return Err(ResponseError::InvalidConfig(format!(
                "position_perturbation must be within [0, 1], got {}",
                self.position_perturbation
            )));
        }
        if self.sample_stride == 0 {
            return Err(ResponseError::InvalidConfig("sample_stride must be at least 1".to_string()));
        }
        for zone in &self.safe_zones {
            if !zone.position.is_within_bounds() {
                return Err(ResponseError::InvalidConfig(format!(
                    "safe zone {} lies outside the unit square: {}",
                    zone.name, zone.position
                )));
            }
        }
        Ok(())
    }

    /// Builds the route scorer. An empty zone list is a configuration error
    /// unless the caller explicitly accepts degraded routing.
    pub fn build_scorer(&self, allow_fallback: bool) -> Result<RouteScorer> {
        let registry = match SafeZoneRegistry::new(self.safe_zones.clone()) {
            Ok(registry) => registry,
            Err(ResponseError::EmptyZoneRegistry) if allow_fallback => {
                warn!("configuration defines no safe zones; evacuation routing will be DEGRADED");
                SafeZoneRegistry::empty()
            }
            Err(e) => return Err(e),
        };
        Ok(RouteScorer::new(registry, self.city_diameter_meters))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(json: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    #[test]
    fn default_config_is_valid() {
        let config = ResponseConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.safe_zones.len(), 4);
        assert_eq!(config.city_diameter_meters, 2000.0);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let file = write_config(r#"{ "city_diameter_meters": 3500.0 }"#);
        let config = ResponseConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.city_diameter_meters, 3500.0);
        assert_eq!(config.safe_zones.len(), 4);
        assert_eq!(config.evacuation_threshold, 70.0);
    }

    #[test]
    fn zones_can_be_overridden() {
        let file = write_config(
            r#"{ "safe_zones": [ { "name": "RIDGE", "position": { "x": 0.2, "y": 0.95 } } ] }"#,
        );
        let config = ResponseConfig::from_json_file(file.path()).unwrap();
        let scorer = config.build_scorer(false).unwrap();
        assert_eq!(scorer.registry().zones()[0].name, "RIDGE");
    }

    #[test]
    fn out_of_bounds_zone_is_rejected() {
        let file = write_config(
            r#"{ "safe_zones": [ { "name": "SEA", "position": { "x": 1.4, "y": 0.5 } } ] }"#,
        );
        assert!(matches!(
            ResponseConfig::from_json_file(file.path()),
            Err(ResponseError::InvalidConfig(_))
        ));
    }

    #[test]
    fn non_positive_scale_is_rejected() {
        let config = ResponseConfig {
            city_diameter_meters: 0.0,
            ..ResponseConfig::default()
        };
        assert!(matches!(config.validate(), Err(ResponseError::InvalidConfig(_))));
    }

    #[test]
    fn empty_zone_list_fails_fast_unless_degraded_allowed() {
        let config = ResponseConfig {
            safe_zones: Vec::new(),
            ..ResponseConfig::default()
        };
        assert!(matches!(config.build_scorer(false), Err(ResponseError::EmptyZoneRegistry)));
        assert!(config.build_scorer(true).unwrap().registry().is_empty());
    }

    #[test]
    fn malformed_json_is_a_json_error() {
        let file = write_config("{ not json");
        assert!(matches!(ResponseConfig::from_json_file(file.path()), Err(ResponseError::JsonError(_))));
    }
}
