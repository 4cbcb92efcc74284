//! Assembles classifier and scorer output into the report handed to renderers.

use chrono::NaiveDateTime;
use rand::Rng;
use serde::Serialize;
use tracing::{info, instrument};

use crate::config::constants::*;
use crate::config::response_config::ResponseConfig;
use crate::core::classifier::DisasterClassifier;
use crate::core::perturbation::perturb_position;
use crate::core::route_scorer::{RoutePlan, RouteScorer};
use crate::data::position::Position;
use crate::models::disaster::DisasterCategory;
use crate::models::sensor_reading::SensorReading;
use crate::utils::errors::Result;
use crate::utils::logging::{self, OperationCategory};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SafetyStatus {
    Critical,
    High,
    Medium,
    Low,
}

impl SafetyStatus {
    pub fn from_risk(risk: f64) -> Self {
        if risk >= CRITICAL_RISK {
            SafetyStatus::Critical
        } else if risk >= HIGH_RISK {
            SafetyStatus::High
        } else if risk >= MEDIUM_RISK {
            SafetyStatus::Medium
        } else {
            SafetyStatus::Low
        }
    }

    pub fn recommendation(&self) -> &'static str {
        match self {
            SafetyStatus::Critical => "CRITICAL: Immediate evacuation required!",
            SafetyStatus::High => "HIGH RISK: Evacuate immediately!",
            SafetyStatus::Medium => "MEDIUM RISK: Prepare for evacuation.",
            SafetyStatus::Low => "LOW RISK: No immediate evacuation needed.",
        }
    }
}

pub fn is_evacuation_needed(risk: f64, threshold: f64) -> bool {
    risk >= threshold
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseReport {
    pub recorded_at: Option<NaiveDateTime>,
    pub sensors: SensorReading,
    pub category: DisasterCategory,
    pub risk_percentage: f64,
    pub evacuation_needed: bool,
    pub safety_status: SafetyStatus,
    pub current_position: Position,
    pub epicenter: Position,
    pub route: Option<RoutePlan>,
    pub distance_to_epicenter_meters: u32,
    pub distance_to_safety_meters: Option<u32>,
}

/// Runs one reading through classification and, when warranted, routing.
#[derive(Debug, Clone)]
pub struct Responder {
    classifier: DisasterClassifier,
    scorer: RouteScorer,
    config: ResponseConfig,
    allow_fallback: bool,
}

impl Responder {
    /// Distances are reported on the scorer's scale; `config` supplies the
    /// evacuation threshold and perturbation only.
    pub fn new(
        classifier: DisasterClassifier,
        scorer: RouteScorer,
        config: ResponseConfig,
        allow_fallback: bool,
    ) -> Self {
        Self {
            classifier,
            scorer,
            config,
            allow_fallback,
        }
    }

    pub fn from_config(config: ResponseConfig, allow_fallback: bool) -> Result<Self> {
        config.validate()?;
        let scorer = config.build_scorer(allow_fallback)?;
        let classifier = DisasterClassifier::default();
        info!(
            rules = classifier.rules().len(),
            zones = scorer.registry().len(),
            scale = scorer.city_diameter_meters(),
            "responder ready"
        );
        Ok(Self::new(classifier, scorer, config, allow_fallback))
    }

    #[instrument(skip(self, rng), fields(pressure = reading.pressure, temperature = reading.temperature))]
    pub fn assess<R: Rng + ?Sized>(
        &self,
        reading: &SensorReading,
        recorded_at: Option<NaiveDateTime>,
        rng: &mut R,
    ) -> Result<ResponseReport> {
        let _timing = logging::start_timing("assess", OperationCategory::Assessment);
        reading.validate()?;

        let classification = self.classifier.classify(reading);
        let epicenter = classification.category.epicenter();
        let current_position = perturb_position(&epicenter, self.config.position_perturbation, rng);
        let evacuation_needed = is_evacuation_needed(classification.risk, self.config.evacuation_threshold);

        info!(
            category = %classification.category,
            risk = classification.risk,
            evacuation_needed,
            "reading classified"
        );

        let route = if evacuation_needed {
            Some(self.scorer.plan_route(
                &current_position,
                &epicenter,
                classification.category,
                self.allow_fallback,
            )?)
        } else {
            None
        };

        // Band follows the displayed value; evacuation stays on the raw risk
        let risk_percentage = round_one_decimal(classification.risk);

        Ok(ResponseReport {
            recorded_at,
            sensors: *reading,
            category: classification.category,
            risk_percentage,
            evacuation_needed,
            safety_status: SafetyStatus::from_risk(risk_percentage),
            current_position,
            epicenter,
            distance_to_epicenter_meters: current_position
                .distance_meters(&epicenter, self.scorer.city_diameter_meters()),
            distance_to_safety_meters: route.as_ref().map(RoutePlan::distance_meters),
            route,
        })
    }
}

/// One-shot assessment with the default configuration.
pub fn assess<R: Rng + ?Sized>(reading: &SensorReading, rng: &mut R) -> Result<ResponseReport> {
    Responder::from_config(ResponseConfig::default(), false)?.assess(reading, None, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::zone_registry::SafeZoneRegistry;
    use crate::utils::errors::ResponseError;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(2024)
    }

    #[test]
    fn evacuation_boundary() {
        assert!(!is_evacuation_needed(69.9, EVACUATION_RISK_THRESHOLD));
        assert!(is_evacuation_needed(70.0, EVACUATION_RISK_THRESHOLD));
    }

    #[test]
    fn safety_bands() {
        assert_eq!(SafetyStatus::from_risk(85.0), SafetyStatus::Critical);
        assert_eq!(SafetyStatus::from_risk(84.9), SafetyStatus::High);
        assert_eq!(SafetyStatus::from_risk(70.0), SafetyStatus::High);
        assert_eq!(SafetyStatus::from_risk(50.0), SafetyStatus::Medium);
        assert_eq!(SafetyStatus::from_risk(49.9), SafetyStatus::Low);
    }

    #[test]
    fn calm_reading_needs_no_route() {
        let reading = SensorReading::new(1013.0, 15.0, 50.0, 2.0, 5.0, None);
        let report = assess(&reading, &mut rng()).unwrap();
        assert_eq!(report.category, DisasterCategory::Normal);
        assert_eq!(report.risk_percentage, 30.0);
        assert!(!report.evacuation_needed);
        assert!(report.route.is_none());
        assert!(report.distance_to_safety_meters.is_none());
        assert_eq!(report.safety_status, SafetyStatus::Low);
    }

    #[test]
    fn severe_reading_gets_a_route() {
        let reading = SensorReading::new(960.0, 20.0, 50.0, 20.0, 10.0, Some(270.0));
        let report = assess(&reading, &mut rng()).unwrap();
        assert_eq!(report.category, DisasterCategory::Cyclone);
        assert!(report.evacuation_needed);
        assert_eq!(report.epicenter, Position::new(0.85, 0.25));
        assert!(report.current_position.is_within_bounds());

        let route = report.route.as_ref().unwrap();
        assert!(!route.is_degraded());
        assert_eq!(report.distance_to_safety_meters, Some(route.distance_meters()));
        // Perturbation is at most 0.15 per axis
        assert!(report.distance_to_epicenter_meters <= (0.15f64 * 2f64.sqrt() * 2000.0) as u32);
    }

    #[test]
    fn risk_is_rounded_for_reporting() {
        // 70 + 0.123 * 1.2 = 70.1476
        let reading = SensorReading::new(1013.0, 35.123, 65.0, 2.0, 20.0, None);
        let report = assess(&reading, &mut rng()).unwrap();
        assert_eq!(report.category, DisasterCategory::HeatWave);
        assert!((report.risk_percentage - 70.1).abs() < 1e-9);
    }

    #[test]
    fn safety_band_matches_displayed_risk() {
        // 70 + 12.47 * 1.2 = 84.964, shown as 85.0
        let reading = SensorReading::new(1010.0, 47.47, 65.0, 2.0, 20.0, None);
        let report = assess(&reading, &mut rng()).unwrap();
        assert_eq!(report.category, DisasterCategory::HeatWave);
        assert_eq!(report.risk_percentage, 85.0);
        assert_eq!(report.safety_status, SafetyStatus::Critical);
        assert!(report.evacuation_needed);
    }

    #[test]
    fn same_seed_same_report() {
        let reading = SensorReading::new(1000.0, -15.0, 70.0, 10.0, -20.0, None);
        let a = assess(&reading, &mut rng()).unwrap();
        let b = assess(&reading, &mut rng()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn invalid_reading_is_rejected_before_classification() {
        let reading = SensorReading::new(f64::NAN, 15.0, 50.0, 2.0, 5.0, None);
        assert!(matches!(assess(&reading, &mut rng()), Err(ResponseError::InvalidReading(_))));
    }

    #[test]
    fn empty_registry_propagates_without_fallback() {
        let responder = Responder::new(
            DisasterClassifier::default(),
            RouteScorer::new(SafeZoneRegistry::empty(), CITY_DIAMETER_METERS),
            ResponseConfig::default(),
            false,
        );
        let reading = SensorReading::new(965.0, 10.0, 50.0, 2.0, 5.0, None);
        assert!(matches!(
            responder.assess(&reading, None, &mut rng()),
            Err(ResponseError::EmptyZoneRegistry)
        ));
    }

    #[test]
    fn degraded_route_is_flagged() {
        let responder = Responder::new(
            DisasterClassifier::default(),
            RouteScorer::new(SafeZoneRegistry::empty(), CITY_DIAMETER_METERS),
            ResponseConfig::default(),
            true,
        );
        let reading = SensorReading::new(965.0, 10.0, 50.0, 2.0, 5.0, None);
        let report = responder.assess(&reading, None, &mut rng()).unwrap();
        assert!(report.route.unwrap().is_degraded());
        assert_eq!(report.distance_to_safety_meters, Some(450));
    }

    #[test]
    fn distances_share_the_scorer_scale() {
        let scale = 5000.0;
        let responder = Responder::new(
            DisasterClassifier::default(),
            RouteScorer::new(SafeZoneRegistry::default(), scale),
            ResponseConfig::default(),
            false,
        );
        let reading = SensorReading::new(960.0, 20.0, 50.0, 20.0, 10.0, None);
        let report = responder.assess(&reading, None, &mut rng()).unwrap();

        assert_eq!(
            report.distance_to_epicenter_meters,
            report.current_position.distance_meters(&report.epicenter, scale)
        );
        match report.route.as_ref().unwrap() {
            RoutePlan::Optimal(route) => {
                assert_eq!(route.distance_meters, report.current_position.distance_meters(&route.zone.position, scale));
            }
            other => panic!("expected optimal route, got {:?}", other),
        }
    }

    #[test]
    fn custom_threshold_changes_evacuation_decision() {
        let config = ResponseConfig {
            evacuation_threshold: 25.0,
            ..ResponseConfig::default()
        };
        let responder = Responder::from_config(config, false).unwrap();
        let reading = SensorReading::new(1013.0, 15.0, 50.0, 2.0, 5.0, None);
        let report = responder.assess(&reading, None, &mut rng()).unwrap();
        assert!(report.evacuation_needed);
        assert!(report.route.is_some());
    }
}
