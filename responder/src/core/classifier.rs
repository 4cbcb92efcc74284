//! Rule-based disaster classification.
//!
//! Rules are an ordered table of (predicate, category, risk formula) entries.
//! The first rule whose predicate holds decides the category; when none
//! matches the reading is `Normal`. Reordering the table changes results, so
//! the default order is part of the classifier's contract.

use serde::Serialize;
use tracing::debug;

use crate::config::constants::*;
use crate::models::disaster::DisasterCategory;
use crate::models::sensor_reading::SensorReading;
use crate::utils::logging::{self, OperationCategory};

/// A single entry of the first-match rule chain.
#[derive(Clone, Copy)]
pub struct ClassificationRule {
    pub name: &'static str,
    pub category: DisasterCategory,
    pub predicate: fn(&SensorReading) -> bool,
    pub risk: fn(&SensorReading) -> f64,
}

impl std::fmt::Debug for ClassificationRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClassificationRule")
            .field("name", &self.name)
            .field("category", &self.category)
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Classification {
    pub category: DisasterCategory,
    pub risk: f64,
}

fn heat_wave_applies(r: &SensorReading) -> bool {
    r.temperature > HEAT_WAVE_MIN_TEMP && r.humidity > HEAT_WAVE_MIN_HUMIDITY
}

fn heat_wave_risk(r: &SensorReading) -> f64 {
    (HEAT_WAVE_BASE_RISK + (r.temperature - HEAT_WAVE_MIN_TEMP) * HEAT_WAVE_RISK_PER_DEGREE)
        .min(HEAT_WAVE_MAX_RISK)
}

fn cyclone_applies(r: &SensorReading) -> bool {
    r.wind_speed > CYCLONE_MIN_WIND && r.pressure < CYCLONE_MAX_PRESSURE
}

fn cyclone_risk(r: &SensorReading) -> f64 {
    (CYCLONE_BASE_RISK + (CYCLONE_MAX_PRESSURE - r.pressure) * CYCLONE_RISK_PER_HPA)
        .min(CYCLONE_MAX_RISK)
}

fn flood_applies(r: &SensorReading) -> bool {
    r.humidity > FLOOD_MIN_HUMIDITY && r.temperature > FLOOD_MIN_TEMP
}

fn flood_risk(r: &SensorReading) -> f64 {
    (FLOOD_BASE_RISK + (r.humidity - FLOOD_MIN_HUMIDITY) * FLOOD_RISK_PER_PERCENT)
        .min(FLOOD_MAX_RISK)
}

fn blizzard_applies(r: &SensorReading) -> bool {
    r.temperature < BLIZZARD_MAX_TEMP && r.wind_speed > BLIZZARD_MIN_WIND
}

fn blizzard_risk(r: &SensorReading) -> f64 {
    // -T - 5 is how far below the -5 degC threshold the reading sits
    (BLIZZARD_BASE_RISK + (BLIZZARD_MAX_TEMP - r.temperature) * BLIZZARD_RISK_PER_DEGREE)
        .min(BLIZZARD_MAX_RISK)
}

fn earthquake_applies(r: &SensorReading) -> bool {
    r.pressure < EARTHQUAKE_MAX_PRESSURE
}

fn earthquake_risk(_: &SensorReading) -> f64 {
    EARTHQUAKE_RISK
}

/// Risk for readings no rule claims.
pub fn normal_risk(r: &SensorReading) -> f64 {
    (NORMAL_BASE_RISK - (r.temperature - NORMAL_COMFORT_TEMP).abs()).max(NORMAL_MIN_RISK)
}

/// The standard rule chain, highest priority first.
pub fn default_rules() -> Vec<ClassificationRule> {
    vec![
        ClassificationRule {
            name: "heat_wave",
            category: DisasterCategory::HeatWave,
            predicate: heat_wave_applies,
            risk: heat_wave_risk,
        },
        ClassificationRule {
            name: "cyclone",
            category: DisasterCategory::Cyclone,
            predicate: cyclone_applies,
            risk: cyclone_risk,
        },
        ClassificationRule {
            name: "flood",
            category: DisasterCategory::Flood,
            predicate: flood_applies,
            risk: flood_risk,
        },
        ClassificationRule {
            name: "blizzard",
            category: DisasterCategory::Blizzard,
            predicate: blizzard_applies,
            risk: blizzard_risk,
        },
        ClassificationRule {
            name: "earthquake",
            category: DisasterCategory::Earthquake,
            predicate: earthquake_applies,
            risk: earthquake_risk,
        },
    ]
}

#[derive(Debug, Clone)]
pub struct DisasterClassifier {
    rules: Vec<ClassificationRule>,
}

impl Default for DisasterClassifier {
    fn default() -> Self {
        Self::new(default_rules())
    }
}

impl DisasterClassifier {
    pub fn new(rules: Vec<ClassificationRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[ClassificationRule] {
        &self.rules
    }

    /// Maps a reading to exactly one category and a risk in [0, 100].
    ///
    /// The reading must already be validated; non-finite values are not
    /// handled here.
    pub fn classify(&self, reading: &SensorReading) -> Classification {
        let _timing = logging::start_timing("classify", OperationCategory::Classification);
        let (category, raw_risk) = match self.rules.iter().find(|rule| (rule.predicate)(reading)) {
            Some(rule) => {
                debug!(rule = rule.name, "classification rule matched");
                (rule.category, (rule.risk)(reading))
            }
            None => {
                debug!("no rule matched, reading is normal");
                (DisasterCategory::Normal, normal_risk(reading))
            }
        };

        Classification {
            category,
            risk: raw_risk.clamp(MIN_RISK, MAX_RISK),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn reading(pressure: f64, temperature: f64, humidity: f64, wind_speed: f64) -> SensorReading {
        SensorReading::new(pressure, temperature, humidity, wind_speed, 0.0, None)
    }

    fn classify(r: SensorReading) -> Classification {
        DisasterClassifier::default().classify(&r)
    }

    #[test]
    fn heat_wave_rule() {
        let c = classify(reading(1010.0, 40.0, 65.0, 2.0));
        assert_eq!(c.category, DisasterCategory::HeatWave);
        assert!((c.risk - 76.0).abs() < 1e-9);
    }

    #[test]
    fn heat_wave_risk_is_capped() {
        let c = classify(reading(1010.0, 80.0, 65.0, 2.0));
        assert_eq!(c.risk, 95.0);
    }

    #[test]
    fn cyclone_rule() {
        let c = classify(reading(960.0, 20.0, 50.0, 20.0));
        assert_eq!(c.category, DisasterCategory::Cyclone);
        assert!((c.risk - 77.0).abs() < 1e-9);
    }

    #[test]
    fn flood_rule() {
        let c = classify(reading(1000.0, 10.0, 95.0, 3.0));
        assert_eq!(c.category, DisasterCategory::Flood);
        assert!((c.risk - 69.0).abs() < 1e-9);
    }

    #[test]
    fn blizzard_rule() {
        let c = classify(reading(1000.0, -15.0, 70.0, 10.0));
        assert_eq!(c.category, DisasterCategory::Blizzard);
        assert!((c.risk - 77.0).abs() < 1e-9);
    }

    #[test]
    fn earthquake_rule_is_fixed_risk() {
        let c = classify(reading(965.0, 10.0, 50.0, 2.0));
        assert_eq!(c.category, DisasterCategory::Earthquake);
        assert_eq!(c.risk, 80.0);
    }

    #[test]
    fn normal_risk_peaks_at_comfort_temperature() {
        let c = classify(reading(1013.0, 15.0, 50.0, 2.0));
        assert_eq!(c.category, DisasterCategory::Normal);
        assert_eq!(c.risk, 30.0);

        let cold = classify(reading(1013.0, -40.0, 50.0, 2.0));
        assert_eq!(cold.category, DisasterCategory::Normal);
        assert_eq!(cold.risk, 10.0);
    }

    #[test]
    fn first_matching_rule_wins() {
        // Satisfies both the heat wave and cyclone rules
        let c = classify(reading(900.0, 40.0, 70.0, 20.0));
        assert_eq!(c.category, DisasterCategory::HeatWave);

        // Satisfies cyclone and earthquake
        let c = classify(reading(960.0, 20.0, 50.0, 20.0));
        assert_eq!(c.category, DisasterCategory::Cyclone);
    }

    #[test]
    fn rule_order_is_the_contract() {
        let mut rules = default_rules();
        rules.reverse();
        let reversed = DisasterClassifier::new(rules);
        let c = reversed.classify(&reading(900.0, 40.0, 70.0, 20.0));
        assert_eq!(c.category, DisasterCategory::Earthquake);
    }

    #[test]
    fn empty_rule_table_classifies_everything_as_normal() {
        let classifier = DisasterClassifier::new(Vec::new());
        let c = classifier.classify(&reading(900.0, 40.0, 70.0, 20.0));
        assert_eq!(c.category, DisasterCategory::Normal);
        assert_eq!(c.risk, 10.0);
    }

    #[test]
    fn thresholds_are_strict() {
        let c = classify(reading(1010.0, 35.0, 65.0, 2.0));
        assert_ne!(c.category, DisasterCategory::HeatWave);
        let c = classify(reading(970.0, 10.0, 50.0, 2.0));
        assert_ne!(c.category, DisasterCategory::Earthquake);
    }

    proptest! {
        #[test]
        fn hot_and_humid_is_always_heat_wave(
            temperature in 35.001f64..60.0,
            humidity in 60.001f64..100.0,
            pressure in 900.0f64..1050.0,
            wind in 0.0f64..40.0,
        ) {
            let c = classify(reading(pressure, temperature, humidity, wind));
            prop_assert_eq!(c.category, DisasterCategory::HeatWave);
            prop_assert!(c.risk >= 70.0 && c.risk <= 95.0);
        }

        #[test]
        fn risk_is_always_a_percentage(
            temperature in -60.0f64..60.0,
            humidity in 0.0f64..100.0,
            pressure in 850.0f64..1085.0,
            wind in 0.0f64..80.0,
        ) {
            let c = classify(reading(pressure, temperature, humidity, wind));
            prop_assert!(DisasterCategory::ALL.contains(&c.category));
            prop_assert!(c.risk >= 0.0 && c.risk <= 100.0);
        }
    }
}
