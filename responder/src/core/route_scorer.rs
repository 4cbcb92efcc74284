//! Evacuation destination scoring.
//!
//! Every safe zone gets `dist(current, zone) - dist(zone, disaster) + bias`,
//! where the bias encodes a coarse per-category preference. The lowest score
//! wins and ties go to the zone listed first in the registry.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::constants::*;
use crate::core::zone_registry::{SafeZone, SafeZoneRegistry};
use crate::data::position::{to_meters, Position};
use crate::models::disaster::DisasterCategory;
use crate::utils::errors::{ResponseError, Result};
use crate::utils::logging::{self, OperationCategory};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoneScore {
    pub zone: String,
    pub base: f64,
    pub bias: f64,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvacuationRoute {
    pub zone: SafeZone,
    pub category: DisasterCategory,
    pub normalized_distance: f64,
    pub distance_meters: u32,
    pub guidance: String,
}

/// Either a scored route or the explicit placeholder used when no zone
/// could be scored and the caller opted into degraded operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RoutePlan {
    Optimal(EvacuationRoute),
    Fallback {
        destination: String,
        distance_meters: u32,
        guidance: String,
    },
}

impl RoutePlan {
    pub fn fallback() -> Self {
        RoutePlan::Fallback {
            destination: FALLBACK_DESTINATION.to_string(),
            distance_meters: FALLBACK_ROUTE_METERS,
            guidance: "Standard protocol activated".to_string(),
        }
    }

    pub fn destination(&self) -> &str {
        match self {
            RoutePlan::Optimal(route) => &route.zone.name,
            RoutePlan::Fallback { destination, .. } => destination,
        }
    }

    pub fn distance_meters(&self) -> u32 {
        match self {
            RoutePlan::Optimal(route) => route.distance_meters,
            RoutePlan::Fallback { distance_meters, .. } => *distance_meters,
        }
    }

    pub fn guidance(&self) -> &str {
        match self {
            RoutePlan::Optimal(route) => &route.guidance,
            RoutePlan::Fallback { guidance, .. } => guidance,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, RoutePlan::Fallback { .. })
    }
}

/// Category-specific preference added to a zone's base score.
pub fn category_bias(category: DisasterCategory, zone: &Position) -> f64 {
    match category {
        // low y is low elevation
        DisasterCategory::Flood => zone.y * FLOOD_ELEVATION_WEIGHT,
        DisasterCategory::Blizzard => (1.0 - zone.y) * BLIZZARD_ELEVATION_WEIGHT,
        // Positive under minimization, so central zones score better.
        DisasterCategory::Earthquake => {
            zone.distance_to(&Position::from_tuple(CITY_CENTER)) * EARTHQUAKE_CENTER_WEIGHT
        }
        DisasterCategory::Cyclone | DisasterCategory::HeatWave => (1.0 - zone.x) * INLAND_WEIGHT,
        DisasterCategory::Normal => 0.0,
    }
}

#[derive(Debug, Clone)]
pub struct RouteScorer {
    registry: SafeZoneRegistry,
    city_diameter_meters: f64,
}

impl Default for RouteScorer {
    fn default() -> Self {
        Self::new(SafeZoneRegistry::default(), CITY_DIAMETER_METERS)
    }
}

impl RouteScorer {
    pub fn new(registry: SafeZoneRegistry, city_diameter_meters: f64) -> Self {
        Self {
            registry,
            city_diameter_meters,
        }
    }

    pub fn registry(&self) -> &SafeZoneRegistry {
        &self.registry
    }

    /// Meters per normalized unit used for every distance this scorer reports.
    pub fn city_diameter_meters(&self) -> f64 {
        self.city_diameter_meters
    }

    pub fn score_zone(
        &self,
        zone: &SafeZone,
        current: &Position,
        disaster: &Position,
        category: DisasterCategory,
    ) -> ZoneScore {
        let base = current.distance_to(&zone.position) - zone.position.distance_to(disaster);
        let bias = category_bias(category, &zone.position);
        ZoneScore {
            zone: zone.name.clone(),
            base,
            bias,
            score: base + bias,
        }
    }

    /// Scores every zone in registry order.
    pub fn score_table(
        &self,
        current: &Position,
        disaster: &Position,
        category: DisasterCategory,
    ) -> Vec<ZoneScore> {
        self.registry
            .zones()
            .iter()
            .map(|zone| self.score_zone(zone, current, disaster, category))
            .collect()
    }

    /// Picks the lowest-scoring zone and the distance to reach it.
    pub fn find_optimal_route(
        &self,
        current: &Position,
        disaster: &Position,
        category: DisasterCategory,
    ) -> Result<EvacuationRoute> {
        let _timing = logging::start_timing("find_optimal_route", OperationCategory::RouteScoring);

        let mut best: Option<(&SafeZone, f64)> = None;
        for zone in self.registry.zones() {
            let scored = self.score_zone(zone, current, disaster, category);
            debug!(zone = %scored.zone, base = scored.base, bias = scored.bias, score = scored.score, "zone scored");
            match best {
                Some((_, best_score)) if scored.score >= best_score => {}
                _ => best = Some((zone, scored.score)),
            }
        }

        let (zone, score) = best.ok_or(ResponseError::EmptyZoneRegistry)?;
        let normalized_distance = current.distance_to(&zone.position);
        debug!(zone = %zone.name, score, "evacuation destination selected");

        Ok(EvacuationRoute {
            zone: zone.clone(),
            category,
            normalized_distance,
            distance_meters: to_meters(normalized_distance, self.city_diameter_meters),
            guidance: category.route_guidance().to_string(),
        })
    }

    /// Like `find_optimal_route`, but an empty registry may be replaced by the
    /// placeholder route when `allow_fallback` is set. Any other error still
    /// propagates.
    pub fn plan_route(
        &self,
        current: &Position,
        disaster: &Position,
        category: DisasterCategory,
        allow_fallback: bool,
    ) -> Result<RoutePlan> {
        match self.find_optimal_route(current, disaster, category) {
            Ok(route) => Ok(RoutePlan::Optimal(route)),
            Err(ResponseError::EmptyZoneRegistry) if allow_fallback => {
                warn!(category = %category, "no safe zones configured, using DEGRADED fallback route");
                Ok(RoutePlan::fallback())
            }
            Err(e) => Err(e),
        }
    }
}
