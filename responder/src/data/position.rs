use serde::{Deserialize, Serialize};
use crate::config::constants::{MAP_MIN, MAP_MAX};

/// A point in the normalized city square [0,1]x[0,1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    /// Builds a position, clamping both axes into the unit square.
    pub fn new(x: f64, y: f64) -> Self {
        let x = x.clamp(MAP_MIN, MAP_MAX);
        let y = y.clamp(MAP_MIN, MAP_MAX);
        Self { x, y }
    }

    pub fn from_tuple((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }

    pub fn is_within_bounds(&self) -> bool {
        (MAP_MIN..=MAP_MAX).contains(&self.x) && (MAP_MIN..=MAP_MAX).contains(&self.y)
    }

    pub fn distance_to(&self, other: &Position) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Distance in whole meters, truncated, for a city of the given diameter.
    pub fn distance_meters(&self, other: &Position, city_diameter_meters: f64) -> u32 {
        to_meters(self.distance_to(other), city_diameter_meters)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.x, self.y)
    }
}

pub fn to_meters(normalized: f64, city_diameter_meters: f64) -> u32 {
    (normalized * city_diameter_meters) as u32
}
