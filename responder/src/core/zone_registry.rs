use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::constants::DEFAULT_SAFE_ZONES;
use crate::data::position::Position;
use crate::utils::errors::{ResponseError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SafeZone {
    pub name: String,
    pub position: Position,
}

impl SafeZone {
    pub fn new(name: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            name: name.into(),
            position: Position::new(x, y),
        }
    }
}

/// Ordered, read-only set of evacuation destinations.
///
/// Iteration order is insertion order and decides score ties.
#[derive(Debug, Clone, PartialEq)]
pub struct SafeZoneRegistry {
    zones: Vec<SafeZone>,
}

impl Default for SafeZoneRegistry {
    fn default() -> Self {
        Self {
            zones: DEFAULT_SAFE_ZONES
                .iter()
                .map(|(name, x, y)| SafeZone::new(*name, *x, *y))
                .collect(),
        }
    }
}

impl SafeZoneRegistry {
    /// Builds a registry, failing fast when no zones are supplied.
    pub fn new(zones: Vec<SafeZone>) -> Result<Self> {
        if zones.is_empty() {
            return Err(ResponseError::EmptyZoneRegistry);
        }
        debug!(zones = zones.len(), "safe zone registry built");
        Ok(Self { zones })
    }

    /// A registry with no zones. Scoring against it always fails.
    pub fn empty() -> Self {
        Self { zones: Vec::new() }
    }

    pub fn zones(&self) -> &[SafeZone] {
        &self.zones
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}
