use serde::{Deserialize, Serialize};
use crate::config::constants::*;
use crate::data::position::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisasterCategory {
    HeatWave,
    Cyclone,
    Flood,
    Blizzard,
    Earthquake,
    Normal,
}

impl DisasterCategory {
    pub const ALL: [DisasterCategory; 6] = [
        DisasterCategory::HeatWave,
        DisasterCategory::Cyclone,
        DisasterCategory::Flood,
        DisasterCategory::Blizzard,
        DisasterCategory::Earthquake,
        DisasterCategory::Normal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DisasterCategory::HeatWave => "heat_wave",
            DisasterCategory::Cyclone => "cyclone",
            DisasterCategory::Flood => "flood",
            DisasterCategory::Blizzard => "blizzard",
            DisasterCategory::Earthquake => "earthquake",
            DisasterCategory::Normal => "normal",
        }
    }

    /// Canonical epicenter of this category in normalized space.
    pub fn epicenter(&self) -> Position {
        let coords = match self {
            DisasterCategory::Cyclone => CYCLONE_EPICENTER,
            DisasterCategory::Flood => FLOOD_EPICENTER,
            DisasterCategory::HeatWave => HEAT_WAVE_EPICENTER,
            DisasterCategory::Blizzard => BLIZZARD_EPICENTER,
            DisasterCategory::Earthquake => EARTHQUAKE_EPICENTER,
            DisasterCategory::Normal => NORMAL_EPICENTER,
        };
        Position::from_tuple(coords)
    }

    /// Guidance attached to an evacuation route for this category.
    pub fn route_guidance(&self) -> &'static str {
        match self {
            DisasterCategory::Flood => "Route prioritizes high-elevation safe zones",
            DisasterCategory::Blizzard => "Route minimizes exposure to high-elevation zones",
            DisasterCategory::Earthquake => "Route maximizes distance from city center",
            DisasterCategory::Cyclone => "Route maximizes inland distance from coast",
            DisasterCategory::HeatWave => "Route prioritizes shaded/cool zones",
            DisasterCategory::Normal => "Standard evacuation route",
        }
    }
}

impl std::fmt::Display for DisasterCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
