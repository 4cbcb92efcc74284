// Evacuation Constants
pub const EVACUATION_RISK_THRESHOLD: f64 = 70.0;     // Risk percentage at or above which evacuation is advised
pub const CITY_DIAMETER_METERS: f64 = 2000.0;        // One unit of normalized distance
pub const POSITION_PERTURBATION: f64 = 0.15;         // Max offset of current position per axis

// Normalized space bounds
pub const MAP_MIN: f64 = 0.0;
pub const MAP_MAX: f64 = 1.0;
pub const CITY_CENTER: (f64, f64) = (0.5, 0.5);

// Canonical disaster epicenters
pub const CYCLONE_EPICENTER: (f64, f64) = (0.85, 0.25);
pub const FLOOD_EPICENTER: (f64, f64) = (0.55, 0.15);
pub const HEAT_WAVE_EPICENTER: (f64, f64) = (0.40, 0.60);
pub const BLIZZARD_EPICENTER: (f64, f64) = (0.45, 0.85);
pub const EARTHQUAKE_EPICENTER: (f64, f64) = (0.50, 0.50);
pub const NORMAL_EPICENTER: (f64, f64) = (0.50, 0.50);

// Default safe zones, in registry order
pub const DEFAULT_SAFE_ZONES: [(&str, f64, f64); 4] = [
    ("SAFE_ZONE_SW", 0.1, 0.1),
    ("SAFE_ZONE_NW", 0.1, 0.9),
    ("SAFE_ZONE_SE", 0.9, 0.1),
    ("SAFE_ZONE_NE", 0.9, 0.9),
];

// Heat wave rule
pub const HEAT_WAVE_MIN_TEMP: f64 = 35.0;
pub const HEAT_WAVE_MIN_HUMIDITY: f64 = 60.0;
pub const HEAT_WAVE_BASE_RISK: f64 = 70.0;
pub const HEAT_WAVE_RISK_PER_DEGREE: f64 = 1.2;
pub const HEAT_WAVE_MAX_RISK: f64 = 95.0;

// Cyclone rule
pub const CYCLONE_MIN_WIND: f64 = 15.0;
pub const CYCLONE_MAX_PRESSURE: f64 = 980.0;
pub const CYCLONE_BASE_RISK: f64 = 75.0;
pub const CYCLONE_RISK_PER_HPA: f64 = 0.1;
pub const CYCLONE_MAX_RISK: f64 = 98.0;

// Flood rule
pub const FLOOD_MIN_HUMIDITY: f64 = 90.0;
pub const FLOOD_MIN_TEMP: f64 = 5.0;
pub const FLOOD_BASE_RISK: f64 = 65.0;
pub const FLOOD_RISK_PER_PERCENT: f64 = 0.8;
pub const FLOOD_MAX_RISK: f64 = 90.0;

// Blizzard rule
pub const BLIZZARD_MAX_TEMP: f64 = -5.0;
pub const BLIZZARD_MIN_WIND: f64 = 8.0;
pub const BLIZZARD_BASE_RISK: f64 = 70.0;
pub const BLIZZARD_RISK_PER_DEGREE: f64 = 0.7;
pub const BLIZZARD_MAX_RISK: f64 = 88.0;

// Earthquake rule
pub const EARTHQUAKE_MAX_PRESSURE: f64 = 970.0;
pub const EARTHQUAKE_RISK: f64 = 80.0;

// Normal conditions
pub const NORMAL_COMFORT_TEMP: f64 = 15.0;
pub const NORMAL_BASE_RISK: f64 = 30.0;
pub const NORMAL_MIN_RISK: f64 = 10.0;

// Risk bounds
pub const MIN_RISK: f64 = 0.0;
pub const MAX_RISK: f64 = 100.0;

// Route scoring bias weights
pub const FLOOD_ELEVATION_WEIGHT: f64 = 10.0;
pub const BLIZZARD_ELEVATION_WEIGHT: f64 = 10.0;
pub const EARTHQUAKE_CENTER_WEIGHT: f64 = 20.0;
pub const INLAND_WEIGHT: f64 = 15.0;

// Safety status bands
pub const CRITICAL_RISK: f64 = 85.0;
pub const HIGH_RISK: f64 = 70.0;
pub const MEDIUM_RISK: f64 = 50.0;

// Degraded route placeholder
pub const FALLBACK_ROUTE_METERS: u32 = 450;
pub const FALLBACK_DESTINATION: &str = "SAFE_ZONE";

// Dataset
pub const DEFAULT_DATASET_PATH: &str = "data/jena_climate_2009_2016.csv";
pub const DATASET_DOWNLOAD_URL: &str =
    "https://storage.googleapis.com/tensorflow/tf-keras-datasets/jena_climate_2009_2016.csv.zip";
pub const HOURLY_SAMPLE_STRIDE: usize = 6;           // Records are every 10 minutes
pub const DEFAULT_WIND_DIRECTION: f64 = 180.0;
pub const MS_TO_KMH: f64 = 3.6;
