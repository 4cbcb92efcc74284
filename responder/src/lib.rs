// Main module declarations for the disaster responder

// Core decision engines
pub mod core {
    pub mod classifier;
    pub mod zone_registry;
    pub mod route_scorer;
    pub mod perturbation;
    pub mod assessment;
}

// Configuration modules
pub mod config {
    pub mod constants;
    pub mod response_config;
}

// Model definitions
pub mod models {
    pub mod sensor_reading;
    pub mod disaster;
}

// Data loaders and spatial primitives
pub mod data {
    pub mod position;
    pub mod climate_loader;
}

// Report rendering
pub mod analysis {
    pub mod reporting;
}

// Utility functions
pub mod utils {
    pub mod errors;
    pub mod logging;
}

// CLI interface
pub mod cli {
    pub mod cli;
}

// Re-export commonly used types
pub use crate::core::assessment::{assess, Responder, ResponseReport};
pub use crate::core::classifier::DisasterClassifier;
pub use crate::core::route_scorer::RouteScorer;
pub use crate::core::zone_registry::SafeZoneRegistry;
pub use crate::models::disaster::DisasterCategory;
pub use crate::models::sensor_reading::SensorReading;
pub use crate::utils::errors::ResponseError;
