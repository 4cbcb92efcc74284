use serde::{Deserialize, Serialize};
use crate::config::constants::{DEFAULT_WIND_DIRECTION, MS_TO_KMH};
use crate::utils::errors::{ResponseError, Result};

/// One normalized climate record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensorReading {
    pub pressure: f64,       // hPa
    pub temperature: f64,    // degC
    pub humidity: f64,       // relative, %
    pub wind_speed: f64,     // m/s
    pub dew_point: f64,      // degC
    pub wind_direction: f64, // degrees
}

impl SensorReading {
    pub fn new(
        pressure: f64,
        temperature: f64,
        humidity: f64,
        wind_speed: f64,
        dew_point: f64,
        wind_direction: Option<f64>,
    ) -> Self {
        Self {
            pressure,
            temperature,
            humidity,
            wind_speed,
            dew_point,
            wind_direction: wind_direction.unwrap_or(DEFAULT_WIND_DIRECTION),
        }
    }

    /// Rejects readings the classifier has no defined behaviour for.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("pressure", self.pressure),
            ("temperature", self.temperature),
            ("humidity", self.humidity),
            ("wind_speed", self.wind_speed),
            ("dew_point", self.dew_point),
            ("wind_direction", self.wind_direction),
        ];

        for (name, value) in fields {
            if !value.is_finite() {
                return Err(ResponseError::InvalidReading(format!("{} is not finite ({})", name, value)));
            }
        }
        Ok(())
    }

    // The source data has no gust column, so the peak equals the mean.
    pub fn max_wind_speed(&self) -> f64 {
        self.wind_speed
    }

    pub fn wind_speed_kmh(&self) -> f64 {
        self.wind_speed * MS_TO_KMH
    }
}
