//! Sensor reading model and comfort classification

use serde::{Deserialize, Serialize};
use std::fmt;

/// Band thresholds in °C. Each band is inclusive on its lower bound, so
/// every finite temperature maps to exactly one band.
pub const COLD_BELOW: f64 = 15.0;
pub const WARM_FROM: f64 = 28.0;
pub const HOT_FROM: f64 = 35.0;

/// A parsed (temperature, humidity) pair from one sensor response
///
/// Values are taken from the device as-is: the parser performs no bounds
/// validation, so humidity above 100 % is representable on purpose.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Temperature in °C
    pub temperature: f64,
    /// Relative humidity in percent
    pub humidity: f64,
}

impl Reading {
    /// Create a new reading
    pub fn new(temperature: f64, humidity: f64) -> Self {
        Self {
            temperature,
            humidity,
        }
    }

    /// Comfort band for this reading's temperature
    pub fn band(&self) -> ComfortBand {
        ComfortBand::classify(self.temperature)
    }

    /// Formatted temperature, e.g. "23.5°C"
    pub fn format_temperature(&self) -> String {
        format!("{:.1}°C", self.temperature)
    }

    /// Formatted humidity, e.g. "60%"
    pub fn format_humidity(&self) -> String {
        format!("{}%", self.humidity.round() as i64)
    }
}

/// Discrete comfort classification of a temperature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComfortBand {
    Cold,
    Comfortable,
    Warm,
    Hot,
}

impl ComfortBand {
    /// Classify a temperature into its comfort band
    pub fn classify(temperature: f64) -> Self {
        if temperature < COLD_BELOW {
            Self::Cold
        } else if temperature < WARM_FROM {
            Self::Comfortable
        } else if temperature < HOT_FROM {
            Self::Warm
        } else {
            Self::Hot
        }
    }
}

impl fmt::Display for ComfortBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Cold => "cold",
            Self::Comfortable => "comfortable",
            Self::Warm => "warm",
            Self::Hot => "hot",
        };
        write!(f, "{label}")
    }
}
