//! Configuration management for the sensor client and poller

pub mod host_store;

use crate::error::{Result, WeatherError};
use serde::{Deserialize, Serialize};
use std::{env, time::Duration};

/// Default connect and read timeout. Healthy devices answer well under a
/// second on a LAN; anything slower is treated as unreachable.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Default auto-refresh interval
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(10);

/// Sensor client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensorConfig {
    /// Sensor host or IP (e.g. "192.168.1.42")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    /// Connection timeout
    #[serde(with = "humantime_serde")]
    pub connect_timeout: Duration,

    /// Read timeout for the whole request
    #[serde(with = "humantime_serde")]
    pub read_timeout: Duration,

    /// Auto-refresh interval
    #[serde(with = "humantime_serde")]
    pub poll_interval: Duration,
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self {
            host: None,
            connect_timeout: DEFAULT_TIMEOUT,
            read_timeout: DEFAULT_TIMEOUT,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

impl SensorConfig {
    /// Load configuration from environment variables.
    ///
    /// `ESP_WEATHER_HOST` sets the sensor address, `ESP_WEATHER_TIMEOUT`
    /// the connect/read timeout in seconds, `ESP_WEATHER_INTERVAL` the
    /// auto-refresh interval in seconds.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(host) = env::var("ESP_WEATHER_HOST") {
            if !host.trim().is_empty() {
                config.host = Some(host.trim().to_string());
            }
        }

        if let Ok(secs) = env::var("ESP_WEATHER_TIMEOUT") {
            let secs = parse_seconds("ESP_WEATHER_TIMEOUT", &secs)?;
            config.connect_timeout = secs;
            config.read_timeout = secs;
        }

        if let Ok(secs) = env::var("ESP_WEATHER_INTERVAL") {
            config.poll_interval = parse_seconds("ESP_WEATHER_INTERVAL", &secs)?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.connect_timeout.is_zero() || self.read_timeout.is_zero() {
            return Err(WeatherError::config("timeouts must be non-zero"));
        }

        if self.poll_interval.is_zero() {
            return Err(WeatherError::config("poll interval must be non-zero"));
        }

        if let Some(host) = &self.host {
            if host.trim().is_empty() {
                return Err(WeatherError::config("sensor host must not be blank"));
            }
        }

        Ok(())
    }
}

fn parse_seconds(var: &str, value: &str) -> Result<Duration> {
    let secs: u64 = value
        .trim()
        .parse()
        .map_err(|_| WeatherError::config(format!("{var} must be whole seconds, got {value:?}")))?;
    Ok(Duration::from_secs(secs))
}
