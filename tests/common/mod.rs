//! Shared test infrastructure
#![allow(dead_code)]

pub mod sensor_mock;

use esp_weather_rust::config::SensorConfig;
use std::time::Duration;

/// Config with short timeouts suitable for tests
pub fn create_test_config() -> SensorConfig {
    SensorConfig {
        host: None,
        connect_timeout: Duration::from_millis(500),
        read_timeout: Duration::from_millis(500),
        poll_interval: Duration::from_millis(50),
    }
}
