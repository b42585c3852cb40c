//! HTTP client implementation for ESP weather sensors
//!
//! Issues plain GET requests against the `/sensor` endpoint exposed by the
//! device firmware, with bounded connect and read timeouts so a dead
//! device can never stall the polling loop. No authentication, no extra
//! headers: the firmware serves anyone on the LAN.

use crate::client::{RawResponse, SensorClient};
use crate::config::SensorConfig;
use crate::error::{Result, WeatherError};
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use tracing::debug;
use url::Url;

/// Well-known endpoint served by the sensor firmware
const SENSOR_PATH: &str = "/sensor";

/// HTTP client for a LAN weather sensor
pub struct HttpSensorClient {
    /// HTTP client instance
    client: Client,
}

impl HttpSensorClient {
    /// Create a new HTTP client with timeouts from `config`
    pub fn new(config: &SensorConfig) -> Result<Self> {
        let client = ClientBuilder::new()
            .connect_timeout(config.connect_timeout)
            .timeout(config.read_timeout)
            .user_agent(format!("esp-weather-rust/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| WeatherError::connection(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { client })
    }

    /// Build the sensor URL for a host or IP.
    ///
    /// Bare `192.168.1.42` and `esp32.local:8080` are both accepted; a
    /// full URL keeps its scheme but has its path replaced.
    fn build_url(host: &str) -> Result<Url> {
        let host = host.trim();
        if host.is_empty() {
            return Err(WeatherError::invalid_input("no sensor address given"));
        }

        let raw = if host.contains("://") {
            host.to_string()
        } else {
            format!("http://{host}")
        };

        let mut url = Url::parse(&raw)
            .map_err(|e| WeatherError::config(format!("invalid sensor address {host:?}: {e}")))?;
        if url.host_str().is_none() {
            return Err(WeatherError::config(format!(
                "sensor address {host:?} has no host part"
            )));
        }
        url.set_path(SENSOR_PATH);
        Ok(url)
    }
}

#[async_trait]
impl SensorClient for HttpSensorClient {
    async fn fetch(&self, host: &str) -> Result<RawResponse> {
        let url = Self::build_url(host)?;
        debug!("GET {url}");

        let response = self.client.get(url.clone()).send().await.map_err(|e| {
            if e.is_timeout() {
                WeatherError::timeout(format!("request to {url} timed out: {e}"))
            } else if e.is_connect() {
                WeatherError::connection(format!("failed to reach {url}: {e}"))
            } else {
                WeatherError::Http(e)
            }
        })?;

        let status = response.status();
        // Keep the body on non-success statuses: some firmwares report
        // diagnostics with an error status and the parser can still
        // extract values from them.
        let body = response.text().await.map_err(|e| {
            WeatherError::connection(format!("failed to read response body: {e}"))
        })?;

        debug!("sensor answered {status}, {} bytes", body.len());

        Ok(RawResponse {
            body,
            status: status.as_u16(),
            ok: status.is_success(),
        })
    }
}
