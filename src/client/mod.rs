//! Sensor client implementations for HTTP communication

pub mod http_client;

use crate::config::SensorConfig;
use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Body preview length used for diagnostics
const PREVIEW_LEN: usize = 160;

/// Raw response from one sensor query
///
/// Consumed once by the parser and then discarded. A non-success status
/// still carries whatever body the device produced, so diagnostic
/// responses can be surfaced instead of thrown away.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawResponse {
    /// Response body text (possibly empty)
    pub body: String,
    /// HTTP status code
    pub status: u16,
    /// Whether the status was in the success range
    pub ok: bool,
}

impl RawResponse {
    /// Truncated body preview for status displays and logs
    pub fn preview(&self) -> String {
        if self.body.chars().count() > PREVIEW_LEN {
            let head: String = self.body.chars().take(PREVIEW_LEN).collect();
            format!("{head}…")
        } else {
            self.body.clone()
        }
    }
}

/// Trait for sensor client implementations
#[async_trait]
pub trait SensorClient: Send + Sync {
    /// Perform one GET against the sensor endpoint on `host` and return
    /// the raw body plus status outcome
    async fn fetch(&self, host: &str) -> Result<RawResponse>;
}

/// Create the default client for the given configuration
pub fn create_client(config: &SensorConfig) -> Result<Arc<dyn SensorClient>> {
    let client = http_client::HttpSensorClient::new(config)?;
    Ok(Arc::new(client))
}
