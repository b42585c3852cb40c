//! Mock implementations for testing
//!
//! This module provides a scriptable sensor client so pipeline and poller
//! behavior can be tested without a device or a network.

use crate::client::{RawResponse, SensorClient};
use crate::error::{Result, WeatherError};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Mock sensor client returning scripted responses
pub struct MockSensorClient {
    body: String,
    status: u16,
    fail_with: Option<String>,
    fetch_count: AtomicUsize,
}

impl MockSensorClient {
    /// Create a mock answering with a well-formed JSON body
    pub fn new() -> Self {
        Self {
            body: r#"{"temp":21.0,"hum":50.0}"#.to_string(),
            status: 200,
            fail_with: None,
            fetch_count: AtomicUsize::new(0),
        }
    }

    /// Set the scripted response body
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Set the scripted HTTP status
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    /// Make every fetch fail with a connection error
    pub fn failing(mut self, message: impl Into<String>) -> Self {
        self.fail_with = Some(message.into());
        self
    }

    /// Number of fetches performed so far
    pub fn fetch_count(&self) -> usize {
        self.fetch_count.load(Ordering::SeqCst)
    }
}

impl Default for MockSensorClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SensorClient for MockSensorClient {
    async fn fetch(&self, host: &str) -> Result<RawResponse> {
        self.fetch_count.fetch_add(1, Ordering::SeqCst);

        if host.trim().is_empty() {
            return Err(WeatherError::invalid_input("no sensor address given"));
        }

        if let Some(message) = &self.fail_with {
            return Err(WeatherError::connection(message.clone()));
        }

        Ok(RawResponse {
            body: self.body.clone(),
            status: self.status,
            ok: (200..300).contains(&self.status),
        })
    }
}
