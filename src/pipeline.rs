//! Reading pipeline: fetch, parse, classify, deliver
//!
//! One `run_once` call performs the full fetch → parse → classify sequence
//! and emits exactly one [`Outcome`] to the registered observer, success or
//! not. Failures never escape as errors: they are folded into the outcome
//! so a polling loop survives flaky devices and keeps ticking.

use crate::client::SensorClient;
use crate::error::WeatherError;
use crate::parser;
use crate::reading::{ComfortBand, Reading};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// Pipeline stage at which a run failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailureStage {
    /// No sensor address was configured
    NoAddress,
    /// The device could not be reached or the transfer failed
    Network,
    /// The device answered with an empty body
    EmptyBody,
    /// No parse strategy extracted two numbers
    Unparseable,
}

impl fmt::Display for FailureStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Self::NoAddress => "no-address",
            Self::Network => "network",
            Self::EmptyBody => "empty-body",
            Self::Unparseable => "unparseable",
        };
        write!(f, "{tag}")
    }
}

/// Result of one pipeline run, delivered atomically to the observer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "lowercase")]
pub enum Outcome {
    /// The device produced a classified reading
    Success {
        reading: Reading,
        band: ComfortBand,
        fetched_at: DateTime<Utc>,
    },
    /// The run failed at `stage`
    Failure {
        stage: FailureStage,
        message: String,
    },
}

impl Outcome {
    /// Whether this outcome carries a reading
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }

    fn failure(stage: FailureStage, message: impl Into<String>) -> Self {
        Self::Failure {
            stage,
            message: message.into(),
        }
    }
}

/// Receives the outcome of every pipeline run.
///
/// Implementations must tolerate a late outcome arriving after the
/// scheduler was stopped: a run dispatched before `stop()` may still
/// complete and deliver.
#[async_trait]
pub trait ReadingObserver: Send + Sync {
    /// Called exactly once per pipeline run
    async fn on_outcome(&self, outcome: &Outcome);
}

/// Orchestrates fetch, parse and classification for one sensor
pub struct ReadingPipeline {
    client: Arc<dyn SensorClient>,
    observer: Arc<dyn ReadingObserver>,
}

impl ReadingPipeline {
    /// Create a pipeline delivering outcomes to `observer`
    pub fn new(client: Arc<dyn SensorClient>, observer: Arc<dyn ReadingObserver>) -> Self {
        Self { client, observer }
    }

    /// Run the full sequence once against `host` and deliver the outcome.
    ///
    /// Every exit path produces exactly one outcome; the observer sees it
    /// before it is returned to the caller.
    pub async fn run_once(&self, host: &str) -> Outcome {
        let outcome = self.execute(host).await;
        if let Outcome::Failure { stage, message } = &outcome {
            warn!("sensor poll failed at {stage}: {message}");
        }
        self.observer.on_outcome(&outcome).await;
        outcome
    }

    async fn execute(&self, host: &str) -> Outcome {
        if host.trim().is_empty() {
            return Outcome::failure(FailureStage::NoAddress, "no sensor address configured");
        }

        let raw = match self.client.fetch(host).await {
            Ok(raw) => raw,
            Err(e) => return Outcome::failure(FailureStage::Network, e.to_string()),
        };

        if !raw.ok {
            debug!(
                "device answered with status {}, trying to parse the body anyway",
                raw.status
            );
        }
        debug!("raw sensor response: {}", raw.preview());

        let reading = match parser::parse_reading(&raw.body) {
            Ok(reading) => reading,
            Err(WeatherError::EmptyBody) => {
                return Outcome::failure(FailureStage::EmptyBody, "device returned an empty body")
            }
            Err(e) => return Outcome::failure(FailureStage::Unparseable, e.to_string()),
        };

        let band = ComfortBand::classify(reading.temperature);
        Outcome::Success {
            reading,
            band,
            fetched_at: Utc::now(),
        }
    }
}
