//! Periodic polling scheduler
//!
//! Owns the auto-refresh lifecycle: `start` fires one pipeline run
//! immediately and then on every interval tick; `stop` cancels the pending
//! schedule. Starting while running is a no-op, so a UI toggle can never
//! stack a second timer stream.

use crate::error::{Result, WeatherError};
use crate::pipeline::ReadingPipeline;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info};

/// Scheduler lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollState {
    Idle,
    Running,
}

/// Repeating-poll scheduler with an idempotent start/stop lifecycle
pub struct PollScheduler {
    pipeline: Arc<ReadingPipeline>,
    task: Mutex<Option<JoinHandle<()>>>,
}

impl PollScheduler {
    /// Create a scheduler driving `pipeline`
    pub fn new(pipeline: Arc<ReadingPipeline>) -> Self {
        Self {
            pipeline,
            task: Mutex::new(None),
        }
    }

    /// Current lifecycle state
    pub async fn state(&self) -> PollState {
        match self.task.lock().await.as_ref() {
            Some(task) if !task.is_finished() => PollState::Running,
            _ => PollState::Idle,
        }
    }

    /// Start polling `host` every `poll_interval`.
    ///
    /// The first run fires immediately. A scheduler that is already
    /// running keeps its existing schedule and ignores the call. An empty
    /// host fails without transitioning to Running.
    pub async fn start(&self, host: &str, poll_interval: Duration) -> Result<()> {
        let host = host.trim().to_string();
        if host.is_empty() {
            return Err(WeatherError::invalid_input(
                "auto-refresh needs a sensor address",
            ));
        }

        let mut task = self.task.lock().await;
        if let Some(existing) = task.as_ref() {
            if !existing.is_finished() {
                debug!("poll scheduler already running, ignoring start");
                return Ok(());
            }
        }

        info!("starting auto-refresh for {host} every {poll_interval:?}");
        let pipeline = self.pipeline.clone();
        *task = Some(tokio::spawn(async move {
            let mut ticker = interval(poll_interval);
            // A slow run delays the next tick instead of burst-firing.
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                // The first tick completes immediately.
                ticker.tick().await;
                pipeline.run_once(&host).await;
            }
        }));

        Ok(())
    }

    /// Cancel the pending schedule and return to Idle. Safe to call when
    /// already Idle. A run dispatched before the call may still complete
    /// and deliver its outcome.
    pub async fn stop(&self) {
        let mut task = self.task.lock().await;
        if let Some(task) = task.take() {
            task.abort();
            info!("auto-refresh stopped");
        }
    }
}

impl Drop for PollScheduler {
    fn drop(&mut self) {
        if let Some(task) = self.task.get_mut().take() {
            task.abort();
        }
    }
}
