//! ESP weather station client in Rust
//!
//! This crate polls an ESP32-class weather sensor over plain HTTP and
//! turns whatever the firmware answers into a classified reading. Device
//! firmwares are wildly inconsistent, so the response parser accepts a
//! JSON object, a comma-separated pair, or any text containing at least
//! two decimal numbers.
//!
//! # Features
//!
//! - Bounded-timeout HTTP fetch against the `/sensor` endpoint
//! - Three-strategy tolerant body parsing
//! - Comfort-band classification (cold / comfortable / warm / hot)
//! - Cancellable auto-refresh scheduler with idempotent start/stop
//! - Remembered last-used sensor address

// Core modules
pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod parser;
pub mod pipeline;
pub mod poller;
pub mod reading;

// Test support modules - available for both unit tests and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod mock;

// Re-export main types for convenience
pub use client::{create_client, RawResponse, SensorClient};
pub use config::SensorConfig;
pub use error::{Result, WeatherError};
pub use pipeline::{FailureStage, Outcome, ReadingObserver, ReadingPipeline};
pub use poller::{PollScheduler, PollState};
pub use reading::{ComfortBand, Reading};
