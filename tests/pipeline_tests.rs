//! Integration tests for the reading pipeline against a mock device

mod common;

use async_trait::async_trait;
use common::sensor_mock::MockSensorServer;
use common::create_test_config;
use esp_weather_rust::{
    client::create_client,
    pipeline::{FailureStage, Outcome, ReadingObserver, ReadingPipeline},
    ComfortBand,
};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use wiremock::ResponseTemplate;

/// Observer that records every delivered outcome
#[derive(Default)]
struct RecordingObserver {
    outcomes: Mutex<Vec<Outcome>>,
}

impl RecordingObserver {
    fn outcomes(&self) -> Vec<Outcome> {
        self.outcomes.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReadingObserver for RecordingObserver {
    async fn on_outcome(&self, outcome: &Outcome) {
        self.outcomes.lock().unwrap().push(outcome.clone());
    }
}

fn pipeline_for_tests() -> (Arc<ReadingPipeline>, Arc<RecordingObserver>) {
    let observer = Arc::new(RecordingObserver::default());
    let client = create_client(&create_test_config()).unwrap();
    let pipeline = Arc::new(ReadingPipeline::new(client, observer.clone()));
    (pipeline, observer)
}

fn expect_success(outcome: &Outcome) -> (f64, f64, ComfortBand) {
    match outcome {
        Outcome::Success { reading, band, .. } => (reading.temperature, reading.humidity, *band),
        Outcome::Failure { stage, message } => {
            panic!("expected success, got failure at {stage}: {message}")
        }
    }
}

fn expect_failure(outcome: &Outcome) -> FailureStage {
    match outcome {
        Outcome::Failure { stage, .. } => *stage,
        Outcome::Success { .. } => panic!("expected failure, got success"),
    }
}

#[tokio::test]
async fn json_body_yields_classified_reading() {
    let device = MockSensorServer::with_body(r#"{"temp":23.5,"hum":60.0}"#).await;
    let (pipeline, observer) = pipeline_for_tests();

    let outcome = pipeline.run_once(&device.host()).await;

    let (temperature, humidity, band) = expect_success(&outcome);
    assert_eq!(temperature, 23.5);
    assert_eq!(humidity, 60.0);
    assert_eq!(band, ComfortBand::Comfortable);

    // Delivered exactly once, and the delivered outcome is the returned one.
    let delivered = observer.outcomes();
    assert_eq!(delivered.len(), 1);
    assert_eq!(delivered[0], outcome);
}

#[tokio::test]
async fn csv_body_yields_reading() {
    let device = MockSensorServer::with_body("23.4,55.2").await;
    let (pipeline, _observer) = pipeline_for_tests();

    let outcome = pipeline.run_once(&device.host()).await;

    let (temperature, humidity, _) = expect_success(&outcome);
    assert_eq!(temperature, 23.4);
    assert_eq!(humidity, 55.2);
}

#[tokio::test]
async fn free_text_body_yields_cold_reading() {
    let device = MockSensorServer::with_body("Temp is -2.5C and Humidity 88%").await;
    let (pipeline, _observer) = pipeline_for_tests();

    let outcome = pipeline.run_once(&device.host()).await;

    let (temperature, _, band) = expect_success(&outcome);
    assert_eq!(temperature, -2.5);
    assert_eq!(band, ComfortBand::Cold);
}

#[tokio::test]
async fn error_status_with_parseable_body_still_succeeds() {
    // Some firmwares answer diagnostics with a 500 but the values are
    // right there in the body.
    let device = MockSensorServer::with_response(
        ResponseTemplate::new(500).set_body_string("ERR overheating temp 41.2 hum 13"),
    )
    .await;
    let (pipeline, _observer) = pipeline_for_tests();

    let outcome = pipeline.run_once(&device.host()).await;

    let (temperature, humidity, band) = expect_success(&outcome);
    assert_eq!(temperature, 41.2);
    assert_eq!(humidity, 13.0);
    assert_eq!(band, ComfortBand::Hot);
}

#[tokio::test]
async fn empty_body_fails_at_empty_body_stage() {
    let device = MockSensorServer::with_body("").await;
    let (pipeline, observer) = pipeline_for_tests();

    let outcome = pipeline.run_once(&device.host()).await;

    assert_eq!(expect_failure(&outcome), FailureStage::EmptyBody);
    assert_eq!(observer.outcomes().len(), 1);
}

#[tokio::test]
async fn unparseable_body_fails_at_unparseable_stage() {
    let device = MockSensorServer::with_body("no data").await;
    let (pipeline, _observer) = pipeline_for_tests();

    let outcome = pipeline.run_once(&device.host()).await;

    assert_eq!(expect_failure(&outcome), FailureStage::Unparseable);
}

#[tokio::test]
async fn empty_host_fails_at_no_address_stage() {
    let (pipeline, observer) = pipeline_for_tests();

    let outcome = pipeline.run_once("   ").await;

    assert_eq!(expect_failure(&outcome), FailureStage::NoAddress);
    assert_eq!(observer.outcomes().len(), 1);
}

#[tokio::test]
async fn unreachable_device_fails_at_network_stage() {
    let (pipeline, observer) = pipeline_for_tests();

    // Reserved port with nothing listening.
    let outcome = pipeline.run_once("127.0.0.1:9").await;

    assert_eq!(expect_failure(&outcome), FailureStage::Network);
    assert_eq!(observer.outcomes().len(), 1);
}

#[tokio::test]
async fn read_timeout_fails_at_network_stage() {
    // Device answers, but slower than the 500 ms test read timeout; the
    // parser must never see a body.
    let device = MockSensorServer::with_response(
        ResponseTemplate::new(200)
            .set_body_string(r#"{"temp":23.5,"hum":60.0}"#)
            .set_delay(Duration::from_secs(2)),
    )
    .await;
    let (pipeline, observer) = pipeline_for_tests();

    let outcome = pipeline.run_once(&device.host()).await;

    let stage = expect_failure(&outcome);
    assert_eq!(stage, FailureStage::Network);
    match &observer.outcomes()[0] {
        Outcome::Failure { message, .. } => {
            assert!(message.to_lowercase().contains("timed out"), "{message}")
        }
        Outcome::Success { .. } => panic!("expected failure"),
    }
}

#[tokio::test]
async fn each_run_delivers_exactly_one_outcome() {
    let device = MockSensorServer::with_body("21.0,45.0").await;
    let (pipeline, observer) = pipeline_for_tests();

    pipeline.run_once(&device.host()).await;
    pipeline.run_once("").await;
    pipeline.run_once(&device.host()).await;

    assert_eq!(observer.outcomes().len(), 3);
}
