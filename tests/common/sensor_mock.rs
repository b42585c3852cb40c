//! WireMock-based sensor device mocking
//!
//! Simulates the firmware's `/sensor` endpoint so pipeline behavior can be
//! tested without actual hardware.

use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

/// Mock sensor device for testing
pub struct MockSensorServer {
    pub server: MockServer,
}

impl MockSensorServer {
    /// Start a mock device answering `/sensor` with `body` and status 200
    pub async fn with_body(body: &str) -> Self {
        Self::with_response(ResponseTemplate::new(200).set_body_string(body)).await
    }

    /// Start a mock device answering `/sensor` with an arbitrary response
    pub async fn with_response(template: ResponseTemplate) -> Self {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/sensor"))
            .respond_with(template)
            .mount(&server)
            .await;

        Self { server }
    }

    /// Host string the way the CLI would receive it (no scheme)
    pub fn host(&self) -> String {
        self.server
            .uri()
            .trim_start_matches("http://")
            .to_string()
    }
}
