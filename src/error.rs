//! Error types for the ESP weather client
//!
//! The variants mirror the failure taxonomy surfaced to observers:
//! precondition, network, empty-body and parse failures, plus the
//! configuration and storage errors of the surrounding tooling.

use thiserror::Error;

/// Result type alias for sensor operations
pub type Result<T> = std::result::Result<T, WeatherError>;

/// Error types for ESP weather sensor operations
#[derive(Error, Debug)]
pub enum WeatherError {
    /// Connection errors (refused, unreachable, DNS)
    #[error("Connection error: {0}")]
    Connection(String),

    /// Request exceeded the connect or read timeout
    #[error("Timeout: {0}")]
    Timeout(String),

    /// HTTP client errors
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing errors
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// Device returned nothing
    #[error("Empty response body")]
    EmptyBody,

    /// No parse strategy extracted a reading
    #[error("Parse error: {0}")]
    Parse(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input errors (empty host, bad arguments)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Generic I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl WeatherError {
    /// Create a connection error
    pub fn connection<S: Into<String>>(msg: S) -> Self {
        Self::Connection(msg.into())
    }

    /// Create a timeout error
    pub fn timeout<S: Into<String>>(msg: S) -> Self {
        Self::Timeout(msg.into())
    }

    /// Create a parse error
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        Self::Parse(msg.into())
    }

    /// Create a configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Check if a later poll tick could plausibly succeed
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            WeatherError::Connection(_)
                | WeatherError::Timeout(_)
                | WeatherError::Http(_)
                | WeatherError::EmptyBody
        )
    }
}
