//! Logging configuration
//!
//! Structured logging via tracing with env-based filtering and optional
//! file output.

use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Log level
    pub level: Level,

    /// Log to file
    pub file_path: Option<PathBuf>,

    /// Log to stderr
    pub stderr: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            file_path: None,
            stderr: true,
        }
    }
}

impl LogConfig {
    /// Create config from environment
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(rust_log) = std::env::var("RUST_LOG") {
            if rust_log.contains("trace") {
                config.level = Level::TRACE;
            } else if rust_log.contains("debug") {
                config.level = Level::DEBUG;
            } else if rust_log.contains("warn") {
                config.level = Level::WARN;
            } else if rust_log.contains("error") {
                config.level = Level::ERROR;
            }
        }

        if let Ok(log_file) = std::env::var("ESP_WEATHER_LOG_FILE") {
            config.file_path = Some(PathBuf::from(log_file));
        }

        if let Ok(log_stderr) = std::env::var("ESP_WEATHER_LOG_STDERR") {
            config.stderr = log_stderr.to_lowercase() != "false";
        }

        config
    }
}

/// Initialize logging with the given configuration
pub fn init_logging(config: LogConfig) -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(config.level.into())
        .from_env_lossy();

    let registry = tracing_subscriber::registry().with(env_filter);

    match (config.stderr, config.file_path) {
        (true, Some(file_path)) => {
            let file_layer = file_layer(&file_path)?;
            registry
                .with(stderr_layer())
                .with(file_layer)
                .try_init()?;
        }
        (true, None) => {
            registry.with(stderr_layer()).try_init()?;
        }
        (false, Some(file_path)) => {
            let file_layer = file_layer(&file_path)?;
            registry.with(file_layer).try_init()?;
        }
        (false, None) => {
            registry.try_init()?;
        }
    }

    Ok(())
}

fn stderr_layer<S>() -> impl tracing_subscriber::Layer<S>
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
}

fn file_layer<S>(
    file_path: &Path,
) -> Result<impl tracing_subscriber::Layer<S>, Box<dyn std::error::Error>>
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let directory = file_path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    let file_name = file_path
        .file_name()
        .map(std::ffi::OsStr::to_os_string)
        .unwrap_or_else(|| "esp-weather.log".into());

    let appender = tracing_appender::rolling::never(directory, file_name);
    Ok(fmt::layer()
        .with_writer(appender)
        .with_ansi(false)
        .with_target(true))
}
