//! ESP Weather CLI - Main Entry Point
//!
//! Maps the two core entry points onto subcommands: `fetch` performs one
//! pipeline run, `watch` drives the poll scheduler until interrupted.

use async_trait::async_trait;
use clap::{Parser, Subcommand};
use esp_weather_rust::{
    client::create_client,
    config::{host_store::HostStore, SensorConfig},
    logging::{init_logging, LogConfig},
    pipeline::{Outcome, ReadingObserver, ReadingPipeline},
    poller::PollScheduler,
    ComfortBand, Result, WeatherError,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Command line arguments
#[derive(Parser)]
#[command(name = "esp-weather")]
#[command(about = "ESP32 weather sensor client")]
#[command(version)]
struct Cli {
    /// Sensor host or IP; falls back to the remembered address
    #[arg(short = 'H', long, env = "ESP_WEATHER_HOST", global = true)]
    host: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a single reading and exit
    Fetch,
    /// Poll the sensor until interrupted
    Watch {
        /// Refresh interval in seconds
        #[arg(short, long)]
        interval: Option<u64>,
    },
}

/// Renders outcomes as console lines
struct ConsoleObserver;

#[async_trait]
impl ReadingObserver for ConsoleObserver {
    async fn on_outcome(&self, outcome: &Outcome) {
        match outcome {
            Outcome::Success {
                reading,
                band,
                fetched_at,
            } => {
                println!(
                    "{} Temp: {}  Humidity: {}  ({band}, updated {})",
                    band_glyph(*band),
                    reading.format_temperature(),
                    reading.format_humidity(),
                    fetched_at.format("%H:%M:%S"),
                );
            }
            Outcome::Failure { stage, message } => {
                println!("⚠ {stage}: {message}");
            }
        }
    }
}

/// Icon shown next to a classified reading
fn band_glyph(band: ComfortBand) -> &'static str {
    match band {
        ComfortBand::Cold => "❄",
        ComfortBand::Comfortable => "☁",
        ComfortBand::Warm => "☀",
        ComfortBand::Hot => "🔥",
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = init_logging(LogConfig::from_env()) {
        eprintln!("Failed to initialize logging: {e}");
        std::process::exit(1);
    }

    let config = SensorConfig::from_env()?;
    let store = HostStore::from_user_dirs()?;

    // CLI flag wins, then environment, then the remembered address.
    let host = match cli.host.or_else(|| config.host.clone()) {
        Some(host) => host,
        None => store.load().await?.ok_or_else(|| {
            WeatherError::invalid_input(
                "no sensor address: pass --host, set ESP_WEATHER_HOST, \
                 or run esp-weather-update-host",
            )
        })?,
    };

    let client = create_client(&config)?;
    let pipeline = Arc::new(ReadingPipeline::new(client, Arc::new(ConsoleObserver)));

    match cli.command {
        Commands::Fetch => {
            info!("fetching one reading from {host}");
            let outcome = pipeline.run_once(&host).await;
            store.save(&host).await?;
            if !outcome.is_success() {
                std::process::exit(1);
            }
        }
        Commands::Watch { interval } => {
            let poll_interval = interval
                .map(Duration::from_secs)
                .unwrap_or(config.poll_interval);

            let scheduler = PollScheduler::new(pipeline);
            scheduler.start(&host, poll_interval).await?;
            store.save(&host).await?;
            info!("polling {host} every {poll_interval:?}; press Ctrl-C to stop");

            tokio::signal::ctrl_c().await?;
            scheduler.stop().await;
        }
    }

    Ok(())
}
