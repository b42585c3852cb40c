//! Update the remembered sensor address for the ESP weather CLI

use clap::Parser;
use esp_weather_rust::{config::host_store::HostStore, Result};
use tracing::info;

/// Command line arguments
#[derive(Parser)]
#[command(name = "esp-weather-update-host")]
#[command(about = "Show or update the remembered sensor address")]
struct Cli {
    /// New sensor host or IP; prints the current one when omitted
    host: Option<String>,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt().with_env_filter("info").init();

    let cli = Cli::parse();

    // Use tokio runtime
    tokio::runtime::Runtime::new()?.block_on(async {
        let store = HostStore::from_user_dirs()?;

        match cli.host {
            Some(host) => {
                store.save(&host).await?;
                info!("✅ Remembered sensor address {host}");
                info!("   Stored in {}", store.path().display());
            }
            None => match store.load().await? {
                Some(host) => {
                    info!("Current sensor address: {host}");
                }
                None => {
                    eprintln!("❌ No sensor address stored yet");
                    eprintln!("💡 Run esp-weather-update-host <HOST> to set one");
                }
            },
        }

        Ok(())
    })
}
