pub mod bus;
pub mod config;
pub mod error;
pub mod models;

mod collector;
mod utils;

pub use bus::{BusPaths, W1Bus};
pub use error::Ds18b20Error;
pub use models::{Reading, Sensor};

use crate::config::{AppConfig, OutputFormat};
use anyhow::Context;
use log::{debug, error, info};

/// List the sensors on the configured bus, read each once and print the
/// readings to stdout.
pub async fn run(config: AppConfig) -> anyhow::Result<()> {
    info!("Starting application");

    match read_all(&config).await {
        Ok(count) => info!("Read {} sensors", count),
        Err(e) => {
            error!("Application error: {e:#}");
            // Print chain of error causes
            let mut source = e.source();
            while let Some(e) = source {
                error!("Caused by: {e}");
                source = e.source();
            }
            return Err(e).context("Application failed to run");
        }
    }

    Ok(())
}

async fn read_all(config: &AppConfig) -> anyhow::Result<usize> {
    let bus = W1Bus::new(config.bus_paths());
    let listing = bus.paths().master_listing();
    debug!("Listing sensors from {}", listing.display());

    let sensors = bus
        .list_sensors()
        .with_context(|| format!("Failed to list sensors from {}", listing.display()))?;

    let readings = collector::collect_readings(&bus, sensors, config).await;
    for reading in &readings {
        match config.output.format {
            OutputFormat::Text => println!("{}", reading.display()),
            OutputFormat::Json => {
                let line = serde_json::to_string(reading).context("Failed to encode reading")?;
                println!("{}", line);
            }
        }
    }

    Ok(readings.len())
}
