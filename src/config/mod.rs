use crate::bus::BusPaths;
use anyhow::{Context, Result};
use config::{Config, File};
use indexmap::IndexMap;
use log::{debug, info, LevelFilter};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(rename = "BUS", alias = "bus", default)]
    pub bus: BusPaths,
    /// Sensor name to display label, e.g. `28-000000000001 = "Kitchen"`.
    #[serde(rename = "SENSORS", alias = "sensors", default)]
    pub sensors: IndexMap<String, String>,
    #[serde(rename = "OUTPUT", alias = "output", default)]
    pub output: OutputConfig,
    #[serde(rename = "LOGGING", alias = "logging", default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    pub fn new() -> Result<Self> {
        Self::from_file("config.ini")
    }

    pub fn get_log_level(&self) -> LevelFilter {
        match self.logging.level.to_lowercase().as_str() {
            "trace" => LevelFilter::Trace,
            "debug" => LevelFilter::Debug,
            "info" => LevelFilter::Info,
            "warn" => LevelFilter::Warn,
            "error" => LevelFilter::Error,
            "off" => LevelFilter::Off,
            _ => LevelFilter::Info, // Default to Info if invalid
        }
    }

    pub fn bus_paths(&self) -> BusPaths {
        self.bus.clone()
    }

    /// Label for a sensor, falling back to its name.
    pub fn label_for(&self, name: &str) -> String {
        self.sensors
            .get(name)
            .cloned()
            .unwrap_or_else(|| name.to_string())
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config_path = path.as_ref();
        debug!("Loading configuration from {}", config_path.display());

        let config = Config::builder()
            .add_source(File::from(config_path).format(config::FileFormat::Ini))
            .build()
            .context(format!("Failed to load config from {}", config_path.display()))?;

        let app_config: AppConfig = config.try_deserialize()
            .context("Failed to deserialize config")?;

        Ok(app_config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let config_path = path.as_ref();

        let mut config_str = String::new();

        config_str.push_str(&format!(
            "[BUS]\nroot = {}\nmaster_dir = {}\nmaster_file = {}\nsensor_file = {}\n\n",
            self.bus.root.display(),
            self.bus.master_dir,
            self.bus.master_file,
            self.bus.sensor_file
        ));

        let format = match self.output.format {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        };
        config_str.push_str(&format!("[OUTPUT]\nformat = {}\n\n", format));

        config_str.push_str(&format!("[LOGGING]\nlevel = {}\n\n", self.logging.level));

        if !self.sensors.is_empty() {
            config_str.push_str("[SENSORS]\n");
            for (name, label) in &self.sensors {
                config_str.push_str(&format!("{} = \"{}\"\n", name, label));
            }
        }

        fs::write(config_path, config_str)
            .context(format!("Failed to save config to {}", config_path.display()))?;

        info!("Configuration saved to {}", config_path.display());
        Ok(())
    }
}
