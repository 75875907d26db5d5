//! Application configuration
//!
//! Loaded from a TOML file (default `~/.config/toll-calculator/config.toml`).
//! Every section is optional and falls back to its defaults.

use std::path::{Path, PathBuf};

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::shared::errors::InfraError;

/// Environment variable that overrides the configuration path.
pub const CONFIG_ENV: &str = "TOLL_CONFIG";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub tolls: TollsConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing` filter directive, e.g. `info` or `toll_calculator=debug`
    pub level: String,
    /// `pretty` or `json`
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TollsConfig {
    /// Tariff document; relative paths are resolved against the config file.
    pub tariff_file: PathBuf,
    /// IANA zone in which calendar days are measured.
    pub reference_zone: String,
}

impl Default for TollsConfig {
    fn default() -> Self {
        Self {
            tariff_file: PathBuf::from("tariffs.json"),
            reference_zone: "UTC".to_string(),
        }
    }
}

impl TollsConfig {
    pub fn zone(&self) -> Result<Tz, InfraError> {
        self.reference_zone
            .parse::<Tz>()
            .map_err(|_| InfraError::TimeZone(self.reference_zone.clone()))
    }
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self, InfraError> {
        let text = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml(&text)?;

        if config.tolls.tariff_file.is_relative() {
            if let Some(dir) = path.parent() {
                config.tolls.tariff_file = dir.join(&config.tolls.tariff_file);
            }
        }

        Ok(config)
    }

    pub fn from_toml(text: &str) -> Result<Self, InfraError> {
        let config: Self = toml::from_str(text)?;
        config.tolls.zone()?;
        Ok(config)
    }
}

/// Configuration path: `$TOLL_CONFIG`, else `<config dir>/toll-calculator/config.toml`.
pub fn default_config_path() -> PathBuf {
    if let Ok(path) = std::env::var(CONFIG_ENV) {
        return PathBuf::from(path);
    }
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("toll-calculator")
        .join("config.toml")
}
