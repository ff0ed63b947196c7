use anyhow::{Context, Result};
use config::{Config as ConfigBuilder, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

use crate::chart::{MAX_MINUTES, MIN_MINUTES};
use crate::token::DEFAULT_MINUTES;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub chart: ChartConfig,
    #[serde(default)]
    pub share: ShareConfig,
    #[serde(default)]
    pub state: StateConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ChartConfig {
    /// Slider-style input bounds, in minutes
    #[serde(default = "default_min_minutes")]
    pub min_minutes: f64,
    #[serde(default = "default_max_minutes")]
    pub max_minutes: f64,
    /// Target used when nothing is persisted and no override is given
    #[serde(default = "default_default_minutes")]
    pub default_minutes: f64,
}

fn default_min_minutes() -> f64 {
    MIN_MINUTES
}

fn default_max_minutes() -> f64 {
    MAX_MINUTES
}

fn default_default_minutes() -> f64 {
    DEFAULT_MINUTES
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            min_minutes: default_min_minutes(),
            max_minutes: default_max_minutes(),
            default_minutes: default_default_minutes(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ShareConfig {
    /// Base URL the share token is appended to as `?target_time=...`
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "https://matsubo.github.io/marathon-pace".to_string()
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct StateConfig {
    /// Optional override for the prefs directory (for testing)
    pub state_dir_override: Option<PathBuf>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("chart.min_minutes must be positive (got {0})")]
    NonPositiveMin(f64),
    #[error("chart.min_minutes must be below chart.max_minutes ({min} >= {max})")]
    EmptyRange { min: f64, max: f64 },
    #[error("chart.default_minutes {0} is outside the configured range")]
    DefaultOutOfRange(f64),
    #[error("share.base_url must not be empty")]
    EmptyBaseUrl,
}

impl ChartConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_minutes <= 0.0 || !self.min_minutes.is_finite() {
            return Err(ConfigError::NonPositiveMin(self.min_minutes));
        }
        if !(self.min_minutes < self.max_minutes) {
            return Err(ConfigError::EmptyRange {
                min: self.min_minutes,
                max: self.max_minutes,
            });
        }
        if self.default_minutes < self.min_minutes || self.default_minutes > self.max_minutes {
            return Err(ConfigError::DefaultOutOfRange(self.default_minutes));
        }
        Ok(())
    }

    pub fn clamp(&self, minutes: f64) -> f64 {
        minutes.clamp(self.min_minutes, self.max_minutes)
    }
}

impl ShareConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }
        Ok(())
    }
}

impl Config {
    /// Validate all configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.chart.validate()?;
        self.share.validate()?;
        Ok(())
    }

    /// Directory holding the prefs file and share token
    pub fn state_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.state.state_dir_override {
            return Ok(dir.clone());
        }
        config_dir()
    }
}

pub fn config_dir() -> Result<PathBuf> {
    Ok(home::home_dir()
        .context("Could not find home directory")?
        .join(".marathon-pace"))
}

pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Config> {
    let loader = ConfigBuilder::builder()
        .add_source(File::from(path.as_ref()).format(FileFormat::Toml))
        .build()
        .context("Failed to build config loader")?;

    loader
        .try_deserialize()
        .context("Failed to parse config file")
}

pub fn load() -> Result<Config> {
    let config_path = config_dir()?.join("config.toml");

    // No config file is the common case; every field has a default
    let config = if config_path.exists() {
        load_from_path(&config_path)?
    } else {
        Config::default()
    };

    config.validate()?;
    Ok(config)
}

pub fn save_to_path<P: AsRef<Path>>(config: &Config, path: P) -> Result<()> {
    let toml_string = toml::to_string_pretty(config).context("Failed to serialize config")?;

    std::fs::write(path.as_ref(), toml_string).context("Failed to write config file")?;

    Ok(())
}
