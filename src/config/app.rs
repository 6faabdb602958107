//! Main application configuration
//!
//! This module defines the primary configuration structures for the crickelo
//! pipeline, including TOML file loading, environment variable overrides,
//! and validation.

use crate::config::rating::RatingSettings;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub service: ServiceSettings,
    pub data: DataSettings,
    pub rating: RatingSettings,
}

/// Service-level settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    /// Service name for logging
    pub name: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

/// Input and output locations
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataSettings {
    /// Path to the match archive CSV
    pub matches_csv: PathBuf,
    /// Directory the JSON artifacts are written into
    pub output_dir: PathBuf,
    /// Pretty-print the JSON artifacts
    pub pretty_json: bool,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            name: "crickelo".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            matches_csv: PathBuf::from("data/matches.csv"),
            output_dir: PathBuf::from("data/dashboard"),
            pretty_json: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env()?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML file, then apply environment overrides
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let mut config = Self::from_toml_str(&raw)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        config.apply_env()?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Parse configuration from a TOML document. Missing sections and fields
    /// fall back to defaults.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config = toml::from_str(raw)?;
        Ok(config)
    }

    fn apply_env(&mut self) -> Result<()> {
        // Service settings
        if let Ok(name) = env::var("SERVICE_NAME") {
            self.service.name = name;
        }
        if let Ok(log_level) = env::var("LOG_LEVEL") {
            self.service.log_level = log_level;
        }

        // Data settings
        if let Ok(path) = env::var("CRICKELO_MATCHES_CSV") {
            self.data.matches_csv = PathBuf::from(path);
        }
        if let Ok(dir) = env::var("CRICKELO_OUTPUT_DIR") {
            self.data.output_dir = PathBuf::from(dir);
        }
        if let Ok(pretty) = env::var("CRICKELO_PRETTY_JSON") {
            self.data.pretty_json = pretty
                .parse()
                .map_err(|_| anyhow!("Invalid CRICKELO_PRETTY_JSON value: {}", pretty))?;
        }

        // Rating settings
        if let Ok(k) = env::var("CRICKELO_K_FACTOR") {
            self.rating.k_factor = k
                .parse()
                .map_err(|_| anyhow!("Invalid CRICKELO_K_FACTOR value: {}", k))?;
        }
        if let Ok(base) = env::var("CRICKELO_BASE_RATING") {
            self.rating.base_rating = base
                .parse()
                .map_err(|_| anyhow!("Invalid CRICKELO_BASE_RATING value: {}", base))?;
        }
        if let Ok(home) = env::var("CRICKELO_HOME_ADVANTAGE") {
            self.rating.home_advantage = home
                .parse()
                .map_err(|_| anyhow!("Invalid CRICKELO_HOME_ADVANTAGE value: {}", home))?;
        }

        Ok(())
    }
}

/// Validate configuration values
pub fn validate_config(config: &AppConfig) -> Result<()> {
    // Validate log level
    match config.service.log_level.to_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        _ => return Err(anyhow!("Invalid log level: {}", config.service.log_level)),
    }

    // Validate paths
    if config.data.matches_csv.as_os_str().is_empty() {
        return Err(anyhow!("Match archive path cannot be empty"));
    }
    if config.data.output_dir.as_os_str().is_empty() {
        return Err(anyhow!("Output directory cannot be empty"));
    }

    // Validate rating settings
    config.rating.tuning().validate()?;

    Ok(())
}
