//! Main application configuration
//!
//! This module defines the primary configuration structures for the
//! queue-pulse service, including environment variable loading, TOML file
//! loading, and validation.

use crate::config::estimator::EstimatorConfig;
use crate::config::simulation::SimulationConfig;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub service: ServiceSettings,
    pub simulation: SimulationConfig,
    pub estimator: EstimatorConfig,
}

/// Service-level settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceSettings {
    /// Service name for logging
    pub name: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            name: "queue-pulse".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        // Service settings
        if let Ok(name) = env::var("SERVICE_NAME") {
            config.service.name = name;
        }
        if let Ok(log_level) = env::var("LOG_LEVEL") {
            config.service.log_level = log_level;
        }

        // Simulation settings
        if let Ok(hours) = env::var("HORIZON_HOURS") {
            config.simulation.horizon_hours = hours
                .parse()
                .map_err(|_| anyhow!("Invalid HORIZON_HOURS value: {}", hours))?;
        }
        if let Ok(minutes) = env::var("BASE_SERVICE_MINUTES") {
            config.simulation.base_service_minutes = minutes
                .parse()
                .map_err(|_| anyhow!("Invalid BASE_SERVICE_MINUTES value: {}", minutes))?;
        }
        if let Ok(hour) = env::var("START_HOUR") {
            config.simulation.start_hour = hour
                .parse()
                .map_err(|_| anyhow!("Invalid START_HOUR value: {}", hour))?;
        }
        if let Ok(seed) = env::var("SIMULATION_SEED") {
            config.simulation.seed = Some(
                seed.parse()
                    .map_err(|_| anyhow!("Invalid SIMULATION_SEED value: {}", seed))?,
            );
        }

        // Estimator settings
        if let Ok(window) = env::var("WINDOW_SIZE") {
            config.estimator.window_size = window
                .parse()
                .map_err(|_| anyhow!("Invalid WINDOW_SIZE value: {}", window))?;
        }
        if let Ok(tick) = env::var("TICK_INTERVAL") {
            config.estimator.tick_interval = tick
                .parse()
                .map_err(|_| anyhow!("Invalid TICK_INTERVAL value: {}", tick))?;
        }

        validate_config(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        validate_config(&config)?;
        Ok(config)
    }
}

/// Validate configuration values
pub fn validate_config(config: &AppConfig) -> Result<()> {
    // Validate log level
    match config.service.log_level.to_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        _ => return Err(anyhow!("Invalid log level: {}", config.service.log_level)),
    }

    if config.service.name.is_empty() {
        return Err(anyhow!("Service name cannot be empty"));
    }

    config.simulation.validate()?;
    config.estimator.validate()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert_eq!(config.service.name, "queue-pulse");
        assert_eq!(config.service.log_level, "info");
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_invalid_log_level_rejected() {
        let mut config = AppConfig::default();
        config.service.log_level = "verbose".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_nested_validation_propagates() {
        let mut config = AppConfig::default();
        config.estimator.window_size = 1;
        assert!(validate_config(&config).is_err());

        config = AppConfig::default();
        config.simulation.horizon_hours = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_from_file_round_trip() {
        let config = AppConfig::default();
        let serialized = toml::to_string(&config).unwrap();

        let dir = std::env::temp_dir();
        let path = dir.join("queue_pulse_config_test.toml");
        std::fs::write(&path, serialized).unwrap();

        let loaded = AppConfig::from_file(&path).unwrap();
        assert_eq!(loaded.service.name, config.service.name);
        assert_eq!(
            loaded.estimator.window_size,
            config.estimator.window_size
        );

        let _ = std::fs::remove_file(&path);
    }
}
