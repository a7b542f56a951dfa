//! Synthetic queue simulation configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Parameters for the synthetic completion-stream generator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Simulation horizon in hours
    pub horizon_hours: u32,
    /// Base service time in minutes before regime and complexity scaling
    pub base_service_minutes: f64,
    /// Lower bound of the per-transaction complexity factor
    pub complexity_min: f64,
    /// Upper bound of the per-transaction complexity factor
    pub complexity_max: f64,
    /// Probability that a completion is hit by an interruption
    pub interruption_probability: f64,
    /// Minutes added by one interruption
    pub interruption_minutes: f64,
    /// Hour of day (UTC) at which the simulated shift starts
    pub start_hour: u32,
    /// RNG seed for reproducible streams; None draws from the OS
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            horizon_hours: 8,             // One working day
            base_service_minutes: 4.0,    // Typical counter transaction
            complexity_min: 0.7,
            complexity_max: 1.3,
            interruption_probability: 0.05,
            interruption_minutes: 10.0,
            start_hour: 8,                // Doors open at 08:00
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Base service time as a Duration
    pub fn base_service_duration(&self) -> Duration {
        Duration::from_secs_f64(self.base_service_minutes * 60.0)
    }

    /// Interruption penalty as a Duration
    pub fn interruption_penalty(&self) -> Duration {
        Duration::from_secs_f64(self.interruption_minutes * 60.0)
    }

    /// Validate configuration values
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.horizon_hours == 0 {
            return Err(crate::error::EstimationError::ConfigurationError {
                message: "horizon_hours must be greater than 0".to_string(),
            }
            .into());
        }

        if self.base_service_minutes <= 0.0 {
            return Err(crate::error::EstimationError::ConfigurationError {
                message: "base_service_minutes must be positive".to_string(),
            }
            .into());
        }

        if self.complexity_min <= 0.0 || self.complexity_min > self.complexity_max {
            return Err(crate::error::EstimationError::ConfigurationError {
                message: "complexity bounds must be positive with min <= max".to_string(),
            }
            .into());
        }

        if !(0.0..=1.0).contains(&self.interruption_probability) {
            return Err(crate::error::EstimationError::ConfigurationError {
                message: "interruption_probability must be within [0, 1]".to_string(),
            }
            .into());
        }

        if self.interruption_minutes < 0.0 {
            return Err(crate::error::EstimationError::ConfigurationError {
                message: "interruption_minutes must be non-negative".to_string(),
            }
            .into());
        }

        if self.start_hour >= 24 {
            return Err(crate::error::EstimationError::ConfigurationError {
                message: "start_hour must be within 0..24".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulation_config_default() {
        let config = SimulationConfig::default();
        assert_eq!(config.horizon_hours, 8);
        assert_eq!(config.base_service_minutes, 4.0);
        assert_eq!(config.start_hour, 8);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_simulation_config_validation() {
        let mut config = SimulationConfig::default();
        assert!(config.validate().is_ok());

        // Invalid: zero horizon
        config.horizon_hours = 0;
        assert!(config.validate().is_err());

        // Invalid: inverted complexity bounds
        config = SimulationConfig::default();
        config.complexity_min = 1.5;
        config.complexity_max = 0.5;
        assert!(config.validate().is_err());

        // Invalid: probability above 1
        config = SimulationConfig::default();
        config.interruption_probability = 1.5;
        assert!(config.validate().is_err());

        // Invalid: start hour out of range
        config = SimulationConfig::default();
        config.start_hour = 24;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_duration_accessors() {
        let config = SimulationConfig::default();
        assert_eq!(config.base_service_duration(), Duration::from_secs(240));
        assert_eq!(config.interruption_penalty(), Duration::from_secs(600));
    }
}
