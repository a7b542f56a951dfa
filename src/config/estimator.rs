//! Estimator tuning configuration
//!
//! Every heuristic constant in the estimation pipeline lives here as a
//! named, overridable value so deployments can calibrate against real
//! queues without code changes.

use serde::{Deserialize, Serialize};

/// Configuration for the wait-time estimation pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimatorConfig {
    /// Number of recent completions fed into each rate computation
    pub window_size: usize,
    /// Completions between consecutive display updates
    pub tick_interval: usize,
    /// Rate samples that make up the "recent" side of trend detection
    pub trend_window: usize,
    /// Recent/historical ratio above which the trend is speeding up
    pub speed_up_ratio: f64,
    /// Recent/historical ratio below which the trend is slowing down
    pub slow_down_ratio: f64,
    /// Assumed number of customers waiting when nothing else is known
    pub baseline_queue_length: f64,
    /// Backlog multiplier applied while the trend is slowing down
    pub slowdown_backlog_factor: f64,
    /// Clearance multiplier applied while the trend is speeding up
    pub speedup_clearance_factor: f64,
    /// Rate samples inspected for prediction confidence
    pub confidence_window: usize,
    /// Std-dev bound (completions/min) under which confidence is High
    pub stable_rate_std_dev: f64,
    /// Rate samples that make up the "recent" side of anomaly detection
    pub anomaly_window: usize,
    /// Recent/historical std-dev multiple that flags high variability
    pub variability_multiplier: f64,
    /// Recent/historical mean ratio under which a major slowdown flags
    pub slowdown_ratio: f64,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            window_size: 10,              // Responsiveness vs stability
            tick_interval: 5,             // Display refresh cadence
            trend_window: 3,
            speed_up_ratio: 1.1,
            slow_down_ratio: 0.9,
            baseline_queue_length: 5.0,   // Typical unseen backlog
            slowdown_backlog_factor: 1.5,
            speedup_clearance_factor: 0.7,
            confidence_window: 5,
            stable_rate_std_dev: 0.1,
            anomaly_window: 5,
            variability_multiplier: 2.0,
            slowdown_ratio: 0.5,
        }
    }
}

impl EstimatorConfig {
    /// Create configuration tuned for fast-moving queues: react quickly,
    /// accept noisier estimates
    pub fn responsive() -> Self {
        Self {
            window_size: 6,
            tick_interval: 3,
            trend_window: 2,
            confidence_window: 4,
            ..Default::default()
        }
    }

    /// Create configuration tuned for slow queues: smooth over more
    /// samples and hold a stricter bar for High confidence
    pub fn steady() -> Self {
        Self {
            window_size: 15,
            tick_interval: 8,
            trend_window: 5,
            confidence_window: 8,
            stable_rate_std_dev: 0.05,
            ..Default::default()
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.window_size < 2 {
            return Err(crate::error::EstimationError::ConfigurationError {
                message: "window_size must be at least 2".to_string(),
            }
            .into());
        }

        if self.tick_interval == 0 {
            return Err(crate::error::EstimationError::ConfigurationError {
                message: "tick_interval must be greater than 0".to_string(),
            }
            .into());
        }

        if self.trend_window == 0 || self.confidence_window == 0 || self.anomaly_window == 0 {
            return Err(crate::error::EstimationError::ConfigurationError {
                message: "trend, confidence and anomaly windows must be greater than 0"
                    .to_string(),
            }
            .into());
        }

        if self.slow_down_ratio >= 1.0 || self.speed_up_ratio <= 1.0 {
            return Err(crate::error::EstimationError::ConfigurationError {
                message: "trend ratios must satisfy slow_down_ratio < 1.0 < speed_up_ratio"
                    .to_string(),
            }
            .into());
        }

        if self.baseline_queue_length <= 0.0 {
            return Err(crate::error::EstimationError::ConfigurationError {
                message: "baseline_queue_length must be positive".to_string(),
            }
            .into());
        }

        if self.slowdown_backlog_factor <= 0.0 || self.speedup_clearance_factor <= 0.0 {
            return Err(crate::error::EstimationError::ConfigurationError {
                message: "trend adjustment factors must be positive".to_string(),
            }
            .into());
        }

        if self.stable_rate_std_dev < 0.0 {
            return Err(crate::error::EstimationError::ConfigurationError {
                message: "stable_rate_std_dev must be non-negative".to_string(),
            }
            .into());
        }

        if self.variability_multiplier <= 0.0 || self.slowdown_ratio <= 0.0 {
            return Err(crate::error::EstimationError::ConfigurationError {
                message: "anomaly thresholds must be positive".to_string(),
            }
            .into());
        }

        Ok(())
    }
}
