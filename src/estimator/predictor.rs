//! Wait-time prediction from rate and trend
//!
//! Estimates how long a new arrival will wait without ever counting
//! arrivals: an assumed baseline backlog, adjusted by the trend, divided
//! by the current service rate.

use crate::config::EstimatorConfig;
use crate::estimator::history::RateHistory;
use crate::types::{Confidence, Prediction, Trend};
use crate::utils::std_dev;
use std::time::Duration;
use tracing::debug;

/// Converts rate and trend into a wait estimate with a confidence label
pub struct WaitPredictor {
    config: EstimatorConfig,
}

impl WaitPredictor {
    /// Create a new predictor with validated configuration
    pub fn new(config: EstimatorConfig) -> crate::error::Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Predict the wait for a new arrival.
    ///
    /// A zero rate carries no information: the prediction is a zero wait
    /// at Low confidence. Otherwise the baseline queue length is scaled
    /// by the trend (more backlog while slowing down, faster clearance
    /// while speeding up) and divided by the rate.
    pub fn predict(&self, rate: f64, trend: Trend, history: &RateHistory) -> Prediction {
        if rate <= 0.0 {
            return Prediction {
                estimated_wait: Duration::ZERO,
                confidence: Confidence::Low,
            };
        }

        let mut queue_length = self.config.baseline_queue_length;
        match trend {
            Trend::SlowingDown => queue_length *= self.config.slowdown_backlog_factor,
            Trend::SpeedingUp => queue_length *= self.config.speedup_clearance_factor,
            Trend::Stable => {}
        }

        let wait_minutes = queue_length / rate;
        let confidence = self.classify_confidence(history);

        debug!(
            "Predicted wait {:.1} min (queue {:.1}, rate {:.3}/min, confidence {})",
            wait_minutes, queue_length, rate, confidence
        );

        Prediction {
            estimated_wait: Duration::from_secs_f64(wait_minutes * 60.0),
            confidence,
        }
    }

    /// Confidence reflects sample sufficiency and recent rate stability
    fn classify_confidence(&self, history: &RateHistory) -> Confidence {
        if history.len() < self.config.confidence_window {
            return Confidence::Low;
        }

        let recent_spread = std_dev(history.last_n(self.config.confidence_window));
        if recent_spread < self.config.stable_rate_std_dev {
            Confidence::High
        } else {
            Confidence::Medium
        }
    }
}
