//! Anomaly detection over the rate history
//!
//! Flags unusual service patterns that a queue operator cannot see
//! directly: bursts of rate variability (staff interruptions) and abrupt
//! slowdowns (systemic issues).

use crate::config::EstimatorConfig;
use crate::estimator::history::RateHistory;
use crate::types::Anomaly;
use crate::utils::{mean, std_dev};
use tracing::warn;

/// Inspects the rolling rate history for abnormal service patterns
pub struct AnomalyDetector {
    config: EstimatorConfig,
}

impl AnomalyDetector {
    /// Create a new detector with validated configuration
    pub fn new(config: EstimatorConfig) -> crate::error::Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Check the rate history for at most one anomaly.
    ///
    /// Fewer than `anomaly_window` samples is insufficient data, not a
    /// clean bill of health. When fewer than two samples precede the
    /// recent window, the recent window is compared against itself and
    /// never flags; the first ticks of a run are therefore blind.
    /// Variability takes priority over slowdown.
    pub fn detect(&self, history: &RateHistory) -> Option<Anomaly> {
        if history.len() < self.config.anomaly_window {
            return None;
        }

        let recent = history.last_n(self.config.anomaly_window);
        let preceding = history.before_last_n(self.config.anomaly_window);
        let historical = if preceding.len() < 2 { recent } else { preceding };

        let recent_spread = std_dev(recent);
        let historical_spread = std_dev(historical);

        if recent_spread > historical_spread * self.config.variability_multiplier {
            warn!(
                "Service variability spike: recent std {:.3} vs historical {:.3}",
                recent_spread, historical_spread
            );
            return Some(Anomaly::HighVariability);
        }

        if mean(recent) < mean(historical) * self.config.slowdown_ratio {
            warn!(
                "Service slowdown: recent mean {:.3}/min vs historical {:.3}/min",
                mean(recent),
                mean(historical)
            );
            return Some(Anomaly::MajorSlowdown);
        }

        None
    }
}
