//! Service-rate computation and trend classification
//!
//! The rate of completions is the estimator's only lever for inferring
//! queue pressure: a trailing window of timestamps becomes a rate in
//! completions per minute, and the accumulated rate history classifies
//! the short-term trend.

use crate::config::EstimatorConfig;
use crate::estimator::history::RateHistory;
use crate::types::Trend;
use crate::utils::{mean, minutes_between};
use chrono::{DateTime, Utc};
use tracing::debug;

/// Converts completion-timestamp windows into rate and trend
pub struct RateEstimator {
    config: EstimatorConfig,
    history: RateHistory,
}

impl RateEstimator {
    /// Create a new rate estimator with validated configuration
    pub fn new(config: EstimatorConfig) -> crate::error::Result<Self> {
        config.validate()?;

        Ok(Self {
            config,
            history: RateHistory::new(),
        })
    }

    /// Accumulated rate history (one sample per successful computation)
    pub fn history(&self) -> &RateHistory {
        &self.history
    }

    /// Compute the current service rate from a trailing window of
    /// completion timestamps and classify the trend.
    ///
    /// Windows with fewer than two timestamps carry no interval
    /// information: the result is (0.0, Stable) and the history is left
    /// untouched. Every computed rate is appended to the history before
    /// the trend is classified.
    pub fn compute_rate(&mut self, window: &[DateTime<Utc>]) -> (f64, Trend) {
        if window.len() < 2 {
            return (0.0, Trend::Stable);
        }

        let intervals: Vec<f64> = window
            .windows(2)
            .map(|pair| minutes_between(pair[0], pair[1]))
            .collect();

        let avg_interval = mean(&intervals);
        let current_rate = if avg_interval > 0.0 {
            1.0 / avg_interval
        } else {
            // Zero or negative mean interval: degenerate window, no rate
            0.0
        };

        self.history.push(current_rate);
        let trend = self.classify_trend();

        debug!(
            "Computed rate {:.3}/min over {} completions, trend: {}",
            current_rate,
            window.len(),
            trend
        );

        (current_rate, trend)
    }

    /// Compare the mean of the trailing trend window against the mean of
    /// everything before it. With fewer than `trend_window` accumulated
    /// samples there is no basis for a direction; with no samples before
    /// the window the recent mean is its own baseline.
    fn classify_trend(&self) -> Trend {
        let samples = self.history.samples();
        if samples.len() < self.config.trend_window {
            return Trend::Stable;
        }

        let recent_avg = mean(self.history.last_n(self.config.trend_window));
        let historical = self.history.before_last_n(self.config.trend_window);
        let historical_avg = if historical.is_empty() {
            recent_avg
        } else {
            mean(historical)
        };

        if recent_avg > historical_avg * self.config.speed_up_ratio {
            Trend::SpeedingUp
        } else if recent_avg < historical_avg * self.config.slow_down_ratio {
            Trend::SlowingDown
        } else {
            Trend::Stable
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::{advance_by_minutes, day_start};

    fn uniform_window(spacing_minutes: f64, count: usize) -> Vec<DateTime<Utc>> {
        let start = day_start(8);
        (0..count)
            .map(|i| advance_by_minutes(start, spacing_minutes * i as f64))
            .collect()
    }

    #[test]
    fn test_short_window_returns_zero_stable() {
        let mut estimator = RateEstimator::new(EstimatorConfig::default()).unwrap();

        assert_eq!(estimator.compute_rate(&[]), (0.0, Trend::Stable));
        assert_eq!(estimator.compute_rate(&[day_start(8)]), (0.0, Trend::Stable));

        // Insufficient windows never touch the history
        assert!(estimator.history().is_empty());
    }

    #[test]
    fn test_uniform_five_minute_intervals() {
        let mut estimator = RateEstimator::new(EstimatorConfig::default()).unwrap();

        // [t+0, t+5, t+10, t+15] -> mean interval 5 min -> 0.2/min
        let (rate, _) = estimator.compute_rate(&uniform_window(5.0, 4));
        assert!((rate - 0.2).abs() < 1e-9);
        assert_eq!(estimator.history().len(), 1);
    }

    #[test]
    fn test_identical_rates_stay_stable() {
        let mut estimator = RateEstimator::new(EstimatorConfig::default()).unwrap();
        let window = uniform_window(5.0, 4);

        for _ in 0..3 {
            let (rate, trend) = estimator.compute_rate(&window);
            assert!((rate - 0.2).abs() < 1e-9);
            assert_eq!(trend, Trend::Stable);
        }
        assert_eq!(estimator.history().len(), 3);
    }

    #[test]
    fn test_trend_stable_below_three_samples() {
        let mut estimator = RateEstimator::new(EstimatorConfig::default()).unwrap();

        let (_, first) = estimator.compute_rate(&uniform_window(5.0, 4));
        let (_, second) = estimator.compute_rate(&uniform_window(1.0, 4));
        assert_eq!(first, Trend::Stable);
        assert_eq!(second, Trend::Stable);
    }

    #[test]
    fn test_detects_speeding_up() {
        let mut estimator = RateEstimator::new(EstimatorConfig::default()).unwrap();

        // Establish a slow baseline, then three clearly faster windows
        for _ in 0..4 {
            estimator.compute_rate(&uniform_window(10.0, 4));
        }
        estimator.compute_rate(&uniform_window(2.0, 4));
        estimator.compute_rate(&uniform_window(2.0, 4));
        let (_, trend) = estimator.compute_rate(&uniform_window(2.0, 4));
        assert_eq!(trend, Trend::SpeedingUp);
    }

    #[test]
    fn test_detects_slowing_down() {
        let mut estimator = RateEstimator::new(EstimatorConfig::default()).unwrap();

        for _ in 0..4 {
            estimator.compute_rate(&uniform_window(2.0, 4));
        }
        estimator.compute_rate(&uniform_window(10.0, 4));
        estimator.compute_rate(&uniform_window(10.0, 4));
        let (_, trend) = estimator.compute_rate(&uniform_window(10.0, 4));
        assert_eq!(trend, Trend::SlowingDown);
    }

    #[test]
    fn test_zero_interval_window_degrades_to_zero_rate() {
        let mut estimator = RateEstimator::new(EstimatorConfig::default()).unwrap();
        let stamp = day_start(8);

        let (rate, trend) = estimator.compute_rate(&[stamp, stamp, stamp]);
        assert_eq!(rate, 0.0);
        assert_eq!(trend, Trend::Stable);
        // A degenerate window still counts as a computed sample
        assert_eq!(estimator.history().len(), 1);
    }

    #[test]
    fn test_unordered_window_degrades_to_zero_rate() {
        let mut estimator = RateEstimator::new(EstimatorConfig::default()).unwrap();
        let start = day_start(8);
        let window = vec![advance_by_minutes(start, 10.0), start];

        let (rate, _) = estimator.compute_rate(&window);
        assert_eq!(rate, 0.0);
    }
}
