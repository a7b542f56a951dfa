//! Append-only estimation history
//!
//! The rate history is the estimator's entire memory: the order of
//! appended samples is the only thing that defines "recent" versus
//! "historical". Samples are never reordered or removed.

use crate::types::Prediction;
use serde::{Deserialize, Serialize};

/// Process-lifetime record of computed service rates
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RateHistory {
    samples: Vec<f64>,
}

impl RateHistory {
    /// Create an empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one rate sample (completions per minute)
    pub fn push(&mut self, rate: f64) {
        self.samples.push(rate);
    }

    /// Number of accumulated samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether any samples have been recorded
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// All samples in arrival order
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// The trailing `n` samples (all samples when fewer exist)
    pub fn last_n(&self, n: usize) -> &[f64] {
        let start = self.samples.len().saturating_sub(n);
        &self.samples[start..]
    }

    /// Everything before the trailing `n` samples
    pub fn before_last_n(&self, n: usize) -> &[f64] {
        let end = self.samples.len().saturating_sub(n);
        &self.samples[..end]
    }
}

/// Ordered record of per-tick predictions for end-of-run reporting
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PredictionLog {
    entries: Vec<Prediction>,
}

impl PredictionLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one prediction
    pub fn push(&mut self, prediction: Prediction) {
        self.entries.push(prediction);
    }

    /// Number of recorded predictions
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether any predictions have been recorded
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All predictions in emission order
    pub fn entries(&self) -> &[Prediction] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Confidence;
    use std::time::Duration;

    #[test]
    fn test_history_preserves_order() {
        let mut history = RateHistory::new();
        history.push(0.1);
        history.push(0.3);
        history.push(0.2);

        assert_eq!(history.samples(), &[0.1, 0.3, 0.2]);
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn test_last_n_short_history() {
        let mut history = RateHistory::new();
        history.push(0.5);
        history.push(0.6);

        assert_eq!(history.last_n(5), &[0.5, 0.6]);
        assert!(history.before_last_n(5).is_empty());
    }

    #[test]
    fn test_recent_historical_split() {
        let mut history = RateHistory::new();
        for sample in [0.1, 0.2, 0.3, 0.4, 0.5] {
            history.push(sample);
        }

        assert_eq!(history.last_n(3), &[0.3, 0.4, 0.5]);
        assert_eq!(history.before_last_n(3), &[0.1, 0.2]);
    }

    #[test]
    fn test_prediction_log_appends() {
        let mut log = PredictionLog::new();
        assert!(log.is_empty());

        log.push(Prediction {
            estimated_wait: Duration::from_secs(300),
            confidence: Confidence::Low,
        });
        log.push(Prediction {
            estimated_wait: Duration::from_secs(600),
            confidence: Confidence::High,
        });

        assert_eq!(log.len(), 2);
        assert_eq!(log.entries()[1].confidence, Confidence::High);
    }
}
