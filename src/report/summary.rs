//! End-of-run summary aggregates

use crate::estimator::history::{PredictionLog, RateHistory};
use serde::{Deserialize, Serialize};

/// Operational insights aggregated over a completed run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    /// Number of update ticks emitted
    pub ticks: usize,
    /// Number of completion events consumed
    pub completions: usize,
    /// Average service rate across the run (completions/min)
    pub mean_rate: f64,
    /// Peak efficiency observed
    pub peak_rate: f64,
    /// Lowest efficiency observed
    pub lowest_rate: f64,
    /// Ticks on which an anomaly was flagged
    pub anomalies_flagged: usize,
}

impl RunSummary {
    /// Aggregate the estimator's histories into a summary
    pub fn from_run(
        rates: &RateHistory,
        predictions: &PredictionLog,
        completions: usize,
        anomalies_flagged: usize,
    ) -> Self {
        let samples = rates.samples();
        let mean_rate = crate::utils::mean(samples);
        let peak_rate = samples.iter().fold(0.0f64, |acc, rate| acc.max(*rate));
        let lowest_rate = if samples.is_empty() {
            0.0
        } else {
            samples.iter().fold(f64::INFINITY, |acc, rate| acc.min(*rate))
        };

        Self {
            ticks: predictions.len(),
            completions,
            mean_rate,
            peak_rate,
            lowest_rate,
            anomalies_flagged,
        }
    }
}
