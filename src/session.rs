//! Estimation session wiring
//!
//! An `EstimationSession` owns one estimator pipeline (rate, prediction,
//! anomaly detection) and drives it over an ordered completion stream,
//! emitting one update per tick to a reporter. Sessions are fully
//! isolated: each owns its histories exclusively, so independent queues
//! run as independent sessions with no shared state.

use crate::config::EstimatorConfig;
use crate::estimator::history::{PredictionLog, RateHistory};
use crate::estimator::{AnomalyDetector, RateEstimator, WaitPredictor};
use crate::report::reporter::TickReporter;
use crate::report::summary::RunSummary;
use crate::types::{CompletionEvent, TickUpdate};
use chrono::{DateTime, Utc};
use tracing::info;

/// One estimation pipeline over one queue's completion stream
pub struct EstimationSession {
    config: EstimatorConfig,
    rates: RateEstimator,
    predictor: WaitPredictor,
    detector: AnomalyDetector,
    predictions: PredictionLog,
    anomalies_flagged: usize,
    completions_seen: usize,
}

impl EstimationSession {
    /// Create a session with validated configuration
    pub fn new(config: EstimatorConfig) -> crate::error::Result<Self> {
        let rates = RateEstimator::new(config.clone())?;
        let predictor = WaitPredictor::new(config.clone())?;
        let detector = AnomalyDetector::new(config.clone())?;

        Ok(Self {
            config,
            rates,
            predictor,
            detector,
            predictions: PredictionLog::new(),
            anomalies_flagged: 0,
            completions_seen: 0,
        })
    }

    /// Accumulated rate history
    pub fn rate_history(&self) -> &RateHistory {
        self.rates.history()
    }

    /// Accumulated prediction log
    pub fn predictions(&self) -> &PredictionLog {
        &self.predictions
    }

    /// Process one trailing window of completion timestamps and produce
    /// the update for the tick stamped `at`
    pub fn observe_window(&mut self, window: &[DateTime<Utc>], at: DateTime<Utc>) -> TickUpdate {
        let (rate, trend) = self.rates.compute_rate(window);
        let prediction = self.predictor.predict(rate, trend, self.rates.history());
        let anomaly = self.detector.detect(self.rates.history());

        if anomaly.is_some() {
            self.anomalies_flagged += 1;
        }
        self.predictions.push(prediction.clone());

        TickUpdate {
            timestamp: at,
            rate_per_minute: rate,
            trend,
            prediction,
            anomaly,
        }
    }

    /// Replay an ordered completion stream, emitting one update per
    /// `tick_interval` completions to the reporter, then the summary.
    ///
    /// Each tick looks at the trailing `window_size` timestamps before
    /// the tick position, exactly what a live deployment would have seen
    /// at that moment.
    pub fn run(
        &mut self,
        events: &[CompletionEvent],
        reporter: &mut dyn TickReporter,
    ) -> crate::error::Result<RunSummary> {
        let timestamps: Vec<DateTime<Utc>> = events.iter().map(|event| event.timestamp).collect();
        self.completions_seen += events.len();

        let mut index = self.config.tick_interval;
        while index < timestamps.len() {
            let window_start = index.saturating_sub(self.config.window_size);
            let window = &timestamps[window_start..index];

            let update = self.observe_window(window, timestamps[index]);
            reporter.report_tick(&update)?;

            index += self.config.tick_interval;
        }

        let summary = RunSummary::from_run(
            self.rates.history(),
            &self.predictions,
            self.completions_seen,
            self.anomalies_flagged,
        );

        info!(
            "Session finished: {} ticks over {} completions, mean rate {:.2}/min",
            summary.ticks, summary.completions, summary.mean_rate
        );

        reporter.finish(&summary)?;
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimulationConfig;
    use crate::generator::EventStreamGenerator;
    use crate::report::reporter::RecordingReporter;
    use crate::utils::day_start;

    fn generated_events() -> Vec<CompletionEvent> {
        let config = SimulationConfig {
            seed: Some(17),
            ..Default::default()
        };
        let mut generator = EventStreamGenerator::new(config).unwrap();
        generator.generate(day_start(8)).events
    }

    #[test]
    fn test_tick_count_follows_interval() {
        let events = generated_events();
        let mut session = EstimationSession::new(EstimatorConfig::default()).unwrap();
        let mut reporter = RecordingReporter::new();

        let summary = session.run(&events, &mut reporter).unwrap();

        // 92 events, ticks at 5, 10, ..., 90
        let expected_ticks = (events.len() - 1) / 5;
        assert_eq!(reporter.updates().len(), expected_ticks);
        assert_eq!(summary.ticks, expected_ticks);
        assert_eq!(session.predictions().len(), expected_ticks);
    }

    #[test]
    fn test_updates_are_stamped_in_order() {
        let events = generated_events();
        let mut session = EstimationSession::new(EstimatorConfig::default()).unwrap();
        let mut reporter = RecordingReporter::new();

        session.run(&events, &mut reporter).unwrap();

        for pair in reporter.updates().windows(2) {
            assert!(pair[1].timestamp > pair[0].timestamp);
        }
    }

    #[test]
    fn test_summary_reflects_rate_history() {
        let events = generated_events();
        let mut session = EstimationSession::new(EstimatorConfig::default()).unwrap();
        let mut reporter = RecordingReporter::new();

        let summary = session.run(&events, &mut reporter).unwrap();

        assert_eq!(summary.completions, events.len());
        assert!(summary.mean_rate > 0.0);
        assert!(summary.peak_rate >= summary.mean_rate);
        assert!(summary.lowest_rate <= summary.mean_rate);
        assert_eq!(reporter.summary().unwrap().ticks, summary.ticks);
    }

    #[test]
    fn test_sessions_are_isolated() {
        let events = generated_events();

        let mut first = EstimationSession::new(EstimatorConfig::default()).unwrap();
        let mut second = EstimationSession::new(EstimatorConfig::default()).unwrap();

        let mut reporter_a = RecordingReporter::new();
        let mut reporter_b = RecordingReporter::new();

        first.run(&events, &mut reporter_a).unwrap();
        second.run(&events, &mut reporter_b).unwrap();

        // Same input, fresh state: identical histories
        assert_eq!(first.rate_history().samples(), second.rate_history().samples());
    }

    #[test]
    fn test_short_stream_produces_no_ticks() {
        let events = generated_events();
        let mut session = EstimationSession::new(EstimatorConfig::default()).unwrap();
        let mut reporter = RecordingReporter::new();

        let summary = session.run(&events[..3], &mut reporter).unwrap();
        assert_eq!(summary.ticks, 0);
        assert!(reporter.updates().is_empty());
        assert!(reporter.summary().is_some());
    }
}
