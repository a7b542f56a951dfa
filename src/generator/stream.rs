//! Synthetic completion-stream generator
//!
//! Produces an ordered sequence of service-completion events shaped by the
//! hidden regime schedule, plus the simulated wait times used only for
//! validating the estimator.

use crate::config::SimulationConfig;
use crate::generator::regime::RegimeSchedule;
use crate::types::CompletionEvent;
use crate::utils::advance_by_minutes;
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;
use tracing::{debug, info};

/// A generated completion stream with its validation-only ground truth
#[derive(Debug, Clone)]
pub struct GeneratedStream {
    /// Ordered completion events; timestamps strictly increase and
    /// sequence ids are contiguous from 1
    pub events: Vec<CompletionEvent>,
    /// Simulated wait per event after the first. Never visible to the
    /// estimator.
    pub actual_waits: Vec<Duration>,
}

impl GeneratedStream {
    /// Completion timestamps only, the estimator-facing view of the stream
    pub fn timestamps(&self) -> Vec<DateTime<Utc>> {
        self.events.iter().map(|event| event.timestamp).collect()
    }
}

/// Generator for synthetic service-completion streams
pub struct EventStreamGenerator {
    config: SimulationConfig,
    schedule: RegimeSchedule,
    rng: StdRng,
}

impl EventStreamGenerator {
    /// Create a generator over the standard working-day schedule
    pub fn new(config: SimulationConfig) -> crate::error::Result<Self> {
        Self::with_schedule(config, RegimeSchedule::standard_day())
    }

    /// Create a generator over a custom regime schedule
    pub fn with_schedule(
        config: SimulationConfig,
        schedule: RegimeSchedule,
    ) -> crate::error::Result<Self> {
        config.validate()?;
        schedule.validate()?;

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Ok(Self {
            config,
            schedule,
            rng,
        })
    }

    /// The schedule driving this generator
    pub fn schedule(&self) -> &RegimeSchedule {
        &self.schedule
    }

    /// Generate the completion stream for one simulated shift starting at
    /// the given timestamp
    pub fn generate(&mut self, start: DateTime<Utc>) -> GeneratedStream {
        let mut events: Vec<CompletionEvent> = Vec::new();
        let mut actual_waits = Vec::new();
        let mut current_time = start;
        let mut sequence_id = 1u64;

        for hour in 0..self.config.horizon_hours {
            let regime = match self.schedule.active_at(hour) {
                Some(regime) => regime,
                // Validated schedules cover every hour; an uncovered hour
                // simply produces no completions.
                None => continue,
            };

            debug!(
                "Hour {}: regime '{}' (x{} speed, {}/h)",
                hour, regime.label, regime.speed_multiplier, regime.completions_per_hour
            );

            for _ in 0..regime.completions_per_hour {
                let complexity = self
                    .rng
                    .random_range(self.config.complexity_min..=self.config.complexity_max);
                let mut service_minutes =
                    self.config.base_service_minutes * regime.speed_multiplier * complexity;

                if self.rng.random_bool(self.config.interruption_probability) {
                    service_minutes += self.config.interruption_minutes;
                }

                current_time = advance_by_minutes(current_time, service_minutes);

                if let Some(previous) = events.last() {
                    let wait = current_time
                        .signed_duration_since(previous.timestamp)
                        .to_std()
                        .unwrap_or(Duration::ZERO);
                    actual_waits.push(wait);
                }

                events.push(CompletionEvent {
                    timestamp: current_time,
                    sequence_id,
                    service_duration: Duration::from_secs_f64(service_minutes * 60.0),
                });
                sequence_id += 1;
            }
        }

        info!(
            "Generated {} completions across {} simulated hours",
            events.len(),
            self.config.horizon_hours
        );

        GeneratedStream {
            events,
            actual_waits,
        }
    }
}
