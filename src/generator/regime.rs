//! Hidden service-rate regimes
//!
//! A regime is a time-bounded period with a characteristic service speed
//! and throughput. Regimes are known only to the generator; the estimator
//! must recover their qualitative effects blind.

use serde::{Deserialize, Serialize};

/// One hidden operating period of the simulated service counter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceRegime {
    /// Human-readable label for logs and validation output
    pub label: String,
    /// First simulation hour (inclusive) this regime covers
    pub start_hour: u32,
    /// First simulation hour no longer covered; None leaves the regime
    /// open-ended
    pub end_hour: Option<u32>,
    /// Multiplier applied to the base service time
    pub speed_multiplier: f64,
    /// Throughput while this regime is active
    pub completions_per_hour: u32,
}

impl ServiceRegime {
    fn new(
        label: &str,
        start_hour: u32,
        end_hour: Option<u32>,
        speed_multiplier: f64,
        completions_per_hour: u32,
    ) -> Self {
        Self {
            label: label.to_string(),
            start_hour,
            end_hour,
            speed_multiplier,
            completions_per_hour,
        }
    }

    /// Whether this regime is active during the given simulation hour
    pub fn contains(&self, hour: u32) -> bool {
        hour >= self.start_hour && self.end_hour.map_or(true, |end| hour < end)
    }
}

/// Ordered set of non-overlapping regimes partitioning the simulation
/// horizon
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegimeSchedule {
    regimes: Vec<ServiceRegime>,
}

impl RegimeSchedule {
    /// Build a schedule from an ordered regime list
    pub fn new(regimes: Vec<ServiceRegime>) -> crate::error::Result<Self> {
        let schedule = Self { regimes };
        schedule.validate()?;
        Ok(schedule)
    }

    /// The standard simulated working day: fresh staff, midday fatigue,
    /// recovery, and an end-of-shift rush
    pub fn standard_day() -> Self {
        Self {
            regimes: vec![
                ServiceRegime::new("accelerated", 0, Some(2), 0.8, 15),
                ServiceRegime::new("fatigued", 2, Some(5), 1.5, 8),
                ServiceRegime::new("recovering", 5, Some(7), 1.0, 12),
                ServiceRegime::new("rushed", 7, None, 0.9, 14),
            ],
        }
    }

    /// The regime active during the given simulation hour
    pub fn active_at(&self, hour: u32) -> Option<&ServiceRegime> {
        self.regimes.iter().find(|regime| regime.contains(hour))
    }

    /// Access the ordered regime list
    pub fn regimes(&self) -> &[ServiceRegime] {
        &self.regimes
    }

    /// Validate the partition invariant: regimes start at hour 0, are
    /// contiguous and non-overlapping, only the last may be open-ended,
    /// and every regime has positive speed and throughput
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.regimes.is_empty() {
            return Err(crate::error::EstimationError::InvalidSchedule {
                reason: "schedule must contain at least one regime".to_string(),
            }
            .into());
        }

        if self.regimes[0].start_hour != 0 {
            return Err(crate::error::EstimationError::InvalidSchedule {
                reason: "first regime must start at hour 0".to_string(),
            }
            .into());
        }

        for (index, regime) in self.regimes.iter().enumerate() {
            let is_last = index == self.regimes.len() - 1;

            match regime.end_hour {
                Some(end) if end <= regime.start_hour => {
                    return Err(crate::error::EstimationError::InvalidSchedule {
                        reason: format!("regime '{}' is empty or inverted", regime.label),
                    }
                    .into());
                }
                Some(end) => {
                    if let Some(next) = self.regimes.get(index + 1) {
                        if next.start_hour != end {
                            return Err(crate::error::EstimationError::InvalidSchedule {
                                reason: format!(
                                    "gap or overlap between '{}' and '{}'",
                                    regime.label, next.label
                                ),
                            }
                            .into());
                        }
                    }
                }
                None if !is_last => {
                    return Err(crate::error::EstimationError::InvalidSchedule {
                        reason: format!(
                            "regime '{}' is open-ended but not last",
                            regime.label
                        ),
                    }
                    .into());
                }
                None => {}
            }

            if regime.speed_multiplier <= 0.0 {
                return Err(crate::error::EstimationError::InvalidSchedule {
                    reason: format!("regime '{}' has non-positive speed", regime.label),
                }
                .into());
            }

            if regime.completions_per_hour == 0 {
                return Err(crate::error::EstimationError::InvalidSchedule {
                    reason: format!("regime '{}' has zero throughput", regime.label),
                }
                .into());
            }
        }

        // Last regime open-ended keeps every horizon hour covered
        if self.regimes[self.regimes.len() - 1].end_hour.is_some() {
            return Err(crate::error::EstimationError::InvalidSchedule {
                reason: "last regime must be open-ended".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

impl Default for RegimeSchedule {
    fn default() -> Self {
        Self::standard_day()
    }
}
