//! Common types used throughout the queue-pulse estimation pipeline

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Unique, monotonically increasing identifier for completion events
pub type SequenceId = u64;

/// A single observed service completion.
///
/// This is the only thing the estimator ever sees: the moment a server
/// finished with one customer. Arrivals and queue length stay invisible.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionEvent {
    pub timestamp: DateTime<Utc>,
    pub sequence_id: SequenceId,
    /// How long the server spent on this customer (simulation ground truth)
    pub service_duration: Duration,
}

/// Short-term directional classification of the service rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    SpeedingUp,
    SlowingDown,
    Stable,
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Trend::SpeedingUp => write!(f, "speeding up"),
            Trend::SlowingDown => write!(f, "slowing down"),
            Trend::Stable => write!(f, "stable"),
        }
    }
}

/// Qualitative reliability label for a wait-time prediction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Confidence::Low => write!(f, "Low"),
            Confidence::Medium => write!(f, "Medium"),
            Confidence::High => write!(f, "High"),
        }
    }
}

/// A wait-time prediction emitted once per update tick
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    pub estimated_wait: Duration,
    pub confidence: Confidence,
}

impl Prediction {
    /// Estimated wait expressed in minutes (the public-display unit)
    pub fn estimated_wait_minutes(&self) -> f64 {
        self.estimated_wait.as_secs_f64() / 60.0
    }
}

/// Abnormal service pattern detected from the rate history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Anomaly {
    HighVariability,
    MajorSlowdown,
}

impl std::fmt::Display for Anomaly {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Anomaly::HighVariability => {
                write!(
                    f,
                    "High service variability detected - possible staff interruptions"
                )
            }
            Anomaly::MajorSlowdown => {
                write!(f, "Major slowdown detected - possible system issue")
            }
        }
    }
}

/// Per-tick output handed to the reporting boundary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TickUpdate {
    /// Timestamp of the completion that triggered this update
    pub timestamp: DateTime<Utc>,
    /// Current service rate in completions per minute
    pub rate_per_minute: f64,
    pub trend: Trend,
    pub prediction: Prediction,
    pub anomaly: Option<Anomaly>,
}
