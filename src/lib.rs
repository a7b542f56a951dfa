//! Queue Pulse - wait-time estimation for service queues
//!
//! This crate estimates how long a new arrival must wait in a service
//! queue using only the timestamps at which previous customers finished
//! being served: no arrival counts, no sensors, no queue-length
//! observation. A synthetic generator with hidden service-rate regimes
//! validates the estimator, since real arrival and wait data is never
//! available in production.

pub mod config;
pub mod error;
pub mod estimator;
pub mod generator;
pub mod report;
pub mod session;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{EstimationError, Result};
pub use types::*;

// Re-export key components
pub use estimator::{AnomalyDetector, RateEstimator, WaitPredictor};
pub use generator::{EventStreamGenerator, RegimeSchedule};
pub use report::{ConsoleReporter, TickReporter};
pub use session::EstimationSession;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
