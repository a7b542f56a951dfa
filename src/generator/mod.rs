//! Synthetic completion-stream generation
//!
//! This module produces believable service-completion timestamp streams
//! with hidden, time-varying service-rate regimes. The estimator is
//! validated against these streams because real arrival and wait data is
//! never observable in production.

pub mod regime;
pub mod stream;

// Re-export commonly used types
pub use regime::{RegimeSchedule, ServiceRegime};
pub use stream::{EventStreamGenerator, GeneratedStream};
