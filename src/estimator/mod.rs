//! Online wait-time estimation from completion timestamps
//!
//! This module converts trailing windows of completion timestamps into a
//! service rate, a trend classification, a wait-time prediction with a
//! confidence label, and an anomaly flag. It never sees arrivals, queue
//! lengths, or the generator's hidden regimes.

pub mod anomaly;
pub mod history;
pub mod predictor;
pub mod rate;

// Re-export commonly used types
pub use anomaly::AnomalyDetector;
pub use history::{PredictionLog, RateHistory};
pub use predictor::WaitPredictor;
pub use rate::RateEstimator;
