//! Error types for the queue-pulse service
//!
//! This module defines all error types using anyhow for consistent error
//! handling throughout the application.

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for specific estimation scenarios
#[derive(Debug, thiserror::Error)]
pub enum EstimationError {
    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },

    #[error("Invalid regime schedule: {reason}")]
    InvalidSchedule { reason: String },

    #[error("Reporting failed: {message}")]
    ReportingFailed { message: String },
}
