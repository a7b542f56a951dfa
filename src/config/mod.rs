//! Configuration management for the queue-pulse service
//!
//! This module handles all configuration loading from environment variables,
//! TOML files, validation, and default values for the estimation pipeline.

pub mod app;
pub mod estimator;
pub mod simulation;

// Re-export commonly used types
pub use app::{validate_config, AppConfig, ServiceSettings};
pub use estimator::EstimatorConfig;
pub use simulation::SimulationConfig;
