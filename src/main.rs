//! Main entry point for the queue-pulse demonstration driver
//!
//! Generates a synthetic service-completion stream with hidden rate
//! regimes, replays it through the estimator as a real-time display
//! would consume it, and reports per-tick estimates plus an end-of-run
//! summary.

use anyhow::Result;
use clap::Parser;
use queue_pulse::config::{validate_config, AppConfig};
use queue_pulse::generator::EventStreamGenerator;
use queue_pulse::report::{ConsoleReporter, JsonLinesReporter};
use queue_pulse::session::EstimationSession;
use queue_pulse::utils::day_start;
use std::path::PathBuf;
use tracing::info;

/// Queue Pulse - wait time estimation from completion timestamps only
#[derive(Parser)]
#[command(
    name = "queue-pulse",
    version,
    about = "Estimates service-queue wait times from completion timestamps only",
    long_about = "Queue Pulse simulates a service counter with hidden, time-varying \
                 service-rate regimes, then estimates wait times for new arrivals using \
                 nothing but the completion timestamp stream: no arrival counts, no \
                 sensors, no queue-length observation."
)]
struct Args {
    /// Configuration file path
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    config: Option<PathBuf>,

    /// Simulation horizon override
    #[arg(long, value_name = "HOURS", help = "Override simulation horizon in hours")]
    hours: Option<u32>,

    /// Base service time override
    #[arg(
        long,
        value_name = "MINUTES",
        help = "Override base service time in minutes"
    )]
    base_minutes: Option<f64>,

    /// Estimator window override
    #[arg(long, value_name = "N", help = "Override estimator window size")]
    window: Option<usize>,

    /// Update tick interval override
    #[arg(long, value_name = "N", help = "Override completions per display update")]
    tick: Option<usize>,

    /// RNG seed for a reproducible run
    #[arg(long, value_name = "SEED", help = "Seed the generator for reproducible runs")]
    seed: Option<u64>,

    /// Emit JSON lines instead of console narration
    #[arg(long, help = "Emit one JSON object per update instead of console text")]
    json: bool,

    /// Log level override
    #[arg(
        short,
        long,
        value_name = "LEVEL",
        help = "Override log level (trace, debug, info, warn, error)"
    )]
    log_level: Option<String>,

    /// Enable debug mode
    #[arg(short, long, help = "Enable debug mode with verbose logging")]
    debug: bool,

    /// Dry run mode (validate config and exit)
    #[arg(long, help = "Validate configuration and exit without running")]
    dry_run: bool,
}

/// Initialize structured logging with the configured level
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Load and merge configuration from file, environment, and CLI arguments
fn load_config(args: &Args) -> Result<AppConfig> {
    let mut config = if let Some(config_path) = &args.config {
        AppConfig::from_file(config_path)?
    } else {
        AppConfig::from_env()?
    };

    // Apply CLI overrides
    if let Some(log_level) = &args.log_level {
        config.service.log_level = log_level.clone();
    }

    if args.debug {
        config.service.log_level = "debug".to_string();
    }

    if let Some(hours) = args.hours {
        config.simulation.horizon_hours = hours;
    }

    if let Some(base_minutes) = args.base_minutes {
        config.simulation.base_service_minutes = base_minutes;
    }

    if let Some(window) = args.window {
        config.estimator.window_size = window;
    }

    if let Some(tick) = args.tick {
        config.estimator.tick_interval = tick;
    }

    if let Some(seed) = args.seed {
        config.simulation.seed = Some(seed);
    }

    validate_config(&config)?;
    Ok(config)
}

/// Display startup information
fn display_startup_banner(config: &AppConfig) {
    info!("Queue Pulse Wait Time Estimator");
    info!("   Service: {}", config.service.name);
    info!("   Log level: {}", config.service.log_level);
    info!(
        "   Simulation: {}h horizon, {:.1} min base service time",
        config.simulation.horizon_hours, config.simulation.base_service_minutes
    );
    info!(
        "   Estimator: window {}, update every {} completions",
        config.estimator.window_size, config.estimator.tick_interval
    );
    info!("   Constraint: completion timestamps only, no arrival data");
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Load configuration (CLI args can override environment/config file)
    let config = load_config(&args).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });

    // Initialize logging early (before any other operations)
    if let Err(e) = init_logging(&config.service.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    if args.dry_run {
        info!("Configuration validation successful");
        display_startup_banner(&config);
        info!("Dry run completed - exiting without running");
        return Ok(());
    }

    display_startup_banner(&config);

    // Step 1: generate the synthetic completion stream
    let mut generator = EventStreamGenerator::new(config.simulation.clone())?;
    let start = day_start(config.simulation.start_hour);
    let stream = generator.generate(start);
    info!(
        "Generated {} completions over {} hidden regimes",
        stream.events.len(),
        generator.schedule().regimes().len()
    );

    // Step 2: replay it through a fresh estimation session
    let mut session = EstimationSession::new(config.estimator.clone())?;

    let summary = if args.json {
        let stdout = std::io::stdout();
        let mut reporter = JsonLinesReporter::new(stdout.lock());
        session.run(&stream.events, &mut reporter)?
    } else {
        let mut reporter = ConsoleReporter::new();
        session.run(&stream.events, &mut reporter)?
    };

    // Step 3: operational insights
    info!(
        "Average service rate: {:.2} customers/minute",
        summary.mean_rate
    );
    info!(
        "Peak efficiency: {:.2} customers/minute",
        summary.peak_rate
    );
    info!(
        "Lowest efficiency: {:.2} customers/minute",
        summary.lowest_rate
    );
    if summary.anomalies_flagged > 0 {
        info!("Anomalies flagged: {}", summary.anomalies_flagged);
    }

    Ok(())
}
