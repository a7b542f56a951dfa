//! Reporter interface and implementations
//!
//! This module defines the reporting interface consumed by the estimation
//! session and implementations for console narration, JSON-lines output,
//! and in-memory recording for tests.

use crate::error::EstimationError;
use crate::report::summary::RunSummary;
use crate::types::TickUpdate;
use serde::Serialize;
use std::io::Write;

/// Trait for consuming per-tick estimation output
pub trait TickReporter {
    /// Handle one per-tick update
    fn report_tick(&mut self, update: &TickUpdate) -> crate::error::Result<()>;

    /// Handle the end-of-run summary
    fn finish(&mut self, summary: &RunSummary) -> crate::error::Result<()>;
}

/// Console reporter formatting updates the way a public display would
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    /// Create a new console reporter
    pub fn new() -> Self {
        Self
    }
}

impl TickReporter for ConsoleReporter {
    fn report_tick(&mut self, update: &TickUpdate) -> crate::error::Result<()> {
        println!("\nUpdate at {}", update.timestamp.format("%H:%M"));
        println!(
            "   Estimated Wait: {:.0} minutes",
            update.prediction.estimated_wait_minutes()
        );
        println!(
            "   Service Status: {}",
            update.trend.to_string().to_uppercase()
        );
        println!("   Confidence: {}", update.prediction.confidence);

        if let Some(anomaly) = update.anomaly {
            println!("   ALERT: {}", anomaly);
        }

        println!("{}", "-".repeat(40));
        Ok(())
    }

    fn finish(&mut self, summary: &RunSummary) -> crate::error::Result<()> {
        println!("\n{}", "=".repeat(60));
        println!("RUN SUMMARY");
        println!("{}", "=".repeat(60));
        println!("   Completions analyzed: {}", summary.completions);
        println!("   Updates emitted: {}", summary.ticks);
        println!(
            "   Average service rate: {:.2} customers/minute",
            summary.mean_rate
        );
        println!(
            "   Peak efficiency: {:.2} customers/minute",
            summary.peak_rate
        );
        println!(
            "   Lowest efficiency: {:.2} customers/minute",
            summary.lowest_rate
        );
        println!("   Anomalies flagged: {}", summary.anomalies_flagged);
        Ok(())
    }
}

/// Record wrapper distinguishing tick and summary lines in JSON output
#[derive(Serialize)]
#[serde(tag = "type")]
enum JsonRecord<'a> {
    Tick(&'a TickUpdate),
    Summary(&'a RunSummary),
}

/// Reporter emitting one JSON object per line, for downstream chart and
/// display tooling
pub struct JsonLinesReporter<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesReporter<W> {
    /// Create a reporter writing to the given sink
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consume the reporter and return its sink
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_record(&mut self, record: &JsonRecord<'_>) -> crate::error::Result<()> {
        let line = serde_json::to_string(record).map_err(|e| {
            EstimationError::ReportingFailed {
                message: format!("Failed to serialize record: {}", e),
            }
        })?;

        writeln!(self.writer, "{}", line).map_err(|e| {
            EstimationError::ReportingFailed {
                message: format!("Failed to write record: {}", e),
            }
        })?;

        Ok(())
    }
}

impl<W: Write> TickReporter for JsonLinesReporter<W> {
    fn report_tick(&mut self, update: &TickUpdate) -> crate::error::Result<()> {
        self.write_record(&JsonRecord::Tick(update))
    }

    fn finish(&mut self, summary: &RunSummary) -> crate::error::Result<()> {
        self.write_record(&JsonRecord::Summary(summary))
    }
}

/// In-memory reporter for tests
#[derive(Debug, Default)]
pub struct RecordingReporter {
    updates: Vec<TickUpdate>,
    summary: Option<RunSummary>,
}

impl RecordingReporter {
    /// Create a new recording reporter
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded updates in emission order
    pub fn updates(&self) -> &[TickUpdate] {
        &self.updates
    }

    /// The recorded summary, if the run finished
    pub fn summary(&self) -> Option<&RunSummary> {
        self.summary.as_ref()
    }
}

impl TickReporter for RecordingReporter {
    fn report_tick(&mut self, update: &TickUpdate) -> crate::error::Result<()> {
        self.updates.push(update.clone());
        Ok(())
    }

    fn finish(&mut self, summary: &RunSummary) -> crate::error::Result<()> {
        self.summary = Some(summary.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Confidence, Prediction, Trend};
    use crate::utils::day_start;
    use std::time::Duration;

    fn sample_update() -> TickUpdate {
        TickUpdate {
            timestamp: day_start(9),
            rate_per_minute: 0.25,
            trend: Trend::Stable,
            prediction: Prediction {
                estimated_wait: Duration::from_secs(20 * 60),
                confidence: Confidence::Medium,
            },
            anomaly: None,
        }
    }

    fn sample_summary() -> RunSummary {
        RunSummary {
            ticks: 1,
            completions: 10,
            mean_rate: 0.25,
            peak_rate: 0.3,
            lowest_rate: 0.2,
            anomalies_flagged: 0,
        }
    }

    #[test]
    fn test_recording_reporter_captures_everything() {
        let mut reporter = RecordingReporter::new();

        reporter.report_tick(&sample_update()).unwrap();
        reporter.report_tick(&sample_update()).unwrap();
        reporter.finish(&sample_summary()).unwrap();

        assert_eq!(reporter.updates().len(), 2);
        assert_eq!(reporter.summary().unwrap().completions, 10);
    }

    #[test]
    fn test_json_lines_output_is_tagged() {
        let mut reporter = JsonLinesReporter::new(Vec::new());

        reporter.report_tick(&sample_update()).unwrap();
        reporter.finish(&sample_summary()).unwrap();

        let output = String::from_utf8(reporter.into_inner()).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);

        let tick: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(tick["type"], "Tick");
        assert_eq!(tick["trend"], "stable");

        let summary: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(summary["type"], "Summary");
        assert_eq!(summary["completions"], 10);
    }

    #[test]
    fn test_json_line_carries_anomaly_text_fields() {
        let mut update = sample_update();
        update.anomaly = Some(crate::types::Anomaly::MajorSlowdown);

        let mut reporter = JsonLinesReporter::new(Vec::new());
        reporter.report_tick(&update).unwrap();

        let output = String::from_utf8(reporter.into_inner()).unwrap();
        let record: serde_json::Value = serde_json::from_str(output.trim()).unwrap();
        assert_eq!(record["anomaly"], "major_slowdown");
    }
}
