//! Utility functions for the queue-pulse service

use chrono::{DateTime, TimeZone, Utc};

/// Get the current UTC timestamp
pub fn current_timestamp() -> DateTime<Utc> {
    Utc::now()
}

/// Today's date at the given hour, UTC. Falls back to now for hours
/// outside 0..24.
pub fn day_start(hour: u32) -> DateTime<Utc> {
    let now = Utc::now();
    now.date_naive()
        .and_hms_opt(hour, 0, 0)
        .map(|naive| Utc.from_utc_datetime(&naive))
        .unwrap_or(now)
}

/// Advance a timestamp by a fractional number of minutes
pub fn advance_by_minutes(timestamp: DateTime<Utc>, minutes: f64) -> DateTime<Utc> {
    timestamp + chrono::Duration::microseconds((minutes * 60_000_000.0).round() as i64)
}

/// Elapsed minutes between two timestamps (negative if `later` precedes
/// `earlier`)
pub fn minutes_between(earlier: DateTime<Utc>, later: DateTime<Utc>) -> f64 {
    let elapsed = later.signed_duration_since(earlier);
    match elapsed.num_microseconds() {
        Some(micros) => micros as f64 / 60_000_000.0,
        // Microsecond count overflows for spans past ~292k years
        None => elapsed.num_milliseconds() as f64 / 60_000.0,
    }
}

/// Arithmetic mean of a sample slice, 0.0 when empty
pub fn mean(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    samples.iter().sum::<f64>() / samples.len() as f64
}

/// Population standard deviation, 0.0 for fewer than two samples
pub fn std_dev(samples: &[f64]) -> f64 {
    if samples.len() < 2 {
        return 0.0;
    }
    let mean_value = mean(samples);
    let variance = samples
        .iter()
        .map(|sample| {
            let delta = sample - mean_value;
            delta * delta
        })
        .sum::<f64>()
        / samples.len() as f64;
    variance.max(0.0).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_and_measure_round_trip() {
        let start = day_start(8);
        let later = advance_by_minutes(start, 12.5);
        assert!((minutes_between(start, later) - 12.5).abs() < 1e-6);
    }

    #[test]
    fn test_minutes_between_is_signed() {
        let start = day_start(8);
        let later = advance_by_minutes(start, 3.0);
        assert!(minutes_between(later, start) < 0.0);
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(mean(&[2.0]), 2.0);
        assert_eq!(mean(&[1.0, 2.0, 3.0]), 2.0);
    }

    #[test]
    fn test_std_dev() {
        assert_eq!(std_dev(&[]), 0.0);
        assert_eq!(std_dev(&[5.0]), 0.0);
        // Population std dev of [2, 4, 4, 4, 5, 5, 7, 9] is exactly 2
        let samples = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!((std_dev(&samples) - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_std_dev_of_constant_samples_is_zero() {
        assert_eq!(std_dev(&[0.5, 0.5, 0.5, 0.5, 0.5]), 0.0);
    }
}
