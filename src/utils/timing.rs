//! Elapsed-time helpers for response envelopes.

use std::time::{Duration, Instant};

/// Converts a duration to fractional milliseconds rounded to two decimals.
pub fn duration_to_ms(duration: Duration) -> f64 {
    (duration.as_secs_f64() * 100_000.0).round() / 100.0
}

/// Milliseconds elapsed since `start`, rounded to two decimals.
pub fn elapsed_ms(start: Instant) -> f64 {
    duration_to_ms(start.elapsed())
}
