//! Time-of-day secret rotation.
//!
//! A rotating secret set partitions the 24-hour clock into equal buckets,
//! one per secret. Selection is a pure function of wall-clock time and the
//! secret count: signer and verifier need no synchronization beyond clock
//! agreement and identical secret ordering.
//!
//! Seconds-of-day are computed in the local timezone of the process, not
//! UTC. Rotation boundaries therefore depend on host configuration; this
//! is preserved behavior, not an accident.

use chrono::{DateTime, Local, Timelike};

/// Seconds in a day.
pub const SECONDS_PER_DAY: u32 = 86_400;

/// Selects the active secret for a Unix timestamp.
///
/// # Panics
///
/// Panics if `secrets` is empty; configuration validation rejects empty
/// rotating sets before an engine is built.
#[must_use]
pub fn select_rotated<'a>(secrets: &'a [String], timestamp: i64) -> &'a str {
    let seconds = local_seconds_of_day(timestamp);
    &secrets[bucket_index(seconds, secrets.len())]
}

/// Maps seconds-of-day to a bucket index in `[0, count - 1]`.
///
/// The partition size is computed in real-number division so boundaries
/// stay exact for counts that do not divide 86400. The index is clamped so
/// a seconds-of-day of exactly 86400 (leap-second representations) selects
/// the last bucket instead of overflowing.
#[must_use]
pub fn bucket_index(seconds_of_day: u32, count: usize) -> usize {
    debug_assert!(count > 0);
    let partition = f64::from(SECONDS_PER_DAY) / count as f64;
    let index = (f64::from(seconds_of_day) / partition).floor() as usize;
    index.min(count - 1)
}

/// Converts a Unix timestamp to seconds since local midnight.
fn local_seconds_of_day(timestamp: i64) -> u32 {
    DateTime::from_timestamp(timestamp, 0)
        .map_or(0, |utc| utc.with_timezone(&Local).num_seconds_from_midnight())
}
