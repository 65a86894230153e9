//! Injectable time source.
//!
//! The engine never reads the system clock directly; it asks a [`Clock`] so
//! tests can pin time and drive expiry deterministically.

use chrono::Utc;

/// Source of the current Unix time in whole seconds.
pub trait Clock: Send + Sync {
    /// Current Unix seconds, truncated toward zero.
    fn now_unix(&self) -> i64;
}

/// The process-wide system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_unix(&self) -> i64 {
        Utc::now().timestamp()
    }
}

/// A clock pinned to a fixed instant, for deterministic tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now_unix(&self) -> i64 {
        self.0
    }
}
