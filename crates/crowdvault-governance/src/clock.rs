//! Clock abstraction for proposal timing.

use std::sync::atomic::{AtomicU64, Ordering};

/// Source of the current time in unix seconds.
///
/// Proposal creation stamps `created_at_secs` from the engine's clock, and
/// the voting window is evaluated against the same clock, so swapping in a
/// [`ManualClock`] makes the whole lifecycle deterministic.
pub trait Clock: Send + Sync {
    fn now_secs(&self) -> u64;
}

/// Wall-clock time via `chrono`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_secs(&self) -> u64 {
        chrono::Utc::now().timestamp().max(0) as u64
    }
}

/// A manually driven clock for tests and local development.
///
/// Time only moves when the caller advances it.
#[derive(Debug, Default)]
pub struct ManualClock {
    now_secs: AtomicU64,
}

impl ManualClock {
    pub fn new(start_secs: u64) -> Self {
        Self {
            now_secs: AtomicU64::new(start_secs),
        }
    }

    pub fn advance(&self, secs: u64) {
        self.now_secs.fetch_add(secs, Ordering::SeqCst);
    }

    pub fn set(&self, secs: u64) {
        self.now_secs.store(secs, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_secs(&self) -> u64 {
        self.now_secs.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_only_moves_when_driven() {
        let clock = ManualClock::new(100);
        assert_eq!(clock.now_secs(), 100);

        clock.advance(50);
        assert_eq!(clock.now_secs(), 150);

        clock.set(10);
        assert_eq!(clock.now_secs(), 10);
    }

    #[test]
    fn system_clock_is_monotonic_enough() {
        let clock = SystemClock;
        let a = clock.now_secs();
        let b = clock.now_secs();
        assert!(b >= a);
    }
}
