// SPDX-License-Identifier: MPL-2.0
//! Time sources.
//!
//! The manager never reads the system time directly; it asks a [`Clock`].
//! Production code uses [`SystemClock`], tests drive a [`ManualClock`].

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Source of monotonic time and wall-clock timestamps.
pub trait Clock {
    /// Monotonic time elapsed since the clock's origin.
    fn now(&self) -> Duration;

    /// Wall-clock milliseconds, used to seed toast identifiers.
    fn timestamp_millis(&self) -> u64;
}

/// Real time: `Instant` for scheduling, UTC milliseconds for identifiers.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }

    fn timestamp_millis(&self) -> u64 {
        u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or(0)
    }
}

/// Logical clock that only moves when told to.
///
/// Clones share the same time, so a test keeps one clone and hands the other
/// to the manager.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves time forward.
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    /// Convenience wrapper around [`ManualClock::advance`].
    pub fn advance_millis(&self, millis: u64) {
        self.advance(Duration::from_millis(millis));
    }

    /// Jumps to an absolute time. Moving backwards is ignored.
    pub fn set(&self, to: Duration) {
        if to > self.now.get() {
            self.now.set(to);
        }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }

    #[allow(clippy::cast_possible_truncation)] // u64 millis covers 584 million years
    fn timestamp_millis(&self) -> u64 {
        self.now.get().as_millis() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_starts_at_zero() {
        let clock = ManualClock::new();
        assert_eq!(clock.now(), Duration::ZERO);
        assert_eq!(clock.timestamp_millis(), 0);
    }

    #[test]
    fn manual_clock_clones_share_time() {
        let clock = ManualClock::new();
        let shared = clock.clone();
        clock.advance_millis(250);
        assert_eq!(shared.now(), Duration::from_millis(250));
        assert_eq!(shared.timestamp_millis(), 250);
    }

    #[test]
    fn manual_clock_never_moves_backwards() {
        let clock = ManualClock::new();
        clock.set(Duration::from_secs(2));
        clock.set(Duration::from_secs(1));
        assert_eq!(clock.now(), Duration::from_secs(2));
    }

    #[test]
    fn system_clock_is_monotonic() {
        let clock = SystemClock::new();
        let first = clock.now();
        let second = clock.now();
        assert!(second >= first);
        assert!(clock.timestamp_millis() > 0);
    }
}
