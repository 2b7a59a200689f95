// SPDX-License-Identifier: MPL-2.0
//! Subscription wiring for the demo application.

use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// Longest interval between two polls of the toast timers.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Shortest interval between two polls, also the rounding step.
pub const MIN_TICK_INTERVAL: Duration = Duration::from_millis(10);

/// Picks the polling interval from the time left until the next timer.
///
/// The result is rounded up to [`MIN_TICK_INTERVAL`] steps so that the
/// subscription is not rebuilt on every update.
#[must_use]
pub fn tick_interval(next_timer_in: Duration) -> Duration {
    let step = MIN_TICK_INTERVAL.as_millis();
    let millis = next_timer_in.as_millis().div_ceil(step) * step;
    Duration::from_millis(u64::try_from(millis).unwrap_or(u64::MAX))
        .clamp(MIN_TICK_INTERVAL, TICK_INTERVAL)
}

/// Creates a periodic tick subscription for toast timers.
///
/// Only runs while a toast timer is pending.
pub fn create_tick_subscription(next_timer_in: Option<Duration>) -> Subscription<Message> {
    match next_timer_in {
        Some(left) => time::every(tick_interval(left)).map(|_| Message::Tick),
        None => Subscription::none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_is_capped_for_distant_timers() {
        assert_eq!(tick_interval(Duration::from_secs(5)), TICK_INTERVAL);
    }

    #[test]
    fn interval_follows_close_timers_in_steps() {
        assert_eq!(tick_interval(Duration::from_millis(42)), Duration::from_millis(50));
        assert_eq!(tick_interval(Duration::from_millis(50)), Duration::from_millis(50));
    }

    #[test]
    fn interval_never_drops_below_minimum() {
        assert_eq!(tick_interval(Duration::ZERO), MIN_TICK_INTERVAL);
        assert_eq!(tick_interval(Duration::from_millis(3)), MIN_TICK_INTERVAL);
    }
}
