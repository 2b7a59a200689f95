// SPDX-License-Identifier: MPL-2.0
//! Toast value objects.
//!
//! Type-safe wrappers for the numeric knobs of the notification manager,
//! guaranteeing they stay within valid ranges once constructed.

use std::time::Duration;

// =============================================================================
// Max Toasts Bounds
// =============================================================================

/// Bounds for the number of simultaneously visible toasts (1 to 50).
pub mod max_toasts_bounds {
    /// Minimum capacity. A manager always shows at least one toast.
    pub const MIN: usize = 1;
    /// Maximum capacity.
    pub const MAX: usize = 50;
    /// Default capacity.
    pub const DEFAULT: usize = 5;
}

// =============================================================================
// MaxToasts
// =============================================================================

/// Capacity of the active list, clamped to `1..=50`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxToasts(usize);

impl MaxToasts {
    /// Creates a new capacity, clamping the value to the valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(max_toasts_bounds::MIN, max_toasts_bounds::MAX))
    }

    /// Returns the raw capacity.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for MaxToasts {
    fn default() -> Self {
        Self(max_toasts_bounds::DEFAULT)
    }
}

// =============================================================================
// ToastDuration
// =============================================================================

/// How long a toast stays visible before auto-dismissal.
///
/// Zero means the toast persists until dismissed explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct ToastDuration(u64);

impl ToastDuration {
    /// A toast that never auto-dismisses.
    pub const PERSISTENT: Self = Self(0);

    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        Self(millis)
    }

    /// Returns the duration in milliseconds.
    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    /// Returns whether this toast stays until dismissed.
    #[must_use]
    pub fn is_persistent(self) -> bool {
        self.0 == 0
    }

    /// Returns the auto-dismiss delay, or `None` for persistent toasts.
    #[must_use]
    pub fn auto_dismiss_after(self) -> Option<Duration> {
        if self.is_persistent() {
            None
        } else {
            Some(Duration::from_millis(self.0))
        }
    }
}

// =============================================================================
// EventBufferCapacity
// =============================================================================

/// Bounds for the diagnostics event buffer (100 to 10000 events).
pub mod event_buffer_bounds {
    /// Minimum capacity.
    pub const MIN: usize = 100;
    /// Maximum capacity.
    pub const MAX: usize = 10000;
    /// Default capacity.
    pub const DEFAULT: usize = 1000;
}

/// Number of diagnostic events retained before the oldest is evicted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventBufferCapacity(usize);

impl EventBufferCapacity {
    /// Creates a new capacity, clamping to the valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(event_buffer_bounds::MIN, event_buffer_bounds::MAX))
    }

    /// Returns the raw capacity.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for EventBufferCapacity {
    fn default() -> Self {
        Self(event_buffer_bounds::DEFAULT)
    }
}
