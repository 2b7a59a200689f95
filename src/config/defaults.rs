// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for the timing and
//! capacity contract of the notification manager. Constants are organized
//! by category.
//!
//! # Categories
//!
//! - **Durations**: How long each kind of toast stays on screen
//! - **Animation**: Entry and exit delays around the DOM bookkeeping
//! - **Capacity**: Maximum number of toasts visible at once
//! - **Markup**: Identifiers shared with external stylesheets
//! - **Diagnostics**: Event buffer bounds

// ==========================================================================
// Duration Defaults
// ==========================================================================

/// Default display time for `show`, `success` and `info` (in milliseconds).
pub const DEFAULT_DURATION_MS: u64 = 3000;

/// Display time for `error` toasts (in milliseconds).
pub const ERROR_DURATION_MS: u64 = 5000;

/// Display time for `warning` toasts (in milliseconds).
pub const WARNING_DURATION_MS: u64 = 4000;

/// A duration of zero keeps the toast until it is dismissed explicitly.
pub const PERSISTENT_DURATION_MS: u64 = 0;

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Time between `dismiss` and the element leaving the page (in milliseconds).
///
/// Matches the exit transition length of the stylesheet.
pub const REMOVAL_DELAY_MS: u64 = 300;

/// Time between insertion and the `show` class being applied (in milliseconds).
pub const ENTER_DELAY_MS: u64 = 10;

// ==========================================================================
// Capacity Defaults
// ==========================================================================

/// Default maximum number of toasts visible at once.
pub const DEFAULT_MAX_TOASTS: usize = 5;

/// Minimum accepted value for `max_toasts`.
pub const MIN_MAX_TOASTS: usize = 1;

/// Maximum accepted value for `max_toasts`.
pub const MAX_MAX_TOASTS: usize = 50;

// ==========================================================================
// Markup Defaults
// ==========================================================================

/// Well-known identifier of the container element.
pub const DEFAULT_CONTAINER_ID: &str = "toast-container";

/// Default text of the loading toast.
pub const DEFAULT_LOADING_MESSAGE: &str = "Loading...";

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default diagnostics buffer capacity (number of events).
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 1000;

/// Minimum diagnostics buffer capacity.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = 100;

/// Maximum diagnostics buffer capacity.
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = 10000;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_durations_are_ordered() {
        assert!(ERROR_DURATION_MS > WARNING_DURATION_MS);
        assert!(WARNING_DURATION_MS > DEFAULT_DURATION_MS);
        assert!(DEFAULT_DURATION_MS > PERSISTENT_DURATION_MS);
    }

    #[test]
    fn capacity_bounds_are_consistent() {
        assert!(MIN_MAX_TOASTS <= DEFAULT_MAX_TOASTS);
        assert!(DEFAULT_MAX_TOASTS <= MAX_MAX_TOASTS);
    }

    #[test]
    fn entry_delay_is_shorter_than_exit() {
        assert!(ENTER_DELAY_MS < REMOVAL_DELAY_MS);
    }
}
