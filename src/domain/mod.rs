// SPDX-License-Identifier: MPL-2.0
//! Domain layer - pure value objects with no toolkit dependencies.
//!
//! # Types
//!
//! - [`MaxToasts`]: capacity of the active toast list
//! - [`ToastDuration`]: display time, zero meaning persistent
//! - [`EventBufferCapacity`]: size of the diagnostics ring buffer

mod newtypes;

pub use newtypes::{
    event_buffer_bounds, max_toasts_bounds, EventBufferCapacity, MaxToasts, ToastDuration,
};
