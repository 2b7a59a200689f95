// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for recording the toast lifecycle.
//!
//! Managers report what they do (shown, dismissed and why, removed) through
//! a [`DiagnosticsHandle`]. The [`DiagnosticsCollector`] keeps the most
//! recent events in a memory-bounded [`CircularBuffer`] and exports them as
//! a JSON report.

mod buffer;
mod collector;
mod events;
mod report;

pub use buffer::CircularBuffer;
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{DiagnosticEvent, DiagnosticEventKind, DismissReason};
pub use report::{DiagnosticReport, SerializableEvent};
