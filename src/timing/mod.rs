// SPDX-License-Identifier: MPL-2.0
//! Logical time for timer-driven behavior.
//!
//! - [`Clock`]: where "now" comes from ([`SystemClock`], [`ManualClock`])
//! - [`Scheduler`]: fire-once tasks released by [`Scheduler::drain_due`]
//!
//! Hosts advance time by calling the manager's `tick` periodically; nothing
//! runs on a background thread.

mod clock;
mod scheduler;

pub use clock::{Clock, ManualClock, SystemClock};
pub use scheduler::Scheduler;
