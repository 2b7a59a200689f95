// SPDX-License-Identifier: MPL-2.0
//! JSON report built from the collected events.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::DiagnosticEventKind;

/// An event with its time on the manager's clock.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerializableEvent {
    pub offset_ms: u64,
    #[serde(flatten)]
    pub kind: DiagnosticEventKind,
}

impl SerializableEvent {
    #[allow(clippy::cast_possible_truncation)] // Duration in ms fits comfortably in u64
    #[must_use]
    pub fn new(at: Duration, kind: DiagnosticEventKind) -> Self {
        Self {
            offset_ms: at.as_millis() as u64,
            kind,
        }
    }
}

/// Top-level diagnostic report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosticReport {
    /// RFC 3339 wall-clock time at which collection started.
    pub started_at: String,
    pub collection_duration_ms: u64,
    pub event_count: usize,
    pub events: Vec<SerializableEvent>,
}

impl DiagnosticReport {
    #[must_use]
    pub fn new(
        started_at: DateTime<Utc>,
        collection_duration_ms: u64,
        events: Vec<SerializableEvent>,
    ) -> Self {
        Self {
            started_at: started_at.to_rfc3339(),
            collection_duration_ms,
            event_count: events.len(),
            events,
        }
    }
}
