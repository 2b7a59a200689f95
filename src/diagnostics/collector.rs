// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for aggregating and storing diagnostic events.
//!
//! This module provides the central collector that receives events from
//! notification managers and stores them in a circular buffer.

use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use crossbeam_channel::{bounded, Receiver, Sender};

use super::{
    CircularBuffer, DiagnosticEvent, DiagnosticEventKind, DiagnosticReport, SerializableEvent,
};
use crate::domain::EventBufferCapacity;

/// Default channel capacity for event buffering.
const DEFAULT_CHANNEL_CAPACITY: usize = 100;

/// Handle for sending diagnostic events to the collector.
///
/// This handle is cheap to clone. Events are sent via a bounded channel so
/// logging never blocks the UI thread.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    /// Logs an event stamped `at` on the sender's clock, dropping it if the
    /// channel is full.
    pub fn log(&self, at: Duration, kind: DiagnosticEventKind) {
        let _ = self.event_tx.try_send(DiagnosticEvent::new(at, kind));
    }
}

/// Central collector for diagnostic events.
///
/// Old events are evicted once the buffer reaches capacity.
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    event_rx: Receiver<DiagnosticEvent>,
    event_tx: Sender<DiagnosticEvent>,
    /// Monotonic start, for the collection duration.
    collection_started_at: Instant,
    /// Wall-clock start, for report metadata.
    collection_started_at_utc: DateTime<Utc>,
}

impl DiagnosticsCollector {
    #[must_use]
    pub fn new(capacity: EventBufferCapacity) -> Self {
        let (event_tx, event_rx) = bounded(DEFAULT_CHANNEL_CAPACITY);

        Self {
            buffer: CircularBuffer::new(capacity),
            event_rx,
            event_tx,
            collection_started_at: Instant::now(),
            collection_started_at_utc: Utc::now(),
        }
    }

    /// Creates a handle for sending events to this collector.
    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Moves all pending events from the channel into the buffer.
    ///
    /// Call this periodically, e.g. on each UI tick.
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
        }
    }

    /// Logs an event directly to the buffer, bypassing the channel.
    pub fn log(&mut self, at: Duration, kind: DiagnosticEventKind) {
        self.buffer.push(DiagnosticEvent::new(at, kind));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Iterates stored events, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Exports all collected events as a JSON report.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn export_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.build_report())
    }

    #[allow(clippy::cast_possible_truncation)] // Duration in ms fits comfortably in u64
    fn build_report(&self) -> DiagnosticReport {
        let collection_duration_ms = self.collection_started_at.elapsed().as_millis() as u64;
        let events = self
            .buffer
            .iter()
            .map(|event| {
                SerializableEvent::new(event.at, event.kind.clone())
            })
            .collect();

        DiagnosticReport::new(
            self.collection_started_at_utc,
            collection_duration_ms,
            events,
        )
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(EventBufferCapacity::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::DismissReason;
    use crate::notifications::ToastId;

    fn toast_id(raw: &str) -> ToastId {
        raw.parse().expect("valid id")
    }

    #[test]
    fn handle_events_arrive_after_processing() {
        let mut collector = DiagnosticsCollector::default();
        let handle = collector.handle();

        handle.log(Duration::ZERO, DiagnosticEventKind::removed(toast_id("toast-1")));
        assert!(collector.is_empty());

        collector.process_pending();
        assert_eq!(collector.len(), 1);
    }

    #[test]
    fn full_channel_drops_events() {
        let mut collector = DiagnosticsCollector::default();
        let handle = collector.handle();

        for i in 0..=DEFAULT_CHANNEL_CAPACITY {
            handle.log(
                Duration::ZERO,
                DiagnosticEventKind::removed(toast_id(&format!("toast-{i}"))),
            );
        }
        collector.process_pending();
        assert_eq!(collector.len(), DEFAULT_CHANNEL_CAPACITY);
    }

    #[test]
    fn export_json_lists_events_in_order() {
        let mut collector = DiagnosticsCollector::default();
        collector.log(
            Duration::from_millis(3000),
            DiagnosticEventKind::dismissed(toast_id("toast-5"), DismissReason::Timeout),
        );
        collector.log(
            Duration::from_millis(3300),
            DiagnosticEventKind::removed(toast_id("toast-5")),
        );

        let json = collector.export_json().expect("export");
        let report: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(report["event_count"], 2);
        assert_eq!(report["events"][0]["event"], "toast_dismissed");
        assert_eq!(report["events"][0]["reason"], "timeout");
        assert_eq!(report["events"][0]["offset_ms"], 3000);
        assert_eq!(report["events"][1]["event"], "toast_removed");
        assert_eq!(report["events"][1]["offset_ms"], 3300);
    }

    #[test]
    fn buffer_is_bounded() {
        let mut collector = DiagnosticsCollector::new(EventBufferCapacity::new(100));
        for i in 0..150 {
            collector.log(
                Duration::from_millis(i),
                DiagnosticEventKind::removed(toast_id(&format!("toast-{i}"))),
            );
        }
        assert_eq!(collector.len(), collector.capacity());
    }
}
