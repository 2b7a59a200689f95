// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for the toast lifecycle.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::notifications::{Severity, ToastId};

/// Why a toast left the active list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DismissReason {
    /// `dismiss` was called or the close control was clicked.
    Manual,
    /// The display duration elapsed.
    Timeout,
    /// The active list was full and a newer toast took the slot.
    Evicted,
    /// The action control was clicked.
    Action,
    /// Part of a `dismiss_all` sweep.
    All,
    /// A loading toast was replaced by its final state.
    Replaced,
}

/// What happened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    /// A toast entered the page.
    ToastShown {
        id: String,
        severity: Severity,
        persistent: bool,
    },
    /// A toast started its exit animation.
    ToastDismissed { id: String, reason: DismissReason },
    /// A toast element was detached and its record dropped.
    ToastRemoved { id: String },
}

impl DiagnosticEventKind {
    #[must_use]
    pub fn shown(id: ToastId, severity: Severity, persistent: bool) -> Self {
        Self::ToastShown {
            id: id.to_string(),
            severity,
            persistent,
        }
    }

    #[must_use]
    pub fn dismissed(id: ToastId, reason: DismissReason) -> Self {
        Self::ToastDismissed {
            id: id.to_string(),
            reason,
        }
    }

    #[must_use]
    pub fn removed(id: ToastId) -> Self {
        Self::ToastRemoved { id: id.to_string() }
    }
}

/// A timestamped diagnostic event.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// Time on the reporting manager's clock.
    pub at: Duration,
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    #[must_use]
    pub fn new(at: Duration, kind: DiagnosticEventKind) -> Self {
        Self { at, kind }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dismissed_event_serializes_with_tag() {
        let id: ToastId = "toast-42".parse().expect("valid id");
        let kind = DiagnosticEventKind::dismissed(id, DismissReason::Evicted);
        let json = serde_json::to_string(&kind).expect("serialize");
        assert_eq!(
            json,
            r#"{"event":"toast_dismissed","id":"toast-42","reason":"evicted"}"#
        );
    }

    #[test]
    fn shown_event_round_trips() {
        let id: ToastId = "toast-7".parse().expect("valid id");
        let kind = DiagnosticEventKind::shown(id, Severity::Warning, false);
        let json = serde_json::to_string(&kind).expect("serialize");
        let back: DiagnosticEventKind = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, kind);
    }
}
