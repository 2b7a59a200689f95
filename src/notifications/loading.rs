// SPDX-License-Identifier: MPL-2.0
//! Handle returned by `NotificationManager::loading`.

use super::manager::NotificationManager;
use super::notification::{Severity, ToastId, ToastOptions};
use crate::diagnostics::DismissReason;
use crate::page::Page;
use crate::timing::Clock;

/// Controls a loading toast.
///
/// `update` does not edit the toast in place: the spinner toast is
/// dismissed and a new toast (with a new ID) takes its place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct LoadingHandle {
    id: ToastId,
}

impl LoadingHandle {
    pub(crate) fn new(id: ToastId) -> Self {
        Self { id }
    }

    /// ID of the spinner toast.
    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    /// Dismisses the spinner toast.
    pub fn dismiss<P: Page, C: Clock>(&self, manager: &mut NotificationManager<P, C>) {
        manager.dismiss(self.id);
    }

    /// Replaces the spinner toast with a regular one.
    ///
    /// `severity` defaults to [`Severity::Success`]. Returns the new toast's ID.
    pub fn update<P: Page, C: Clock>(
        self,
        manager: &mut NotificationManager<P, C>,
        message: impl Into<String>,
        severity: Option<Severity>,
    ) -> ToastId {
        manager.dismiss_with(self.id, DismissReason::Replaced);
        manager.show(ToastOptions::new(message).severity(severity.unwrap_or(Severity::Success)))
    }
}
