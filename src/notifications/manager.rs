// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `NotificationManager` owns the toast container on the page, the
//! bounded list of active toasts, and the timers that reveal, expire and
//! remove them. Time only moves when the host calls [`NotificationManager::tick`].
//!
//! A dismissed toast leaves the active list at once and waits in a leaving
//! list while its exit animation plays; the element is detached and the
//! record dropped when the removal delay has elapsed.

use super::loading::LoadingHandle;
use super::notification::{IdGenerator, Severity, ToastId, ToastOptions};
use super::render::{self, Outbox, Request, ToastView};
use super::icons;
use crate::config::{ToastConfig, DEFAULT_LOADING_MESSAGE};
use crate::diagnostics::{DiagnosticEventKind, DiagnosticsHandle, DismissReason};
use crate::domain::ToastDuration;
use crate::page::{Document, EventKind, NodeId, Page};
use crate::timing::{Clock, Scheduler, SystemClock};
use std::collections::VecDeque;
use std::time::Duration;

/// Messages for notification state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// A toast control was clicked.
    Clicked(NodeId),
    /// Dismiss a specific toast by ID.
    Dismiss(ToastId),
    /// Dismiss every active toast.
    DismissAll,
    /// Run timers that have come due.
    Tick,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Timer {
    Reveal(ToastId),
    AutoDismiss(ToastId),
    Remove(ToastId),
}

/// A toast currently on the page.
#[derive(Debug, Clone)]
pub struct ToastRecord {
    id: ToastId,
    element: NodeId,
    severity: Severity,
    title: String,
    message: String,
    duration: ToastDuration,
}

impl ToastRecord {
    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    /// The element rendered for this toast.
    #[must_use]
    pub fn element(&self) -> NodeId {
        self.element
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn duration(&self) -> ToastDuration {
        self.duration
    }
}

/// Manages the toasts of one page.
///
/// Construct one per page at start-up and pass it by reference to the code
/// that needs to notify the user.
pub struct NotificationManager<P: Page = Document, C: Clock = SystemClock> {
    page: P,
    clock: C,
    config: ToastConfig,
    container: NodeId,
    /// Visible toasts, oldest first.
    active: VecDeque<ToastRecord>,
    /// Dismissed toasts whose exit animation is still playing.
    leaving: Vec<ToastRecord>,
    timers: Scheduler<Timer>,
    ids: IdGenerator,
    outbox: Outbox,
    diagnostics: Option<DiagnosticsHandle>,
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self::new(Document::new(), SystemClock::new(), ToastConfig::default())
    }
}

impl<P: Page, C: Clock> NotificationManager<P, C> {
    /// Creates a manager and locates or creates its container on `page`.
    pub fn new(page: P, clock: C, config: ToastConfig) -> Self {
        let mut manager = Self {
            container: page.body(),
            page,
            clock,
            config,
            active: VecDeque::new(),
            leaving: Vec::new(),
            timers: Scheduler::new(),
            ids: IdGenerator::new(),
            outbox: Outbox::default(),
            diagnostics: None,
        };
        manager.init();
        manager
    }

    /// Sets the diagnostics handle for recording the toast lifecycle.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    /// Locates the container by its identifier, creating it if absent.
    ///
    /// Runs on construction and again whenever the container has been
    /// removed from the page behind the manager's back. Toasts whose
    /// elements went away with the old container are forgotten.
    pub fn init(&mut self) -> NodeId {
        if self.page.contains(self.container) && self.container != self.page.body() {
            return self.container;
        }
        self.forget_detached();
        let container_id = self.config.container_id().to_string();
        self.container = match self.page.get_element_by_id(&container_id) {
            Some(existing) => existing,
            None => {
                let container = self.page.create_element("div");
                self.page.set_id(container, &container_id);
                self.page.add_class(container, render::CONTAINER_CLASS);
                let body = self.page.body();
                self.page.append_child(body, container);
                container
            }
        };
        self.container
    }

    /// Shows a toast and returns its ID immediately.
    ///
    /// When the active list is full, the oldest toast is dismissed first.
    pub fn show(&mut self, options: ToastOptions) -> ToastId {
        let container = self.init();
        let capacity = self.config.max_toasts().value();
        while self.active.len() >= capacity {
            let Some(oldest) = self.active.front().map(ToastRecord::id) else {
                break;
            };
            self.dismiss_with(oldest, DismissReason::Evicted);
        }

        let id = self.ids.next(self.clock.timestamp_millis());
        let duration = options
            .duration
            .unwrap_or_else(|| self.config.default_duration());
        let icon = options
            .icon
            .unwrap_or_else(|| options.severity.icon_markup().to_string());

        let element = render::build(
            &mut self.page,
            ToastView {
                id,
                severity: options.severity,
                title: options.title.clone(),
                message: options.message.clone(),
                icon,
                closable: options.closable,
                action: options.action,
            },
            &self.outbox,
        );
        self.page.append_child(container, element);

        self.active.push_back(ToastRecord {
            id,
            element,
            severity: options.severity,
            title: options.title,
            message: options.message,
            duration,
        });

        let now = self.clock.now();
        self.timers
            .schedule(now, self.config.enter_delay(), Timer::Reveal(id));
        if let Some(after) = duration.auto_dismiss_after() {
            self.timers.schedule(now, after, Timer::AutoDismiss(id));
        }

        self.log(DiagnosticEventKind::shown(
            id,
            options.severity,
            duration.is_persistent(),
        ));
        id
    }

    /// Dismisses a toast. Unknown or already dismissed IDs are ignored.
    pub fn dismiss(&mut self, id: ToastId) {
        self.dismiss_with(id, DismissReason::Manual);
    }

    /// Dismisses every active toast.
    pub fn dismiss_all(&mut self) {
        let ids: Vec<ToastId> = self.active.iter().map(ToastRecord::id).collect();
        for id in ids {
            self.dismiss_with(id, DismissReason::All);
        }
    }

    /// Shows a success toast with the default duration.
    pub fn success(&mut self, message: impl Into<String>, title: Option<&str>) -> ToastId {
        let duration = self.config.default_duration();
        self.show_with(Severity::Success, message, title, duration)
    }

    /// Shows an error toast, kept longer than the default.
    pub fn error(&mut self, message: impl Into<String>, title: Option<&str>) -> ToastId {
        let duration = self.config.error_duration();
        self.show_with(Severity::Error, message, title, duration)
    }

    /// Shows a warning toast, kept longer than the default.
    pub fn warning(&mut self, message: impl Into<String>, title: Option<&str>) -> ToastId {
        let duration = self.config.warning_duration();
        self.show_with(Severity::Warning, message, title, duration)
    }

    /// Shows an info toast with the default duration.
    pub fn info(&mut self, message: impl Into<String>, title: Option<&str>) -> ToastId {
        let duration = self.config.default_duration();
        self.show_with(Severity::Info, message, title, duration)
    }

    /// Shows a persistent, non-closable toast with a spinner.
    ///
    /// The returned handle dismisses it or replaces it with a final message.
    pub fn loading(&mut self, message: Option<&str>) -> LoadingHandle {
        let options = ToastOptions::new(message.unwrap_or(DEFAULT_LOADING_MESSAGE))
            .persistent()
            .closable(false)
            .icon(icons::SPINNER);
        let id = self.show(options);
        if let Some(element) = self.get(id).map(ToastRecord::element) {
            self.page.add_class(element, render::LOADING_CLASS);
        }
        LoadingHandle::new(id)
    }

    /// Runs every timer that has come due.
    pub fn tick(&mut self) {
        let now = self.clock.now();
        for timer in self.timers.drain_due(now) {
            match timer {
                Timer::Reveal(id) => {
                    if let Some(record) = self.active.iter().find(|r| r.id == id) {
                        self.page.add_class(record.element, render::SHOW_CLASS);
                    }
                }
                Timer::AutoDismiss(id) => self.dismiss_with(id, DismissReason::Timeout),
                Timer::Remove(id) => self.remove(id),
            }
        }
    }

    /// Delivers a click to a page element and applies what its listeners
    /// requested.
    ///
    /// Returns `true` if a listener handled the click.
    pub fn click(&mut self, node: NodeId) -> bool {
        let handled = self.page.dispatch_event(node, EventKind::Click);
        let requests: Vec<Request> = self.outbox.borrow_mut().drain(..).collect();
        for request in requests {
            match request {
                Request::Dismiss(id, reason) => self.dismiss_with(id, reason),
            }
        }
        handled
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message) {
        match *message {
            Message::Clicked(node) => {
                self.click(node);
            }
            Message::Dismiss(id) => self.dismiss(id),
            Message::DismissAll => self.dismiss_all(),
            Message::Tick => self.tick(),
        }
    }

    /// Returns the active toasts, oldest first.
    pub fn active(&self) -> impl Iterator<Item = &ToastRecord> {
        self.active.iter()
    }

    #[must_use]
    pub fn active_ids(&self) -> Vec<ToastId> {
        self.active.iter().map(ToastRecord::id).collect()
    }

    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Number of dismissed toasts still playing their exit animation.
    #[must_use]
    pub fn leaving_count(&self) -> usize {
        self.leaving.len()
    }

    #[must_use]
    pub fn is_active(&self, id: ToastId) -> bool {
        self.active.iter().any(|r| r.id == id)
    }

    /// Looks a toast up among active and leaving toasts.
    #[must_use]
    pub fn get(&self, id: ToastId) -> Option<&ToastRecord> {
        self.active
            .iter()
            .chain(self.leaving.iter())
            .find(|r| r.id == id)
    }

    /// Returns whether anything is on screen or waiting on a timer.
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.active.is_empty() || !self.leaving.is_empty() || !self.timers.is_empty()
    }

    /// Time left until the earliest pending timer, if any.
    ///
    /// Hosts can use it to pick how often to call [`Self::tick`].
    #[must_use]
    pub fn next_timer_in(&self) -> Option<Duration> {
        let now = self.clock.now();
        self.timers
            .next_due()
            .map(|due| due.saturating_sub(now))
    }

    /// Number of timers waiting to fire.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    #[must_use]
    pub fn container(&self) -> NodeId {
        self.container
    }

    #[must_use]
    pub fn page(&self) -> &P {
        &self.page
    }

    /// Mutable page access for the rest of the host application.
    pub fn page_mut(&mut self) -> &mut P {
        &mut self.page
    }

    #[must_use]
    pub fn config(&self) -> &ToastConfig {
        &self.config
    }

    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Starts the exit animation and schedules the removal.
    pub(crate) fn dismiss_with(&mut self, id: ToastId, reason: DismissReason) {
        let Some(position) = self.active.iter().position(|r| r.id == id) else {
            return;
        };
        let Some(record) = self.active.remove(position) else {
            return;
        };
        self.page.remove_class(record.element, render::SHOW_CLASS);
        self.page.add_class(record.element, render::HIDE_CLASS);
        self.leaving.push(record);

        let now = self.clock.now();
        self.timers
            .schedule(now, self.config.removal_delay(), Timer::Remove(id));
        self.log(DiagnosticEventKind::dismissed(id, reason));
    }

    fn remove(&mut self, id: ToastId) {
        let Some(position) = self.leaving.iter().position(|r| r.id == id) else {
            return;
        };
        let record = self.leaving.remove(position);
        self.page.remove(record.element);
        self.log(DiagnosticEventKind::removed(id));
    }

    /// Drops records whose element is no longer on the page. Their pending
    /// timers find nothing and do nothing.
    fn forget_detached(&mut self) {
        let page = &self.page;
        let (kept, gone): (VecDeque<_>, VecDeque<_>) = self
            .active
            .drain(..)
            .partition(|r| page.contains(r.element));
        self.active = kept;
        let (leaving, gone_leaving): (Vec<_>, Vec<_>) = self
            .leaving
            .drain(..)
            .partition(|r| page.contains(r.element));
        self.leaving = leaving;

        for record in gone.into_iter().chain(gone_leaving) {
            self.log(DiagnosticEventKind::removed(record.id));
        }
    }

    fn show_with(
        &mut self,
        severity: Severity,
        message: impl Into<String>,
        title: Option<&str>,
        duration: ToastDuration,
    ) -> ToastId {
        let mut options = ToastOptions::new(message).severity(severity);
        options.duration = Some(duration);
        if let Some(title) = title {
            options = options.title(title);
        }
        self.show(options)
    }

    fn log(&self, kind: DiagnosticEventKind) {
        if let Some(handle) = &self.diagnostics {
            handle.log(self.clock.now(), kind);
        }
    }
}
