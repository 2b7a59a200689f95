// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the identifiers, severity levels and creation options
//! used throughout the notification system.

use super::icons;
use crate::domain::ToastDuration;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// ToastId
// =============================================================================

const ID_PREFIX: &str = "toast-";

/// Unique identifier for a toast, displayed as `toast-<digits>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ToastId(u64);

impl ToastId {
    /// Returns the numeric part of the identifier.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{ID_PREFIX}{}", self.0)
    }
}

/// Error returned when a string is not of the form `toast-<digits>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseToastIdError(String);

impl fmt::Display for ParseToastIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid toast id: {:?}", self.0)
    }
}

impl std::error::Error for ParseToastIdError {}

impl FromStr for ToastId {
    type Err = ParseToastIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_prefix(ID_PREFIX)
            .filter(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
            .and_then(|digits| digits.parse().ok())
            .map(Self)
            .ok_or_else(|| ParseToastIdError(s.to_string()))
    }
}

/// Generates identifiers from a millisecond timestamp.
///
/// Two calls within the same millisecond (or a clock going backwards) still
/// get distinct, increasing identifiers: each id is at least one above the
/// previous one.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: Option<u64>,
}

impl IdGenerator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&mut self, timestamp_millis: u64) -> ToastId {
        let value = match self.last {
            Some(last) if timestamp_millis <= last => last.saturating_add(1),
            _ => timestamp_millis,
        };
        self.last = Some(value);
        ToastId(value)
    }
}

// =============================================================================
// Severity
// =============================================================================

/// Severity level determines styling, icon and default duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Operation completed successfully.
    Success,
    /// Something failed and the user should know.
    Error,
    /// Something needs attention but nothing failed.
    Warning,
    /// Neutral information.
    #[default]
    Info,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Success,
        Severity::Error,
        Severity::Warning,
        Severity::Info,
    ];

    /// Parses a severity name, case-insensitively.
    ///
    /// Unknown names fall back to [`Severity::Info`].
    #[must_use]
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "success" => Severity::Success,
            "error" => Severity::Error,
            "warning" => Severity::Warning,
            _ => Severity::Info,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }

    /// Styling hook applied to the toast element, e.g. `toast-error`.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Severity::Success => "toast-success",
            Severity::Error => "toast-error",
            Severity::Warning => "toast-warning",
            Severity::Info => "toast-info",
        }
    }

    /// Default icon-font markup for this severity.
    #[must_use]
    pub fn icon_markup(self) -> &'static str {
        icons::for_severity(self)
    }
}

impl From<&str> for Severity {
    fn from(name: &str) -> Self {
        Self::parse(name)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// ActionSpec
// =============================================================================

/// Secondary control rendered on a toast.
///
/// Clicking it runs the callback and then dismisses the toast. Without a
/// callback the control is inert: the click goes no further.
pub struct ActionSpec {
    label: String,
    on_click: Option<Box<dyn FnMut()>>,
}

impl ActionSpec {
    pub fn new(label: impl Into<String>, on_click: impl FnMut() + 'static) -> Self {
        Self {
            label: label.into(),
            on_click: Some(Box::new(on_click)),
        }
    }

    /// An action control with no behavior attached.
    pub fn label_only(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            on_click: None,
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn has_callback(&self) -> bool {
        self.on_click.is_some()
    }

    pub(crate) fn into_parts(self) -> (String, Option<Box<dyn FnMut()>>) {
        (self.label, self.on_click)
    }
}

impl fmt::Debug for ActionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionSpec")
            .field("label", &self.label)
            .field("has_callback", &self.has_callback())
            .finish()
    }
}

// =============================================================================
// ToastOptions
// =============================================================================

/// Options accepted by `NotificationManager::show`.
///
/// Anything left unset takes the manager's defaults: empty title and
/// message, [`Severity::Info`], the configured default duration, a close
/// control, and the severity's icon.
#[derive(Debug)]
pub struct ToastOptions {
    pub(crate) title: String,
    pub(crate) message: String,
    pub(crate) severity: Severity,
    pub(crate) duration: Option<ToastDuration>,
    pub(crate) closable: bool,
    pub(crate) icon: Option<String>,
    pub(crate) action: Option<ActionSpec>,
}

impl Default for ToastOptions {
    fn default() -> Self {
        Self {
            title: String::new(),
            message: String::new(),
            severity: Severity::default(),
            duration: None,
            closable: true,
            icon: None,
            action: None,
        }
    }
}

impl ToastOptions {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Display time in milliseconds; `0` keeps the toast until dismissed.
    #[must_use]
    pub fn duration_ms(mut self, millis: u64) -> Self {
        self.duration = Some(ToastDuration::from_millis(millis));
        self
    }

    /// Keeps the toast until it is dismissed explicitly.
    #[must_use]
    pub fn persistent(mut self) -> Self {
        self.duration = Some(ToastDuration::PERSISTENT);
        self
    }

    #[must_use]
    pub fn closable(mut self, closable: bool) -> Self {
        self.closable = closable;
        self
    }

    /// Replaces the severity icon with custom markup.
    #[must_use]
    pub fn icon(mut self, markup: impl Into<String>) -> Self {
        self.icon = Some(markup.into());
        self
    }

    #[must_use]
    pub fn action(mut self, action: ActionSpec) -> Self {
        self.action = Some(action);
        self
    }
}
