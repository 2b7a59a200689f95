// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Toasts appear temporarily to inform users about actions (save success,
//! errors, etc.) without blocking interaction.
//!
//! # Components
//!
//! - `notification` - identifiers, severities and show options
//! - `manager` - `NotificationManager` for capacity and lifecycle
//! - `loading` - handle for spinner toasts
//! - [`render`] - element tree of a single toast
//! - [`icons`] - icon-font markup per severity
//!
//! # Usage
//!
//! ```
//! use iced_toasts::config::ToastConfig;
//! use iced_toasts::notifications::{NotificationManager, Severity, ToastOptions};
//! use iced_toasts::page::Document;
//! use iced_toasts::timing::ManualClock;
//!
//! let clock = ManualClock::new();
//! let mut manager = NotificationManager::new(Document::new(), clock.clone(), ToastConfig::default());
//!
//! let id = manager.show(ToastOptions::new("Saved").severity(Severity::Success));
//! assert_eq!(manager.active_count(), 1);
//!
//! // 3000 ms on screen, then 300 ms of exit animation
//! clock.advance_millis(3000);
//! manager.tick();
//! clock.advance_millis(300);
//! manager.tick();
//! assert!(manager.get(id).is_none());
//! ```
//!
//! # Timing
//!
//! - success/info: 3 s, warning: 4 s, error: 5 s, loading: until dismissed
//! - at most 5 toasts visible; the oldest is evicted first

pub mod icons;
mod loading;
mod manager;
mod notification;
pub mod render;

pub use loading::LoadingHandle;
pub use manager::{Message as NotificationMessage, NotificationManager, ToastRecord};
pub use notification::{ActionSpec, IdGenerator, ParseToastIdError, Severity, ToastId, ToastOptions};
