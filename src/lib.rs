// SPDX-License-Identifier: MPL-2.0
//! `iced_toasts` is a toast notification manager with an Iced renderer.
//!
//! The [`notifications::NotificationManager`] keeps a bounded list of
//! transient messages on a DOM-like [`page::Page`], expires them on a
//! logical [`timing::Clock`], and lets [`ui::toast`] draw them as an
//! overlay. The [`app`] module is a small demo wiring it all together.

#![doc(html_root_url = "https://docs.rs/iced_toasts/0.1.0")]

pub mod app;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod notifications;
pub mod page;
pub mod timing;
pub mod ui;
