// SPDX-License-Identifier: MPL-2.0
//! Demo application showing the toast overlay.
//!
//! The `App` owns a single `NotificationManager`, forwards toast clicks to
//! it, and drives its timers from a periodic tick. Every button of the
//! control panel exercises one entry point of the manager.

mod subscription;

pub use subscription::{tick_interval, MIN_TICK_INTERVAL, TICK_INTERVAL};

use crate::config::{self, ToastConfig};
use crate::diagnostics::DiagnosticsCollector;
use crate::notifications::{
    ActionSpec, LoadingHandle, NotificationManager, NotificationMessage, Severity, ToastOptions,
};
use crate::page::Document;
use crate::timing::SystemClock;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::toast;
use iced::widget::{button, Column, Container, Row, Stack, Text};
use iced::{window, Element, Length, Subscription, Task, Theme};
use std::cell::Cell;
use std::path::PathBuf;
use std::rc::Rc;

pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 600;

/// Runtime flags passed in from the command line.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Config file to read instead of the per-user one.
    pub config_path: Option<PathBuf>,
    /// Overrides the configured capacity.
    pub max_toasts: Option<usize>,
}

#[derive(Debug, Clone)]
pub enum Message {
    Notification(NotificationMessage),
    Show(Severity),
    ShowWithAction,
    ShowPersistent,
    StartLoading,
    FinishLoading,
    DismissAll,
    ExportDiagnostics,
    Tick,
}

pub struct App {
    notifications: NotificationManager<Document, SystemClock>,
    diagnostics: DiagnosticsCollector,
    loading: Option<LoadingHandle>,
    undo_count: Rc<Cell<u32>>,
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    // iced 0.14 requires an `Fn` boot function; flags are cloned per call.
    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Resolves the configuration from flags, falling back to defaults.
pub fn resolve_config(flags: &Flags) -> ToastConfig {
    let loaded = match &flags.config_path {
        Some(path) => config::load_from_path(path),
        None => config::load(),
    };
    let mut config = loaded.unwrap_or_else(|err| {
        eprintln!("[WARN] Failed to load toast config: {err}. Using defaults.");
        ToastConfig::default()
    });
    if let Some(max) = flags.max_toasts {
        config.max_toasts = max;
    }
    config
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = resolve_config(&flags);
        let diagnostics = DiagnosticsCollector::default();
        let mut notifications = NotificationManager::new(Document::new(), SystemClock::new(), config);
        notifications.set_diagnostics(diagnostics.handle());

        let app = Self {
            notifications,
            diagnostics,
            loading: None,
            undo_count: Rc::new(Cell::new(0)),
        };
        (app, Task::none())
    }

    fn title(&self) -> String {
        format!("Toasts ({} active)", self.notifications.active_count())
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.notifications.next_timer_in())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Notification(message) => self.notifications.handle_message(&message),
            Message::Show(severity) => {
                let text = format!("This is a {severity} toast");
                match severity {
                    Severity::Success => self.notifications.success(text, None),
                    Severity::Error => self.notifications.error(text, Some("Something failed")),
                    Severity::Warning => self.notifications.warning(text, None),
                    Severity::Info => self.notifications.info(text, None),
                };
            }
            Message::ShowWithAction => {
                let undo_count = Rc::clone(&self.undo_count);
                self.notifications.show(
                    ToastOptions::new("Item deleted")
                        .severity(Severity::Info)
                        .duration_ms(6000)
                        .action(ActionSpec::new("Undo", move || {
                            undo_count.set(undo_count.get() + 1);
                        })),
                );
            }
            Message::ShowPersistent => {
                self.notifications.show(
                    ToastOptions::new("Stays until closed")
                        .title("Pinned")
                        .severity(Severity::Warning)
                        .persistent(),
                );
            }
            Message::StartLoading => {
                if let Some(previous) = self.loading.take() {
                    previous.dismiss(&mut self.notifications);
                }
                self.loading = Some(self.notifications.loading(Some("Uploading...")));
            }
            Message::FinishLoading => {
                if let Some(handle) = self.loading.take() {
                    handle.update(&mut self.notifications, "Upload complete", None);
                }
            }
            Message::DismissAll => self.notifications.dismiss_all(),
            Message::ExportDiagnostics => {
                self.diagnostics.process_pending();
                match self.diagnostics.export_json() {
                    Ok(json) => println!("{json}"),
                    Err(err) => eprintln!("Failed to export diagnostics: {err}"),
                }
            }
            Message::Tick => {
                self.notifications.tick();
                self.diagnostics.process_pending();
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        let severities = Severity::ALL.into_iter().fold(
            Row::new().spacing(spacing::XS),
            |row, severity| {
                row.push(button(Text::new(severity.as_str())).on_press(Message::Show(severity)))
            },
        );

        let extras = Row::new()
            .spacing(spacing::XS)
            .push(button(Text::new("action")).on_press(Message::ShowWithAction))
            .push(button(Text::new("persistent")).on_press(Message::ShowPersistent))
            .push(button(Text::new("start loading")).on_press(Message::StartLoading))
            .push(
                button(Text::new("finish loading"))
                    .on_press_maybe(self.loading.map(|_| Message::FinishLoading)),
            )
            .push(button(Text::new("dismiss all")).on_press(Message::DismissAll))
            .push(button(Text::new("export diagnostics")).on_press(Message::ExportDiagnostics));

        let status = Text::new(format!(
            "active: {}  leaving: {}  undo clicks: {}",
            self.notifications.active_count(),
            self.notifications.leaving_count(),
            self.undo_count.get()
        ))
        .size(typography::BODY);

        let controls = Container::new(
            Column::new()
                .spacing(spacing::MD)
                .push(severities)
                .push(extras)
                .push(status),
        )
        .padding(spacing::MD)
        .width(Length::Fill)
        .height(Length::Fill);

        Stack::new()
            .push(controls)
            .push(toast::view_overlay(&self.notifications).map(Message::Notification))
            .into()
    }
}
