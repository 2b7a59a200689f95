// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering the notification container.
//!
//! The renderer reads the element tree the manager maintains on its page,
//! so whatever the page holds is what gets drawn. Toasts that are playing
//! their exit animation are drawn faded.

use crate::notifications::render::{
    ACTION_CLASS, CLOSE_CLASS, HIDE_CLASS, ICON_CLASS, MESSAGE_CLASS, TITLE_CLASS, TOAST_CLASS,
};
use crate::notifications::{icons, NotificationManager, NotificationMessage, Severity};
use crate::page::{NodeId, Page};
use crate::timing::Clock;
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Accent color of a severity.
#[must_use]
pub fn accent_color(severity: Severity) -> Color {
    match severity {
        Severity::Success => palette::SUCCESS_500,
        Severity::Error => palette::ERROR_500,
        Severity::Warning => palette::WARNING_500,
        Severity::Info => palette::INFO_500,
    }
}

/// Reads the severity back from a toast element's classes.
fn severity_of<P: Page>(page: &P, node: NodeId) -> Severity {
    Severity::ALL
        .into_iter()
        .find(|severity| page.has_class(node, severity.css_class()))
        .unwrap_or_default()
}

/// Renders a single toast element.
pub fn view<P: Page>(page: &P, node: NodeId) -> Element<'_, NotificationMessage> {
    let leaving = page.has_class(node, HIDE_CLASS);
    let alpha = if leaving {
        opacity::LEAVING
    } else {
        opacity::OPAQUE
    };
    let accent = Color {
        a: alpha,
        ..accent_color(severity_of(page, node))
    };

    let icon = page
        .find_by_class(node, ICON_CLASS)
        .map_or("", |icon| icons::glyph(page.markup(icon)));
    let icon_widget = Text::new(icon)
        .size(sizing::ICON_MD)
        .style(move |_theme: &Theme| text::Style {
            color: Some(accent),
        });

    let mut body = Column::new().spacing(spacing::XXS);
    if let Some(title) = page.find_by_class(node, TITLE_CLASS) {
        body = body.push(
            Text::new(page.text(title))
                .size(typography::TITLE_SM)
                .style(move |theme: &Theme| faded_text(theme, alpha)),
        );
    }
    if let Some(message) = page.find_by_class(node, MESSAGE_CLASS) {
        body = body.push(
            Text::new(page.text(message))
                .size(typography::BODY)
                .style(move |theme: &Theme| faded_text(theme, alpha)),
        );
    }

    // Layout: [icon] [title/message] [action] [close]
    let mut content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Container::new(icon_widget).padding(spacing::XXS))
        .push(
            Container::new(body)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Left),
        );

    if let Some(action) = page.find_by_class(node, ACTION_CLASS) {
        content = content.push(
            button(Text::new(page.text(action)).size(typography::CAPTION))
                .on_press(NotificationMessage::Clicked(action))
                .padding(spacing::XXS)
                .style(move |theme: &Theme, status| action_button_style(theme, status, accent)),
        );
    }
    if let Some(close) = page.find_by_class(node, CLOSE_CLASS) {
        content = content.push(
            button(Text::new(page.markup(close)).size(sizing::ICON_SM))
                .on_press(NotificationMessage::Clicked(close))
                .padding(spacing::XXS)
                .style(dismiss_button_style),
        );
    }

    Container::new(content)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(move |theme: &Theme| toast_container_style(theme, accent))
        .into()
}

/// Renders the toast overlay with every toast in the manager's container.
///
/// Positions toasts in the top-right corner, stacked in insertion order.
pub fn view_overlay<P: Page, C: Clock>(
    manager: &NotificationManager<P, C>,
) -> Element<'_, NotificationMessage> {
    let page = manager.page();
    let toasts: Vec<Element<'_, NotificationMessage>> = page
        .children(manager.container())
        .iter()
        .filter(|&&node| page.has_class(node, TOAST_CLASS))
        .map(|&node| view(page, node))
        .collect();

    if toasts.is_empty() {
        return Container::new(text(""))
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into();
    }

    let toast_column = Column::with_children(toasts)
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Right);

    Container::new(toast_column)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Top)
        .padding(spacing::MD)
        .into()
}

fn faded_text(theme: &Theme, alpha: f32) -> text::Style {
    text::Style {
        color: Some(Color {
            a: alpha,
            ..theme.palette().text
        }),
    }
}

/// Style function for the toast container.
fn toast_container_style(theme: &Theme, accent_color: Color) -> container::Style {
    let bg_color = Color {
        a: accent_color.a,
        ..theme.extended_palette().background.base.color
    };

    container::Style {
        background: Some(iced::Background::Color(bg_color)),
        border: iced::Border {
            color: accent_color,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Style function for the action button.
fn action_button_style(theme: &Theme, status: button::Status, accent: Color) -> button::Style {
    let base = theme.extended_palette().background.base;
    let fill = match status {
        button::Status::Active | button::Status::Disabled => opacity::OVERLAY_SUBTLE,
        button::Status::Hovered | button::Status::Pressed => opacity::OVERLAY_MEDIUM,
    };

    button::Style {
        background: Some(iced::Background::Color(Color { a: fill, ..accent })),
        text_color: base.text,
        border: iced::Border {
            color: accent,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;

    match status {
        button::Status::Active => button::Style {
            background: None,
            text_color: base.text,
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered | button::Status::Pressed => {
            let alpha = if status == button::Status::Hovered {
                opacity::OVERLAY_SUBTLE
            } else {
                opacity::OVERLAY_MEDIUM
            };
            button::Style {
                background: Some(iced::Background::Color(Color {
                    a: alpha,
                    ..palette::GRAY_400
                })),
                text_color: base.text,
                border: iced::Border {
                    radius: radius::SM.into(),
                    ..Default::default()
                },
                shadow: shadow::NONE,
                snap: true,
            }
        }
        button::Status::Disabled => button::Style {
            background: None,
            text_color: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..base.text
            },
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
    }
}
